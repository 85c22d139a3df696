// Memory Model Error Handling

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    // Paging errors
    PagingUnsupported(String),    // model name
    SlotOutOfRange(usize, usize), // slot, number of slots
    PageOutOfRange(usize, usize), // page, number of pages

    // Selection errors
    UnknownModel(String),

    // Configuration errors
    ConfigError(String),

    // IO errors
    IOError(String),
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryError::PagingUnsupported(model) => {
                write!(f, "The {} memory model does not support page switching", model)
            }
            MemoryError::SlotOutOfRange(_, num_slots) => {
                write!(f, "Slot number must be in range 0..{}", num_slots.saturating_sub(1))
            }
            MemoryError::PageOutOfRange(_, num_pages) => {
                write!(f, "Page number must be in range 0..{}", num_pages.saturating_sub(1))
            }
            MemoryError::UnknownModel(name) => {
                write!(f, "Unknown memory model '{}'", name)
            }
            MemoryError::ConfigError(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            MemoryError::IOError(msg) => {
                write!(f, "IO error: {}", msg)
            }
        }
    }
}

impl std::error::Error for MemoryError {}

impl From<std::io::Error> for MemoryError {
    fn from(err: std::io::Error) -> Self {
        MemoryError::IOError(err.to_string())
    }
}
