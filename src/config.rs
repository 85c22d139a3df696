//! Run configuration: which memory model to assemble into and how to prepare it.
//!
//! ```toml
//! model = "ZXSPECTRUM128"
//! zx_sys_vars = true
//!
//! [[slots]]
//! slot = 3
//! page = 1
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MemoryError;
use crate::plain::PLAIN_MODEL_NAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotMapping {
    pub slot: usize,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Memory model name, e.g. `PLAIN` or `ZXSPECTRUM128`
    pub model: String,
    /// Seed the system-variable area after selecting the model
    pub zx_sys_vars: bool,
    /// Paging applied right after selection, in order
    pub slots: Vec<SlotMapping>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        MemoryConfig {
            model: PLAIN_MODEL_NAME.to_string(),
            zx_sys_vars: false,
            slots: Vec::new(),
        }
    }
}

impl MemoryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, MemoryError> {
        toml::from_str(text).map_err(|e| MemoryError::ConfigError(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let text = fs::read_to_string(path.as_ref()).map_err(|e| {
            MemoryError::IOError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, MemoryError> {
        toml::to_string(self).map_err(|e| MemoryError::ConfigError(e.to_string()))
    }
}
