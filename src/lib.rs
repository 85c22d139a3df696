//! Target memory for a Z80 cross-assembler.
//!
//! Code emission writes and reads bytes at 16-bit logical addresses through a
//! [`MemoryManager`]; the selected model decides whether those addresses land
//! in a flat 64K store or in 16K pages mapped through four slot windows.

#[macro_use]
extern crate lazy_static;

pub mod address_space;
pub mod banked;
pub mod config;
pub mod error;
pub mod manager;
pub mod model;
pub mod plain;
pub mod sysvars;

pub use address_space::{AddressSpace, ADDRESS_SPACE_SIZE, NUM_SLOTS, PAGE_SIZE};
pub use banked::BankedMemory;
pub use config::{MemoryConfig, SlotMapping};
pub use error::MemoryError;
pub use manager::MemoryManager;
pub use model::MemoryModel;
pub use plain::PlainMemory;

/*
Default 128K layout

Slot    Logical         Page
0       0000-3FFF       0
1       4000-7FFF       5       system variables at 5C00
2       8000-BFFF       2
3       C000-FFFF       7       default output slot

Physical image: page 0 | page 1 | ... | page N-1, 16K each
*/
