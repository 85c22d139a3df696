//! Plain 64K memory without paging.

use bitvec::prelude::*;
use log::{debug, info};

use crate::address_space::{AddressSpace, ADDRESS_SPACE_SIZE};
use crate::error::MemoryError;
use crate::sysvars::{BASIN48_SP, BASIN48_SP_ADDR, BASIN48_SP_SEEDED_LEN, BASIN48_VARS, SYS_VARS_ADDR};

pub const PLAIN_MODEL_NAME: &str = "PLAIN";

/// One contiguous 64K store with a parallel used bitmap.
#[derive(Debug, Clone)]
pub struct PlainMemory {
    memory: Vec<u8>,
    used: BitVec,
    sys_vars_initialized: bool,
}

impl PlainMemory {
    pub fn new() -> Self {
        PlainMemory {
            memory: vec![0; ADDRESS_SPACE_SIZE],
            used: bitvec![0; ADDRESS_SPACE_SIZE],
            sys_vars_initialized: false,
        }
    }

    fn paging_unsupported(&self) -> MemoryError {
        MemoryError::PagingUnsupported(PLAIN_MODEL_NAME.to_string())
    }
}

impl Default for PlainMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSpace for PlainMemory {
    fn name(&self) -> &str {
        PLAIN_MODEL_NAME
    }

    fn is_paged_memory(&self) -> bool {
        false
    }

    fn num_mem_pages(&self) -> usize {
        0
    }

    fn default_slot(&self) -> usize {
        0
    }

    fn page_num_in_slot(&self, _slot: usize) -> usize {
        0
    }

    fn read_byte(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write_byte(&mut self, addr: u16, byte: u8, ephemeral: bool) {
        self.memory[addr as usize] = byte;
        if !ephemeral {
            self.used.set(addr as usize, true);
        }
    }

    fn used_addr(&self, addr: u16) -> bool {
        self.used[addr as usize]
    }

    fn clear_ephemerals(&mut self) {
        let mut zeroed = 0;
        for i in self.used.iter_zeros() {
            if self.memory[i] != 0 {
                self.memory[i] = 0;
                zeroed += 1;
            }
        }
        debug!("Cleared {} ephemeral bytes in {}", zeroed, PLAIN_MODEL_NAME);
    }

    fn clear(&mut self) {
        self.memory.fill(0);
        self.used.fill(false);
        self.sys_vars_initialized = false;
    }

    fn set_page(&mut self, _slot: usize, _page: usize) -> Result<(), MemoryError> {
        Err(self.paging_unsupported())
    }

    fn set_page_for_address(&mut self, _addr: u16, _page: usize) -> Result<(), MemoryError> {
        Err(self.paging_unsupported())
    }

    fn validate_slot(&self, _slot: usize) -> Result<(), MemoryError> {
        Err(self.paging_unsupported())
    }

    fn page_for_address(&self, _addr: u16) -> usize {
        0
    }

    fn memory(&self) -> &[u8] {
        &self.memory
    }

    fn init_zx_sys_vars(&mut self) {
        if self.sys_vars_initialized {
            debug!("48K system variables already seeded");
            return;
        }
        self.copy_to_memory(SYS_VARS_ADDR, &BASIN48_VARS);
        self.copy_to_memory(BASIN48_SP_ADDR, &BASIN48_SP[..BASIN48_SP_SEEDED_LEN]);
        self.sys_vars_initialized = true;
        info!(
            "Seeded 48K system variables at {:#06x} and stack at {:#06x}",
            SYS_VARS_ADDR, BASIN48_SP_ADDR
        );
    }

    fn zx_sys_vars_initialized(&self) -> bool {
        self.sys_vars_initialized
    }
}
