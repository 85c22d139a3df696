//! Banked memory: 16K physical pages seen through four 16K slot windows.
//!
//! Layout after construction, matching the 128K Spectrum at power-on:
//! - $0000-$3FFF: slot 0, page 0
//! - $4000-$7FFF: slot 1, page 5
//! - $8000-$BFFF: slot 2, page 2
//! - $C000-$FFFF: slot 3, page 7 (default output slot)
//!
//! The physical buffer is the concatenation of all pages in page-number order,
//! which is the layout output writers consume.

use bitvec::prelude::*;
use log::{debug, error, info};

use crate::address_space::{AddressSpace, NUM_SLOTS, PAGE_SIZE};
use crate::error::MemoryError;
use crate::sysvars::{SYS_VARS_PAGE, SYS_VARS_PAGE_OFFSET, ZX_SYS_VARS};

const DEFAULT_SLOT_PAGES: [usize; NUM_SLOTS] = [0, 5, 2, 7];

/// Smallest page count the default slot mapping can address
pub const MIN_PAGES: usize = 8;

#[derive(Debug, Clone)]
pub struct BankedMemory {
    name: String,
    num_pages: usize,
    slot_pages: [usize; NUM_SLOTS],
    memory: Vec<u8>,
    used: BitVec,
    sys_vars_initialized: bool,
}

impl BankedMemory {
    /// Create a zeroed banked memory with `num_pages` 16K pages.
    ///
    /// # Panics
    ///
    /// Panics if `num_pages` is below [`MIN_PAGES`].
    pub fn new(name: &str, num_pages: usize) -> Self {
        assert!(
            num_pages >= MIN_PAGES,
            "Banked memory needs at least {} pages, got {}",
            MIN_PAGES,
            num_pages
        );
        BankedMemory {
            name: name.to_string(),
            num_pages,
            slot_pages: DEFAULT_SLOT_PAGES,
            memory: vec![0; num_pages * PAGE_SIZE],
            used: bitvec![0; num_pages * PAGE_SIZE],
            sys_vars_initialized: false,
        }
    }

    fn addr_to_offset(&self, addr: u16) -> usize {
        let addr = addr as usize;
        self.slot_pages[addr / PAGE_SIZE] * PAGE_SIZE + (addr % PAGE_SIZE)
    }

    fn check_page(&self, op: &str, page: usize) {
        if page >= self.num_pages {
            error!("{}: page {} outside {} pages of {}", op, page, self.num_pages, self.name);
            panic!(
                "{}: page {} does not exist in the {} memory model",
                op, page, self.name
            );
        }
    }

    fn check_slot(&self, op: &str, slot: usize) {
        if let Err(err) = self.validate_slot(slot) {
            error!("{}: {}", op, err);
            panic!("{}: {}", op, err);
        }
    }

    /// Current slot-to-page mapping
    pub fn slot_pages(&self) -> &[usize; NUM_SLOTS] {
        &self.slot_pages
    }

    /// Fill `dest` starting at `addr_in_slot` within `slot`'s window.
    ///
    /// Reading continues through the logical address space, wrapping at 64K.
    pub fn get_bytes_in_slot(&self, dest: &mut [u8], slot: usize, addr_in_slot: u16) {
        self.check_slot("get_bytes_in_slot", slot);
        let addr = (slot * PAGE_SIZE) as u16;
        self.get_bytes(dest, addr.wrapping_add(addr_in_slot));
    }

    /// Bytes of physical page `page`.
    ///
    /// # Panics
    ///
    /// Panics if `page` is not below [`AddressSpace::num_mem_pages`].
    pub fn page(&self, page: usize) -> &[u8] {
        self.check_page("page", page);
        &self.memory[page * PAGE_SIZE..(page + 1) * PAGE_SIZE]
    }

    /// Bytes of the page currently mapped into `slot`.
    pub fn page_in_slot(&self, slot: usize) -> &[u8] {
        self.check_slot("page_in_slot", slot);
        self.page(self.slot_pages[slot])
    }

    /// Committed write straight into a physical page, ignoring the slot mapping.
    ///
    /// # Panics
    ///
    /// Panics if `offset` does not fit in a page or `page` does not exist.
    pub fn write_byte_to_page(&mut self, page: usize, offset: u16, byte: u8) {
        if offset as usize >= PAGE_SIZE {
            error!("In-page offset {} with page size {}", offset, PAGE_SIZE);
            panic!(
                "In-page offset {} does not fit in page of size {}",
                offset, PAGE_SIZE
            );
        }
        self.check_page("write_byte_to_page", page);
        let i = page * PAGE_SIZE + offset as usize;
        self.memory[i] = byte;
        self.used.set(i, true);
    }

    pub fn copy_to_page(&mut self, page: usize, offset: u16, src: &[u8]) {
        for (i, &byte) in src.iter().enumerate() {
            self.write_byte_to_page(page, offset.wrapping_add(i as u16), byte);
        }
    }

    pub fn fill_in_page(&mut self, page: usize, offset: u16, byte: u8, size: usize) {
        for i in 0..size {
            self.write_byte_to_page(page, offset.wrapping_add(i as u16), byte);
        }
    }
}

impl AddressSpace for BankedMemory {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_paged_memory(&self) -> bool {
        true
    }

    fn num_mem_pages(&self) -> usize {
        self.num_pages
    }

    fn default_slot(&self) -> usize {
        3
    }

    fn page_num_in_slot(&self, slot: usize) -> usize {
        self.check_slot("page_num_in_slot", slot);
        self.slot_pages[slot]
    }

    fn read_byte(&self, addr: u16) -> u8 {
        self.memory[self.addr_to_offset(addr)]
    }

    fn write_byte(&mut self, addr: u16, byte: u8, ephemeral: bool) {
        let i = self.addr_to_offset(addr);
        self.memory[i] = byte;
        if !ephemeral {
            self.used.set(i, true);
        }
    }

    fn used_addr(&self, addr: u16) -> bool {
        self.used[self.addr_to_offset(addr)]
    }

    fn clear_ephemerals(&mut self) {
        let mut zeroed = 0;
        for i in self.used.iter_zeros() {
            if self.memory[i] != 0 {
                self.memory[i] = 0;
                zeroed += 1;
            }
        }
        debug!("Cleared {} ephemeral bytes in {}", zeroed, self.name);
    }

    fn clear(&mut self) {
        self.memory.fill(0);
        self.used.fill(false);
        self.sys_vars_initialized = false;
    }

    fn set_page(&mut self, slot: usize, page: usize) -> Result<(), MemoryError> {
        self.validate_slot(slot)?;
        if page >= self.num_pages {
            return Err(MemoryError::PageOutOfRange(page, self.num_pages));
        }
        debug!(
            "{}: slot {} page {} -> {}",
            self.name, slot, self.slot_pages[slot], page
        );
        self.slot_pages[slot] = page;
        Ok(())
    }

    fn set_page_for_address(&mut self, addr: u16, page: usize) -> Result<(), MemoryError> {
        self.set_page(addr as usize / PAGE_SIZE, page)
    }

    fn validate_slot(&self, slot: usize) -> Result<(), MemoryError> {
        if slot >= NUM_SLOTS {
            return Err(MemoryError::SlotOutOfRange(slot, NUM_SLOTS));
        }
        Ok(())
    }

    fn page_for_address(&self, addr: u16) -> usize {
        self.slot_pages[addr as usize / PAGE_SIZE]
    }

    fn memory(&self) -> &[u8] {
        &self.memory
    }

    fn init_zx_sys_vars(&mut self) {
        if self.sys_vars_initialized {
            debug!("{} system variables already seeded", self.name);
            return;
        }
        self.copy_to_page(SYS_VARS_PAGE, SYS_VARS_PAGE_OFFSET, &ZX_SYS_VARS);
        self.sys_vars_initialized = true;
        info!(
            "Seeded 128K system variables in page {} at offset {:#06x}",
            SYS_VARS_PAGE, SYS_VARS_PAGE_OFFSET
        );
    }

    fn zx_sys_vars_initialized(&self) -> bool {
        self.sys_vars_initialized
    }
}
