//! Address-space capability interface shared by every target memory topology.
//!
//! All emission goes through 16-bit logical addresses. Arithmetic on them is
//! 16-bit: multi-byte operations that run past 0xFFFF continue at 0x0000.

use crate::error::MemoryError;

/// Size of the logical address space
pub const ADDRESS_SPACE_SIZE: usize = 0x10000;

/// Size of one physical page, and of one slot window
pub const PAGE_SIZE: usize = 0x4000;

/// Number of slot windows in a banked topology
pub const NUM_SLOTS: usize = 4;

/// Operations every memory topology supports.
///
/// Writes carry an `ephemeral` flag. A committed write stores the byte and
/// marks its location used; an ephemeral write only stores it, so a later
/// [`AddressSpace::clear_ephemerals`] zeroes it again unless a committed
/// write covered the same physical byte.
pub trait AddressSpace {
    /// Name the model was selected by
    fn name(&self) -> &str;

    fn is_paged_memory(&self) -> bool;

    fn num_mem_pages(&self) -> usize;

    /// Slot whose mapped page receives output when no paging context is given
    fn default_slot(&self) -> usize;

    fn page_num_in_slot(&self, slot: usize) -> usize;

    fn read_byte(&self, addr: u16) -> u8;

    fn write_byte(&mut self, addr: u16, byte: u8, ephemeral: bool);

    /// Write a little-endian word, low byte first.
    fn write_word(&mut self, addr: u16, word: u16, ephemeral: bool) {
        self.write_byte(addr, (word & 0xFF) as u8, ephemeral);
        self.write_byte(addr.wrapping_add(1), (word >> 8) as u8, ephemeral);
    }

    /// Has a committed write touched this logical address?
    fn used_addr(&self, addr: u16) -> bool;

    /// Zero every byte whose used marker is still false.
    fn clear_ephemerals(&mut self);

    /// Zero all storage and all used markers.
    fn clear(&mut self);

    /// Copy `src` to consecutive logical addresses starting at `addr`.
    fn copy_to_memory(&mut self, addr: u16, src: &[u8]) {
        for (i, &byte) in src.iter().enumerate() {
            self.write_byte(addr.wrapping_add(i as u16), byte, false);
        }
    }

    /// Fill `size` consecutive logical addresses starting at `addr`.
    fn fill_memory(&mut self, addr: u16, byte: u8, size: usize) {
        for i in 0..size {
            self.write_byte(addr.wrapping_add(i as u16), byte, false);
        }
    }

    /// Map `page` into `slot`. On error the mapping is left unchanged.
    fn set_page(&mut self, slot: usize, page: usize) -> Result<(), MemoryError>;

    /// Map `page` into the slot covering `addr`.
    fn set_page_for_address(&mut self, addr: u16, page: usize) -> Result<(), MemoryError>;

    fn validate_slot(&self, slot: usize) -> Result<(), MemoryError>;

    fn page_for_address(&self, addr: u16) -> usize;

    /// Fill `dest` from consecutive logical addresses starting at `addr`.
    fn get_bytes(&self, dest: &mut [u8], addr: u16) {
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = self.read_byte(addr.wrapping_add(i as u16));
        }
    }

    /// The whole physical buffer: pages in ascending order, or the flat 64K.
    fn memory(&self) -> &[u8];

    /// Seed the target's system-variable area.
    fn init_zx_sys_vars(&mut self);

    fn zx_sys_vars_initialized(&self) -> bool;
}
