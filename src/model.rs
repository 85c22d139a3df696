//! The closed set of memory topologies.

use std::fmt::{Display, Error, Formatter};

use log::error;

use crate::address_space::{AddressSpace, ADDRESS_SPACE_SIZE, NUM_SLOTS, PAGE_SIZE};
use crate::banked::BankedMemory;
use crate::error::MemoryError;
use crate::plain::PlainMemory;

/// A target memory model: flat 64K or banked.
///
/// Paging-only operations live on [`BankedMemory`]. They are forwarded here
/// too, but on the plain model they are contract violations and panic; check
/// [`AddressSpace::is_paged_memory`] or use [`MemoryModel::banked`] first.
#[derive(Debug, Clone)]
pub enum MemoryModel {
    Plain(PlainMemory),
    Banked(BankedMemory),
}

impl MemoryModel {
    /// Build the model a recognised name maps to; zero pages means flat.
    pub fn with_pages(name: &str, num_pages: usize) -> Self {
        if num_pages == 0 {
            MemoryModel::Plain(PlainMemory::new())
        } else {
            MemoryModel::Banked(BankedMemory::new(name, num_pages))
        }
    }

    pub fn banked(&self) -> Option<&BankedMemory> {
        match self {
            MemoryModel::Banked(mem) => Some(mem),
            MemoryModel::Plain(_) => None,
        }
    }

    pub fn banked_mut(&mut self) -> Option<&mut BankedMemory> {
        match self {
            MemoryModel::Banked(mem) => Some(mem),
            MemoryModel::Plain(_) => None,
        }
    }

    fn space(&self) -> &dyn AddressSpace {
        match self {
            MemoryModel::Plain(mem) => mem,
            MemoryModel::Banked(mem) => mem,
        }
    }

    fn space_mut(&mut self) -> &mut dyn AddressSpace {
        match self {
            MemoryModel::Plain(mem) => mem,
            MemoryModel::Banked(mem) => mem,
        }
    }

    fn expect_banked(&self, op: &str) -> &BankedMemory {
        match self {
            MemoryModel::Banked(mem) => mem,
            MemoryModel::Plain(mem) => paging_violation(op, mem),
        }
    }

    fn expect_banked_mut(&mut self, op: &str) -> &mut BankedMemory {
        match self {
            MemoryModel::Banked(mem) => mem,
            MemoryModel::Plain(mem) => paging_violation(op, mem),
        }
    }

    /// # Panics
    ///
    /// Panics on the plain model.
    pub fn get_bytes_in_slot(&self, dest: &mut [u8], slot: usize, addr_in_slot: u16) {
        self.expect_banked("get_bytes_in_slot")
            .get_bytes_in_slot(dest, slot, addr_in_slot)
    }

    /// # Panics
    ///
    /// Panics on the plain model.
    pub fn page(&self, page: usize) -> &[u8] {
        self.expect_banked("page").page(page)
    }

    /// # Panics
    ///
    /// Panics on the plain model.
    pub fn page_in_slot(&self, slot: usize) -> &[u8] {
        self.expect_banked("page_in_slot").page_in_slot(slot)
    }

    /// # Panics
    ///
    /// Panics on the plain model or when `offset` leaves the page.
    pub fn write_byte_to_page(&mut self, page: usize, offset: u16, byte: u8) {
        self.expect_banked_mut("write_byte_to_page")
            .write_byte_to_page(page, offset, byte)
    }

    pub fn copy_to_page(&mut self, page: usize, offset: u16, src: &[u8]) {
        self.expect_banked_mut("copy_to_page")
            .copy_to_page(page, offset, src)
    }

    pub fn fill_in_page(&mut self, page: usize, offset: u16, byte: u8, size: usize) {
        self.expect_banked_mut("fill_in_page")
            .fill_in_page(page, offset, byte, size)
    }
}

fn paging_violation(op: &str, mem: &PlainMemory) -> ! {
    let err = MemoryError::PagingUnsupported(mem.name().to_string());
    error!("{}() called on a model without paging", op);
    panic!("{}(): {}", op, err);
}

impl AddressSpace for MemoryModel {
    fn name(&self) -> &str {
        self.space().name()
    }

    fn is_paged_memory(&self) -> bool {
        self.space().is_paged_memory()
    }

    fn num_mem_pages(&self) -> usize {
        self.space().num_mem_pages()
    }

    fn default_slot(&self) -> usize {
        self.space().default_slot()
    }

    fn page_num_in_slot(&self, slot: usize) -> usize {
        self.space().page_num_in_slot(slot)
    }

    fn read_byte(&self, addr: u16) -> u8 {
        self.space().read_byte(addr)
    }

    fn write_byte(&mut self, addr: u16, byte: u8, ephemeral: bool) {
        self.space_mut().write_byte(addr, byte, ephemeral)
    }

    fn used_addr(&self, addr: u16) -> bool {
        self.space().used_addr(addr)
    }

    fn clear_ephemerals(&mut self) {
        self.space_mut().clear_ephemerals()
    }

    fn clear(&mut self) {
        self.space_mut().clear()
    }

    fn set_page(&mut self, slot: usize, page: usize) -> Result<(), MemoryError> {
        self.space_mut().set_page(slot, page)
    }

    fn set_page_for_address(&mut self, addr: u16, page: usize) -> Result<(), MemoryError> {
        self.space_mut().set_page_for_address(addr, page)
    }

    fn validate_slot(&self, slot: usize) -> Result<(), MemoryError> {
        self.space().validate_slot(slot)
    }

    fn page_for_address(&self, addr: u16) -> usize {
        self.space().page_for_address(addr)
    }

    fn memory(&self) -> &[u8] {
        self.space().memory()
    }

    fn init_zx_sys_vars(&mut self) {
        self.space_mut().init_zx_sys_vars()
    }

    fn zx_sys_vars_initialized(&self) -> bool {
        self.space().zx_sys_vars_initialized()
    }
}

fn hex_word(value: usize) -> String {
    format!("{:#06x}", value)
}

impl Display for MemoryModel {
    /// formats the slot map
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            MemoryModel::Plain(mem) => {
                writeln!(f, "{} memory model, no paging", mem.name())?;
                writeln!(f, "{:12}{:<8}{:<8}{}", "", "base", "end", "size")?;
                writeln!(
                    f,
                    "{:12}{:<8}{:<8}{:<8}RAM",
                    "",
                    hex_word(0),
                    hex_word(0xFFFF),
                    format!("{:#07x}", ADDRESS_SPACE_SIZE)
                )
            }
            MemoryModel::Banked(mem) => {
                writeln!(f, "{} memory model, {} pages", mem.name(), mem.num_mem_pages())?;
                writeln!(f, "{:12}{:<8}{:<8}{:<6}{}", "", "base", "end", "slot", "page")?;
                for slot in 0..NUM_SLOTS {
                    let base = slot * PAGE_SIZE;
                    let marker = if slot == mem.default_slot() { "  *" } else { "" };
                    writeln!(
                        f,
                        "{:12}{:<8}{:<8}{:<6}{}{}",
                        "",
                        hex_word(base),
                        hex_word(base + PAGE_SIZE - 1),
                        slot,
                        mem.slot_pages()[slot],
                        marker
                    )?;
                }
                Ok(())
            }
        }
    }
}
