//! MemoryManager knows about memory models and manages them. It collects the
//! assembler's output through whichever model is active for the run.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{error, info, warn};

use crate::address_space::AddressSpace;
use crate::config::MemoryConfig;
use crate::error::MemoryError;
use crate::model::MemoryModel;

lazy_static! {
    /// Recognised model names and their page counts; zero pages means flat.
    pub static ref MEM_MODEL_PAGES: HashMap<&'static str, usize> = {
        let mut m = HashMap::new();
        m.insert("PLAIN", 0);
        m.insert("ZXSPECTRUM128", 8);
        m.insert("ZXSPECTRUM256", 16);
        m.insert("ZXSPECTRUM512", 32);
        m.insert("ZXSPECTRUM1024", 64);
        m
    };
}

/// Owns every instantiated model and forwards to the active one.
///
/// Forwarding operations panic with `no memory model selected` when called
/// before [`MemoryManager::set_mem_model`].
#[derive(Debug, Default)]
pub struct MemoryManager {
    models: IndexMap<String, MemoryModel>,
    current: Option<String>,
}

impl MemoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager, select the configured model, apply the configured
    /// paging and optionally seed system variables.
    pub fn from_config(config: &MemoryConfig) -> Result<Self, MemoryError> {
        let mut manager = MemoryManager::new();
        manager.set_mem_model(&config.model)?;
        for mapping in &config.slots {
            manager.set_page(mapping.slot, mapping.page)?;
        }
        if config.zx_sys_vars {
            manager.init_zx_sys_vars();
        }
        Ok(manager)
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Select the model for this run, instantiating it on first use.
    pub fn set_mem_model(&mut self, name: &str) -> Result<(), MemoryError> {
        let key = name.to_ascii_uppercase();
        let num_pages = *MEM_MODEL_PAGES
            .get(key.as_str())
            .ok_or_else(|| MemoryError::UnknownModel(name.to_string()))?;

        if let Some(current) = &self.current {
            if *current != key {
                warn!("Switching memory model from {} to {}", current, key);
            }
        }

        let model = self
            .models
            .entry(key.clone())
            .or_insert_with(|| MemoryModel::with_pages(&key, num_pages));
        info!("Memory model {} selected ({} pages)", key, model.num_mem_pages());
        self.current = Some(key);
        Ok(())
    }

    /// Names of every model instantiated so far, in selection order
    pub fn instantiated_models(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn mem_model(&self) -> &MemoryModel {
        match self.current.as_ref().and_then(|name| self.models.get(name)) {
            Some(model) => model,
            None => no_model_selected(),
        }
    }

    pub fn mem_model_mut(&mut self) -> &mut MemoryModel {
        match self.current.as_ref().and_then(|name| self.models.get_mut(name)) {
            Some(model) => model,
            None => no_model_selected(),
        }
    }

    pub fn mem_model_name(&self) -> &str {
        self.mem_model().name()
    }

    pub fn is_paged_memory(&self) -> bool {
        self.mem_model().is_paged_memory()
    }

    pub fn num_mem_pages(&self) -> usize {
        self.mem_model().num_mem_pages()
    }

    pub fn default_slot(&self) -> usize {
        self.mem_model().default_slot()
    }

    pub fn page_num_in_slot(&self, slot: usize) -> usize {
        self.mem_model().page_num_in_slot(slot)
    }

    pub fn set_page(&mut self, slot: usize, page: usize) -> Result<(), MemoryError> {
        self.mem_model_mut().set_page(slot, page)
    }

    pub fn set_page_for_address(&mut self, addr: u16, page: usize) -> Result<(), MemoryError> {
        self.mem_model_mut().set_page_for_address(addr, page)
    }

    pub fn validate_slot(&self, slot: usize) -> Result<(), MemoryError> {
        self.mem_model().validate_slot(slot)
    }

    pub fn page_for_address(&self, addr: u16) -> usize {
        self.mem_model().page_for_address(addr)
    }

    pub fn read_byte(&self, addr: u16) -> u8 {
        self.mem_model().read_byte(addr)
    }

    pub fn write_byte(&mut self, addr: u16, byte: u8, ephemeral: bool) {
        self.mem_model_mut().write_byte(addr, byte, ephemeral)
    }

    pub fn write_word(&mut self, addr: u16, word: u16, ephemeral: bool) {
        self.mem_model_mut().write_word(addr, word, ephemeral)
    }

    pub fn copy_to_memory(&mut self, addr: u16, src: &[u8]) {
        self.mem_model_mut().copy_to_memory(addr, src)
    }

    pub fn fill_memory(&mut self, addr: u16, byte: u8, size: usize) {
        self.mem_model_mut().fill_memory(addr, byte, size)
    }

    pub fn used_addr(&self, addr: u16) -> bool {
        self.mem_model().used_addr(addr)
    }

    pub fn clear_ephemerals(&mut self) {
        self.mem_model_mut().clear_ephemerals()
    }

    pub fn clear(&mut self) {
        self.mem_model_mut().clear()
    }

    pub fn get_bytes(&self, dest: &mut [u8], addr: u16) {
        self.mem_model().get_bytes(dest, addr)
    }

    pub fn get_bytes_in_slot(&self, dest: &mut [u8], slot: usize, addr_in_slot: u16) {
        self.mem_model().get_bytes_in_slot(dest, slot, addr_in_slot)
    }

    pub fn memory(&self) -> &[u8] {
        self.mem_model().memory()
    }

    pub fn page(&self, page: usize) -> &[u8] {
        self.mem_model().page(page)
    }

    pub fn page_in_slot(&self, slot: usize) -> &[u8] {
        self.mem_model().page_in_slot(slot)
    }

    pub fn write_byte_to_page(&mut self, page: usize, offset: u16, byte: u8) {
        self.mem_model_mut().write_byte_to_page(page, offset, byte)
    }

    pub fn copy_to_page(&mut self, page: usize, offset: u16, src: &[u8]) {
        self.mem_model_mut().copy_to_page(page, offset, src)
    }

    pub fn fill_in_page(&mut self, page: usize, offset: u16, byte: u8, size: usize) {
        self.mem_model_mut().fill_in_page(page, offset, byte, size)
    }

    pub fn init_zx_sys_vars(&mut self) {
        self.mem_model_mut().init_zx_sys_vars()
    }

    pub fn zx_sys_vars_initialized(&self) -> bool {
        self.mem_model().zx_sys_vars_initialized()
    }
}

fn no_model_selected() -> ! {
    error!("Memory operation issued before a memory model was selected");
    panic!("no memory model selected");
}
