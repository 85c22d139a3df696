// End-to-end behaviour of the memory manager as the assembler passes drive it
use test_log::test;
use zxmem::{MemoryError, MemoryManager, PAGE_SIZE};

const ALL_MODELS: [&str; 5] = [
    "PLAIN",
    "ZXSPECTRUM128",
    "ZXSPECTRUM256",
    "ZXSPECTRUM512",
    "ZXSPECTRUM1024",
];

fn manager_for(name: &str) -> MemoryManager {
    let mut manager = MemoryManager::new();
    manager.set_mem_model(name).expect("recognised model");
    manager
}

#[test]
fn committed_writes_read_back_on_every_model() {
    for name in ALL_MODELS {
        let mut memory = manager_for(name);
        for addr in [0x0000u16, 0x3FFF, 0x4000, 0x8000, 0xC000, 0xFFFF] {
            assert_eq!(memory.read_byte(addr), 0, "{} {:#06x}", name, addr);
            assert!(!memory.used_addr(addr));
            memory.write_byte(addr, (addr >> 8) as u8 ^ 0x5A, false);
            assert_eq!(memory.read_byte(addr), (addr >> 8) as u8 ^ 0x5A);
            assert!(memory.used_addr(addr));
        }
    }
}

#[test]
fn trial_pass_output_is_discarded_between_passes() {
    for name in ALL_MODELS {
        let mut memory = manager_for(name);

        // pass 1: forward reference emitted pessimistically
        memory.write_byte(0x8000, 0xC3, false);
        memory.write_word(0x8001, 0xFFFF, true);
        memory.write_byte(0x9000, 0x01, true);
        memory.clear_ephemerals();

        assert_eq!(memory.read_byte(0x8000), 0xC3);
        assert_eq!(memory.read_byte(0x8001), 0x00);
        assert_eq!(memory.read_byte(0x8002), 0x00);
        assert_eq!(memory.read_byte(0x9000), 0x00);

        // pass 2: the same location is now final
        memory.write_word(0x8001, 0x8010, false);
        memory.clear_ephemerals();
        memory.clear_ephemerals();
        assert_eq!(memory.read_byte(0x8001), 0x10);
        assert_eq!(memory.read_byte(0x8002), 0x80);
    }
}

#[test]
fn rollback_means_zero_not_previous_value() {
    let mut memory = manager_for("ZXSPECTRUM128");
    memory.write_byte(0xA000, 0x42, true);
    memory.clear_ephemerals();
    memory.write_byte(0xA000, 0x43, true);
    memory.clear_ephemerals();
    assert_eq!(memory.read_byte(0xA000), 0x00);
}

#[test]
fn word_writes_wrap_at_top_of_address_space() {
    for name in ALL_MODELS {
        let mut memory = manager_for(name);
        memory.write_word(0xFFFF, 0x1234, false);
        assert_eq!(memory.read_byte(0xFFFF), 0x34);
        assert_eq!(memory.read_byte(0x0000), 0x12);
    }
}

#[test]
fn paging_directive_retargets_slot() {
    let mut memory = manager_for("ZXSPECTRUM128");
    assert_eq!(memory.page_for_address(0x0000), 0);
    assert_eq!(memory.page_for_address(0x4000), 5);
    assert_eq!(memory.page_for_address(0x8000), 2);
    assert_eq!(memory.page_for_address(0xC000), 7);

    memory.write_byte(0xC000, 0x07, false);
    memory.set_page(3, 1).unwrap();
    memory.write_byte(0xC000, 0x01, false);
    memory.set_page_for_address(0xC000, 3).unwrap();
    memory.write_byte(0xC000, 0x03, false);

    assert_eq!(memory.page(7)[0], 0x07);
    assert_eq!(memory.page(1)[0], 0x01);
    assert_eq!(memory.page(3)[0], 0x03);
    assert_eq!(memory.page_num_in_slot(memory.default_slot()), 3);
}

#[test]
fn rejected_paging_leaves_mapping_untouched() {
    let mut memory = manager_for("ZXSPECTRUM256");
    let before: Vec<usize> = (0..4).map(|slot| memory.page_num_in_slot(slot)).collect();

    assert_eq!(memory.set_page(4, 0), Err(MemoryError::SlotOutOfRange(4, 4)));
    assert_eq!(memory.set_page(1, 16), Err(MemoryError::PageOutOfRange(16, 16)));
    assert!(memory.validate_slot(4).is_err());
    assert!(memory.validate_slot(3).is_ok());

    let after: Vec<usize> = (0..4).map(|slot| memory.page_num_in_slot(slot)).collect();
    assert_eq!(before, after);
}

#[test]
fn plain_model_refuses_paging() {
    let mut memory = manager_for("PLAIN");
    let err = memory.set_page(3, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The PLAIN memory model does not support page switching"
    );
    assert!(memory.set_page_for_address(0xC000, 1).is_err());
    assert!(memory.validate_slot(0).is_err());
    assert!(!memory.is_paged_memory());
    assert_eq!(memory.num_mem_pages(), 0);
    assert_eq!(memory.default_slot(), 0);
    assert!(memory.mem_model().banked().is_none());
}

#[test]
#[should_panic(expected = "does not support page switching")]
fn plain_model_page_view_is_a_contract_violation() {
    let memory = manager_for("PLAIN");
    let _ = memory.page_in_slot(0);
}

#[test]
fn output_image_is_pages_in_order() {
    let mut memory = manager_for("ZXSPECTRUM512");
    assert_eq!(memory.memory().len(), 32 * PAGE_SIZE);

    for page in 0..32 {
        memory.set_page(3, page).unwrap();
        memory.write_byte(0xC000, page as u8, false);
    }
    let image = memory.memory();
    for page in 0..32 {
        assert_eq!(image[page * PAGE_SIZE], page as u8);
    }

    let plain = manager_for("PLAIN");
    assert_eq!(plain.memory().len(), 0x10000);
}

#[test]
fn bulk_operations_and_slot_reads() {
    let mut memory = manager_for("ZXSPECTRUM128");
    memory.copy_to_memory(0xBFFE, &[0xAA, 0xBB, 0xCC, 0xDD]);
    memory.fill_memory(0x6000, 0x20, 32);

    let mut buf = [0u8; 4];
    memory.get_bytes(&mut buf, 0xBFFE);
    assert_eq!(buf, [0xAA, 0xBB, 0xCC, 0xDD]);
    assert_eq!(memory.page(2)[PAGE_SIZE - 1], 0xBB);
    assert_eq!(memory.page(7)[0], 0xCC);

    let mut slot_buf = [0u8; 2];
    memory.get_bytes_in_slot(&mut slot_buf, 1, 0x2000);
    assert_eq!(slot_buf, [0x20, 0x20]);
    assert!(memory.used_addr(0x601F));
    assert!(!memory.used_addr(0x6020));
}

#[test]
fn page_direct_output_ignores_current_mapping() {
    let mut memory = manager_for("ZXSPECTRUM1024");
    memory.copy_to_page(40, 0x0100, &[1, 2, 3]);
    memory.fill_in_page(41, 0x0000, 0xFF, 2);
    memory.write_byte_to_page(42, 0x3FFF, 0x99);

    assert_eq!(&memory.page(40)[0x100..0x103], &[1, 2, 3]);
    assert_eq!(&memory.page(41)[..2], &[0xFF, 0xFF]);
    assert_eq!(memory.page(42)[0x3FFF], 0x99);
    assert_eq!(memory.page_for_address(0xC000), 7);
}

#[test]
fn clear_starts_a_fresh_pass() {
    let mut memory = manager_for("ZXSPECTRUM128");
    memory.init_zx_sys_vars();
    memory.write_byte(0x8000, 0x01, false);
    memory.clear();
    assert!(memory.memory().iter().all(|&b| b == 0));
    assert!(!memory.used_addr(0x8000));
    assert!(!memory.zx_sys_vars_initialized());
}
