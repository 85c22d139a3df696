// System-variable seeding against the reference bytes
use test_log::test;
use zxmem::sysvars::{BASIN48_SP, BASIN48_VARS, ZX_SYS_VARS};
use zxmem::MemoryManager;

fn seeded(name: &str) -> MemoryManager {
    let mut memory = MemoryManager::new();
    memory.set_mem_model(name).unwrap();
    memory.init_zx_sys_vars();
    memory
}

fn read(memory: &MemoryManager, addr: u16, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    memory.get_bytes(&mut buf, addr);
    buf
}

#[test]
fn banked_models_seed_128k_vars_at_5c00() {
    for name in ["ZXSPECTRUM128", "ZXSPECTRUM256", "ZXSPECTRUM512", "ZXSPECTRUM1024"] {
        let memory = seeded(name);
        assert!(memory.zx_sys_vars_initialized());
        assert_eq!(read(&memory, 0x5C00, ZX_SYS_VARS.len()), ZX_SYS_VARS.to_vec());

        assert_eq!(
            read(&memory, 0x5C00, 8),
            vec![0x0D, 0x03, 0x20, 0x0D, 0xFF, 0x00, 0x1E, 0xF7]
        );
        // "boot" BASIC program name
        assert_eq!(read(&memory, 0x5C00 + 0xDD, 4), b"boot".to_vec());
        assert_eq!(
            read(&memory, 0x5C00 + 0x120, 3),
            vec![0xF7, 0x22, 0x62]
        );
        // nothing spills past the blob
        assert_eq!(memory.read_byte(0x5C00 + 0x123), 0);
        assert_eq!(memory.read_byte(0x5BFF), 0);
    }
}

#[test]
fn banked_seed_targets_page_five_even_when_remapped() {
    let mut memory = MemoryManager::new();
    memory.set_mem_model("ZXSPECTRUM128").unwrap();
    memory.set_page(1, 0).unwrap();
    memory.init_zx_sys_vars();

    assert_eq!(&memory.page(5)[0x1C00..0x1C00 + ZX_SYS_VARS.len()], &ZX_SYS_VARS[..]);
    assert_eq!(memory.read_byte(0x5C00), 0);
}

#[test]
fn plain_model_seeds_48k_vars_and_stack() {
    let memory = seeded("PLAIN");
    assert!(memory.zx_sys_vars_initialized());

    assert_eq!(read(&memory, 0x5C00, BASIN48_VARS.len()), BASIN48_VARS.to_vec());
    assert_eq!(
        read(&memory, 0x5C00, 13),
        vec![0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x23, 0x05, 0x00, 0x00]
    );
    assert_eq!(memory.read_byte(0x5C00 + 0x101), 0);

    let stack_len = BASIN48_SP.len() - 1;
    assert_eq!(read(&memory, 0xFF2E, stack_len), BASIN48_SP[..stack_len].to_vec());
    assert_eq!(
        read(&memory, 0xFF2E, 6),
        vec![0xB1, 0x33, 0xE0, 0x5C, 0xC2, 0x02]
    );
    assert_eq!(read(&memory, 0xFFFD, 3), vec![0x42, 0x3C, 0x00]);
    assert_eq!(memory.read_byte(0xFF2D), 0);
    // the trailing pad byte is dropped rather than wrapped onto 0x0000
    assert!(!memory.used_addr(0x0000));
}

fn read_word(memory: &MemoryManager, addr: u16) -> u16 {
    let bytes = read(memory, addr, 2);
    u16::from_le_bytes([bytes[0], bytes[1]])
}

#[test]
fn plain_model_stack_matches_seeded_pointers() {
    let memory = seeded("PLAIN");

    let err_sp = read_word(&memory, 0x5C3D);
    let udg = read_word(&memory, 0x5C7B);
    let ramtop = read_word(&memory, 0x5CB2);
    assert_eq!((err_sp, udg, ramtop), (0xFF54, 0xFF58, 0xFF57));

    assert_eq!(read_word(&memory, err_sp), 0x1303);
    assert_eq!(memory.read_byte(ramtop), 0x3E);
    assert_eq!(
        read(&memory, udg, 8),
        vec![0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00]
    );
}

#[test]
fn seeding_again_keeps_assembled_bytes() {
    for name in ["PLAIN", "ZXSPECTRUM128"] {
        let mut memory = seeded(name);
        memory.write_byte(0x5C00, 0x99, false);
        memory.init_zx_sys_vars();
        assert_eq!(memory.read_byte(0x5C00), 0x99, "{}", name);
    }
}

#[test]
fn seeded_bytes_survive_ephemeral_rollback() {
    let mut memory = seeded("ZXSPECTRUM128");
    memory.clear_ephemerals();
    assert_eq!(read(&memory, 0x5C00, ZX_SYS_VARS.len()), ZX_SYS_VARS.to_vec());
}
