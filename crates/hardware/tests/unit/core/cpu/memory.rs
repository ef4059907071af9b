//! Register and memory access through the CPU.

use ls8_core::common::{Location, Trap};
use ls8_core::{Config, Cpu};

fn cpu() -> Cpu {
    Cpu::new(&Config::default())
}

#[test]
fn fresh_cpu_is_zeroed() {
    let cpu = cpu();
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.regs.snapshot(), [0; 8]);
    assert!(cpu.ram.as_slice().iter().all(|&b| b == 0));
    assert_eq!(cpu.program_end(), 0);
}

#[test]
fn register_round_trip() {
    let mut cpu = cpu();
    cpu.write_register(5, 200).unwrap();
    assert_eq!(cpu.read_register(5), Ok(200));
}

#[test]
fn register_out_of_range() {
    let mut cpu = cpu();
    assert_eq!(
        cpu.read_register(8),
        Err(Trap::OutOfRange(Location::Register(8)))
    );
    assert_eq!(
        cpu.write_register(8, 1),
        Err(Trap::OutOfRange(Location::Register(8)))
    );
}

#[test]
fn memory_round_trip() {
    let mut cpu = cpu();
    cpu.write_memory(0x80, 7).unwrap();
    assert_eq!(cpu.read_memory(0x80), Ok(7));
}

#[test]
fn memory_out_of_range() {
    let mut cpu = cpu();
    assert_eq!(
        cpu.read_memory(300),
        Err(Trap::OutOfRange(Location::Memory(300)))
    );
    assert_eq!(
        cpu.write_memory(256, 0),
        Err(Trap::OutOfRange(Location::Memory(256)))
    );
}

#[test]
fn write_memory_does_not_move_program_end() {
    let mut cpu = cpu();
    cpu.load_program(&[0x01]).unwrap();
    cpu.write_memory(10, 0x82).unwrap();
    assert_eq!(cpu.program_end(), 1);
}

#[test]
fn load_program_sets_program_end() {
    let mut cpu = cpu();
    cpu.load_program(&[0x82, 0, 8, 0x01]).unwrap();
    assert_eq!(cpu.program_end(), 4);
    assert_eq!(cpu.read_memory(0), Ok(0x82));
    assert_eq!(cpu.read_memory(3), Ok(0x01));
}

#[test]
fn load_program_replaces_previous_image() {
    let mut cpu = cpu();
    cpu.load_program(&[0x82, 0, 8, 0x47, 0, 0x01]).unwrap();
    cpu.pc = 5;

    cpu.load_program(&[0x01]).unwrap();
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.program_end(), 1);
    assert_eq!(cpu.read_memory(0), Ok(0x01));
    assert_eq!(cpu.read_memory(1), Ok(0));
    assert_eq!(cpu.read_memory(5), Ok(0));
}

#[test]
fn load_program_too_large_changes_nothing() {
    let mut cpu = cpu();
    let err = cpu.load_program(&[1; 257]).unwrap_err();
    assert_eq!(err, Trap::OutOfRange(Location::Memory(256)));
    assert_eq!(cpu.program_end(), 0);
    assert_eq!(cpu.read_memory(0), Ok(0));
}

#[test]
fn reset_restores_power_on_state() {
    let mut config = Config::default();
    config.general.start_pc = 3;
    let mut cpu = Cpu::new(&config);
    cpu.load_program(&[1, 2, 3, 4]).unwrap();
    cpu.write_register(0, 9).unwrap();
    cpu.pc = 50;
    cpu.push(4).unwrap();

    cpu.reset();

    assert_eq!(cpu.pc, 3);
    assert_eq!(cpu.regs.snapshot(), [0; 8]);
    assert_eq!(cpu.program_end(), 0);
    assert_eq!(cpu.read_memory(0), Ok(0));
    assert_eq!(cpu.stack_depth(), 0);
}
