//! PUSH/POP in both stack models.

use ls8_core::common::Trap;
use ls8_core::config::StackMode;
use ls8_core::{Config, Cpu};

fn cpu(mode: StackMode) -> Cpu {
    let mut config = Config::default();
    config.memory.stack = mode;
    Cpu::new(&config)
}

#[test]
fn growable_push_pop_lifo() {
    let mut cpu = cpu(StackMode::Growable);
    cpu.push(1).unwrap();
    cpu.push(2).unwrap();
    assert_eq!(cpu.stack_depth(), 2);
    assert_eq!(cpu.pop(), Ok(2));
    assert_eq!(cpu.pop(), Ok(1));
    assert_eq!(cpu.stack_depth(), 0);
}

#[test]
fn growable_does_not_touch_registers_or_memory() {
    let mut cpu = cpu(StackMode::Growable);
    cpu.push(0xAA).unwrap();
    assert_eq!(cpu.regs.snapshot(), [0; 8]);
    assert!(cpu.ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn growable_underflow() {
    let mut cpu = cpu(StackMode::Growable);
    assert_eq!(cpu.pop(), Err(Trap::StackUnderflow));
}

#[test]
fn ram_stack_pointer_starts_at_stack_top() {
    let cpu = cpu(StackMode::Ram);
    assert_eq!(cpu.read_register(7), Ok(0xF4));
    assert_eq!(cpu.stack_depth(), 0);
}

#[test]
fn ram_push_decrements_then_stores() {
    let mut cpu = cpu(StackMode::Ram);
    cpu.push(0x42).unwrap();
    assert_eq!(cpu.read_register(7), Ok(0xF3));
    assert_eq!(cpu.read_memory(0xF3), Ok(0x42));
    assert_eq!(cpu.stack_depth(), 1);
}

#[test]
fn ram_pop_loads_then_increments() {
    let mut cpu = cpu(StackMode::Ram);
    cpu.push(1).unwrap();
    cpu.push(2).unwrap();
    assert_eq!(cpu.pop(), Ok(2));
    assert_eq!(cpu.read_register(7), Ok(0xF3));
    assert_eq!(cpu.pop(), Ok(1));
    assert_eq!(cpu.read_register(7), Ok(0xF4));
}

#[test]
fn ram_underflow_leaves_state_untouched() {
    let mut cpu = cpu(StackMode::Ram);
    let before = cpu.clone();
    assert_eq!(cpu.pop(), Err(Trap::StackUnderflow));
    assert_eq!(cpu.regs, before.regs);
    assert_eq!(cpu.ram, before.ram);
}

#[test]
fn ram_stack_honours_configured_top() {
    let mut config = Config::default();
    config.memory.stack = StackMode::Ram;
    config.memory.stack_top = 0x10;
    let mut cpu = Cpu::new(&config);

    cpu.push(9).unwrap();
    assert_eq!(cpu.read_memory(0x0F), Ok(9));
    assert_eq!(cpu.pop(), Ok(9));
    assert_eq!(cpu.pop(), Err(Trap::StackUnderflow));
}
