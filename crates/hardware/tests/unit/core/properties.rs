//! Property-based tests over the machine state.

use proptest::prelude::*;

use ls8_core::common::{Location, Trap};
use ls8_core::config::StackMode;
use ls8_core::core::units::alu::Alu;
use ls8_core::isa::Mnemonic;
use ls8_core::sim::HaltReason;
use ls8_core::{CaptureSink, Config, Cpu, Simulator};

fn run(program: &[u8], mode: StackMode) -> Simulator<CaptureSink> {
    let mut config = Config::default();
    config.memory.stack = mode;
    let mut sim = Simulator::new(&config, CaptureSink::new());
    sim.load_program(program).unwrap();
    assert_eq!(sim.run(), Ok(HaltReason::Hlt));
    sim
}

fn cpu(mode: StackMode) -> Cpu {
    let mut config = Config::default();
    config.memory.stack = mode;
    Cpu::new(&config)
}

proptest! {
    #[test]
    fn register_write_read(idx in 0usize..8, val in any::<u8>()) {
        let mut cpu = cpu(StackMode::Growable);
        cpu.write_register(idx, val).unwrap();
        prop_assert_eq!(cpu.read_register(idx), Ok(val));
    }

    #[test]
    fn register_index_out_of_range(idx in 8usize..1024) {
        let cpu = cpu(StackMode::Growable);
        prop_assert_eq!(
            cpu.read_register(idx),
            Err(Trap::OutOfRange(Location::Register(idx)))
        );
    }

    #[test]
    fn memory_write_read(addr in 0usize..256, val in any::<u8>()) {
        let mut cpu = cpu(StackMode::Growable);
        cpu.write_memory(addr, val).unwrap();
        prop_assert_eq!(cpu.read_memory(addr), Ok(val));
    }

    #[test]
    fn mul_is_product_mod_256(a in any::<u8>(), b in any::<u8>()) {
        let expected = ((u32::from(a) * u32::from(b)) % 256) as u8;
        prop_assert_eq!(Alu::execute(Mnemonic::Mul, a, b), Ok(expected));
    }

    #[test]
    fn push_pop_reverses(values in prop::collection::vec(any::<u8>(), 1..64), ram in any::<bool>()) {
        let mode = if ram { StackMode::Ram } else { StackMode::Growable };
        let mut cpu = cpu(mode);
        for &v in &values {
            cpu.push(v).unwrap();
        }
        prop_assert_eq!(cpu.stack_depth(), values.len());

        let mut popped = Vec::new();
        for _ in 0..values.len() {
            popped.push(cpu.pop().unwrap());
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
        prop_assert_eq!(cpu.pop(), Err(Trap::StackUnderflow));
    }

    #[test]
    fn ldi_prn_echoes_value(reg in 0u8..8, val in any::<u8>()) {
        let program = [0x82, reg, val, 0x47, reg, 0x01];
        let mut sim = Simulator::new(&Config::default(), CaptureSink::new());
        sim.load_program(&program).unwrap();
        let _ = sim.run().unwrap();
        prop_assert_eq!(sim.sink.printed, vec![val]);
        prop_assert_eq!(sim.cpu.pc, program.len());
    }

    #[test]
    fn mul_instruction_is_product_mod_256(v1 in any::<u8>(), v2 in any::<u8>()) {
        let program = [0x82, 0, v1, 0x82, 1, v2, 0xA2, 0, 1, 0x01];
        let sim = run(&program, StackMode::Growable);
        prop_assert_eq!(sim.cpu.read_register(0), Ok(v1.wrapping_mul(v2)));
        prop_assert_eq!(sim.cpu.read_register(1), Ok(v2));
    }

    #[test]
    fn push_clear_pop_restores_register(reg in 0u8..8, val in any::<u8>(), ram in any::<bool>()) {
        // In RAM mode R7 is the stack pointer, so it cannot hold an arbitrary value.
        prop_assume!(!(ram && reg == 7));
        let mode = if ram { StackMode::Ram } else { StackMode::Growable };
        let program = [0x82, reg, val, 0x45, reg, 0x82, reg, 0, 0x46, reg, 0x01];
        let sim = run(&program, mode);
        prop_assert_eq!(sim.cpu.read_register(reg as usize), Ok(val));
        prop_assert_eq!(sim.cpu.stack_depth(), 0);
    }
}
