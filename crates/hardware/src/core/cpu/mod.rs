//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! machine state of an LS-8. It coordinates the following:
//! 1. **State Management:** Registers, main memory, program counter and call stack.
//! 2. **Program Image:** Loading bytes into memory and tracking where the program ends.
//! 3. **Execution:** Per-instruction fetch, dispatch and PC advance (see [`execution`]).

/// Instruction fetch, dispatch and retirement.
pub mod execution;

/// Register and memory access operations.
pub mod memory;

/// PUSH/POP stack operations for both stack models.
pub mod stack;

use tracing::debug;

use crate::common::Trap;
use crate::config::{Config, StackMode};
use crate::core::arch::gpr::Gpr;
use crate::core::arch::ram::Ram;
use crate::core::arch::stack::CallStack;

/// Complete LS-8 machine state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers `R0`-`R7`.
    pub regs: Gpr,
    /// Main memory.
    pub ram: Ram,
    /// Program counter.
    pub pc: usize,
    /// Growable call stack (unused in `StackMode::Ram`).
    pub stack: CallStack,
    /// Stack placement.
    pub stack_mode: StackMode,
    /// Initial stack pointer for `StackMode::Ram`.
    pub stack_top: u8,
    /// Entry point restored by `reset`.
    start_pc: usize,
    /// One past the highest loaded address.
    program_end: usize,
}

impl Cpu {
    /// Creates a CPU with empty memory, configured from `config`.
    ///
    /// In `StackMode::Ram` the stack pointer register is initialised to the
    /// configured stack top.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: initial_registers(config.memory.stack, config.memory.stack_top),
            ram: Ram::new(),
            pc: config.general.start_pc as usize,
            stack: CallStack::new(),
            stack_mode: config.memory.stack,
            stack_top: config.memory.stack_top,
            start_pc: config.general.start_pc as usize,
            program_end: 0,
        }
    }

    /// Replaces memory with a program image starting at address 0 and
    /// rewinds the PC to the entry point.
    ///
    /// Memory above the image is zeroed. Everything at or above `bytes.len()`
    /// is treated as past the end of the program: execution stops there
    /// instead of decoding it. Registers and the stack are left as they are.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if the image is larger than memory; the
    /// machine state is not modified in that case.
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), Trap> {
        let mut ram = Ram::new();
        ram.load_at(0, bytes)?;
        self.ram = ram;
        self.program_end = bytes.len();
        self.pc = self.start_pc;
        debug!(len = bytes.len(), pc = self.pc, "program loaded");
        Ok(())
    }

    /// One past the highest loaded address.
    pub const fn program_end(&self) -> usize {
        self.program_end
    }

    /// Clears registers, memory and stack, and rewinds the PC to the entry point.
    pub fn reset(&mut self) {
        self.regs = initial_registers(self.stack_mode, self.stack_top);
        self.ram.clear();
        self.stack.clear();
        self.pc = self.start_pc;
        self.program_end = 0;
        debug!(pc = self.pc, "cpu reset");
    }
}

/// Register file at power-on: all zero, except the stack pointer in `StackMode::Ram`.
const fn initial_registers(mode: StackMode, stack_top: u8) -> Gpr {
    match mode {
        StackMode::Growable => Gpr::new(),
        StackMode::Ram => Gpr::with_stack_pointer(stack_top),
    }
}
