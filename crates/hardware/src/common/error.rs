//! Trap and Fault definitions.
//!
//! This module defines the error handling for the interpreter. It provides:
//! 1. **Trap Representation:** Every condition that stops an instruction from completing.
//! 2. **Locations:** The register or memory slot a bounds failure refers to.
//! 3. **Fault Context:** A trap paired with the program counter of the failing instruction.
//!
//! Every trap is fatal. The engine never retries or substitutes a default;
//! the run ends and the trap is surfaced to the caller.

use std::fmt;

use thiserror::Error;

use crate::isa::instruction::{ExecUnit, Mnemonic};

/// A storage slot addressed by an instruction or a machine-state operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// General-purpose register index.
    Register(usize),
    /// Main memory address.
    Memory(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(idx) => write!(f, "register R{idx}"),
            Self::Memory(addr) => write!(f, "memory address {addr:#04x}"),
        }
    }
}

/// Conditions that abort the current instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// A register index or memory address outside its valid range.
    #[error("OutOfRange({0})")]
    OutOfRange(Location),

    /// The byte at the program counter is not a known opcode.
    #[error("IllegalInstruction({opcode:#04x} at {pc:#04x})")]
    IllegalInstruction {
        /// Raw opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// A dispatcher received an operation it does not implement.
    ///
    /// Only reachable if the descriptor table and the dispatchers disagree.
    #[error("UnsupportedOperation({mnemonic} on {unit})")]
    UnsupportedOperation {
        /// Operation that was dispatched.
        mnemonic: Mnemonic,
        /// Dispatcher that rejected it.
        unit: ExecUnit,
    },

    /// POP with nothing on the call stack.
    #[error("StackUnderflow")]
    StackUnderflow,
}

/// A trap raised while executing the instruction at `pc`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("fault at pc {pc:#04x}: {trap}")]
pub struct Fault {
    /// Address of the instruction that raised the trap.
    pub pc: usize,
    /// The underlying trap.
    #[source]
    pub trap: Trap,
}
