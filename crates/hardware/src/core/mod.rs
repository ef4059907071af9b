//! Core processor implementation.
//!
//! This module contains the machine state, the execution units, and the
//! per-instruction execution logic that operates on them.

/// Architectural storage (register file, memory, call stack).
pub mod arch;

/// CPU state, machine-state operations and instruction execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
