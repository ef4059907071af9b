//! LS-8 virtual machine library.
//!
//! This crate implements an interpreter for the LS-8 eight-bit instruction set:
//! 1. **Core:** Register file, 256-byte memory, program counter, call stack and the ALU.
//! 2. **ISA:** Opcode table, decoding and disassembly.
//! 3. **Simulation:** Program loader, trace sinks and the fetch-decode-execute loop.
//! 4. **Support:** Configuration and run statistics.
//!
//! ```
//! use ls8_core::{CaptureSink, Config, Simulator};
//! use ls8_core::sim::HaltReason;
//!
//! let program = [0x82, 0, 8, 0x82, 1, 9, 0xA2, 0, 1, 0x47, 0, 0x01];
//! let mut sim = Simulator::new(&Config::default(), CaptureSink::new());
//! sim.load_program(&program).unwrap();
//! assert_eq!(sim.run().unwrap(), HaltReason::Hlt);
//! assert_eq!(sim.sink.printed, vec![72]);
//! ```

/// Common types and constants (dimensions, traps).
pub mod common;
/// Interpreter configuration (defaults, stack model, JSON loading).
pub mod config;
/// CPU core (architectural state, execution, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader, trace sinks and the simulator.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Machine state: registers, memory, program counter and stack.
pub use crate::core::Cpu;
/// Execution engine and its sinks.
pub use crate::sim::{CaptureSink, ConsoleSink, Simulator, TraceSink};
