//! LS-8 instruction set definitions.
//!
//! This module provides the decoding side of the interpreter. It includes:
//! 1. **Opcodes:** Raw encodings for every implemented instruction.
//! 2. **Instruction Types:** Mnemonics, descriptors, and decoded instructions.
//! 3. **Decoding:** The static opcode table and the decoder built on it.
//! 4. **Disassembly:** Text rendering of instructions and program listings.

/// Opcode table and instruction decoder.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Instruction field extraction, mnemonics and descriptors.
pub mod instruction;

/// Raw opcode encodings.
pub mod opcodes;

pub use decode::{decode, lookup};
pub use instruction::{ExecUnit, Instruction, InstructionDescriptor, Mnemonic};
