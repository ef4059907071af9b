//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the interpreter. It includes:
//! 1. **Storage Constants:** Memory size and register count.
//! 2. **Instruction Constants:** Bit layout of an LS-8 opcode byte.
//! 3. **Stack Constants:** Stack pointer register and default stack top for the RAM stack.

/// Number of addressable bytes in main memory.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Maximum number of operand bytes following an opcode.
pub const MAX_OPERANDS: usize = 2;

/// Bit position of the operand-count field (bits 7-6) in an opcode byte.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Mask for the operand-count field after shifting.
pub const OPERAND_COUNT_MASK: u8 = 0b11;

/// Opcode bit marking instructions executed by the ALU.
pub const ALU_FLAG: u8 = 0b0010_0000;

/// Opcode bit marking instructions that set the program counter directly.
pub const SETS_PC_FLAG: u8 = 0b0001_0000;

/// Register used as the stack pointer when the stack lives in RAM.
pub const STACK_POINTER_REG: usize = 7;

/// Address one past the first stack slot when the stack lives in RAM.
pub const DEFAULT_STACK_TOP: u8 = 0xF4;
