//! LS-8 opcode encodings.
//!
//! Each opcode byte is laid out as `AABCDDDD`:
//! - `AA`:   number of operand bytes that follow (0-2)
//! - `B`:    1 if the instruction is executed by the ALU
//! - `C`:    1 if the instruction sets the program counter directly
//! - `DDDD`: instruction identifier

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate value into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print the decimal value of a register.
pub const PRN: u8 = 0b0100_0111;

/// Multiply two registers, storing the product in the first.
pub const MUL: u8 = 0b1010_0010;

/// Push a register onto the call stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the call stack into a register.
pub const POP: u8 = 0b0100_0110;
