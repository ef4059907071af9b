//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for LS-8 opcode bytes, the typed mnemonic set,
//! the static per-opcode descriptor, and the decoded instruction record.

use std::fmt;

use crate::common::constants::{
    ALU_FLAG, MAX_OPERANDS, OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT, SETS_PC_FLAG,
};

/// Trait for extracting instruction fields from an encoded opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (bits 7-6).
    fn operand_count(&self) -> usize;

    /// Whether the instruction is routed to the ALU (bit 5).
    fn is_alu(&self) -> bool;

    /// Whether the instruction writes the program counter itself (bit 4).
    fn sets_pc(&self) -> bool;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        ((self >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK) as usize
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_FLAG != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_FLAG != 0
    }
}

/// Operations understood by the interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Halt execution.
    Hlt,
    /// Load immediate: `reg[a] = b`.
    Ldi,
    /// Print register: emit `reg[a]` in decimal.
    Prn,
    /// Multiply: `reg[a] = reg[a] * reg[b]` (mod 256).
    Mul,
    /// Push `reg[a]` onto the call stack.
    Push,
    /// Pop the call stack into `reg[a]`.
    Pop,
}

impl Mnemonic {
    /// Upper-case assembly name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Mul => "MUL",
            Self::Push => "PUSH",
            Self::Pop => "POP",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dispatcher responsible for executing an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecUnit {
    /// Arithmetic/logic dispatcher.
    Alu,
    /// Data movement, I/O and control dispatcher.
    General,
}

impl fmt::Display for ExecUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alu => f.write_str("ALU"),
            Self::General => f.write_str("general"),
        }
    }
}

/// Static metadata for one opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionDescriptor {
    /// Encoded opcode byte.
    pub opcode: u8,
    /// Operation performed.
    pub mnemonic: Mnemonic,
    /// Operand bytes following the opcode.
    pub operand_count: usize,
    /// Dispatcher that executes it.
    pub unit: ExecUnit,
}

impl InstructionDescriptor {
    /// Builds a descriptor, deriving operand count and unit from the opcode bits.
    pub const fn new(opcode: u8, mnemonic: Mnemonic) -> Self {
        Self {
            opcode,
            mnemonic,
            operand_count: ((opcode >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK) as usize,
            unit: if opcode & ALU_FLAG != 0 {
                ExecUnit::Alu
            } else {
                ExecUnit::General
            },
        }
    }

    /// Total encoded width in bytes (opcode plus operands).
    #[inline]
    pub const fn width(&self) -> usize {
        1 + self.operand_count
    }
}

/// A fully decoded instruction: descriptor plus fetched operand bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Address of the opcode byte.
    pub pc: usize,
    /// Static metadata for the opcode.
    pub descriptor: &'static InstructionDescriptor,
    operands: [u8; MAX_OPERANDS],
}

impl Instruction {
    /// Creates an instruction; operand slots beyond the descriptor's count are ignored.
    pub const fn new(
        pc: usize,
        descriptor: &'static InstructionDescriptor,
        operands: [u8; MAX_OPERANDS],
    ) -> Self {
        Self {
            pc,
            descriptor,
            operands,
        }
    }

    /// Decoded operation.
    #[inline]
    pub const fn mnemonic(&self) -> Mnemonic {
        self.descriptor.mnemonic
    }

    /// First operand byte (0 when the instruction has none).
    #[inline]
    pub const fn a(&self) -> u8 {
        self.operands[0]
    }

    /// Second operand byte (0 when the instruction has fewer than two).
    #[inline]
    pub const fn b(&self) -> u8 {
        self.operands[1]
    }

    /// The operand bytes actually encoded by this instruction.
    pub fn operands(&self) -> &[u8] {
        &self.operands[..self.descriptor.operand_count]
    }

    /// Total encoded width in bytes.
    #[inline]
    pub const fn width(&self) -> usize {
        self.descriptor.width()
    }
}
