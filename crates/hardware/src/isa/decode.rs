//! Opcode table and instruction decoding.
//!
//! The 256-entry descriptor table is built at compile time from the
//! instruction list below; decoding an opcode is a single table lookup,
//! and an empty slot is an illegal instruction.

use crate::common::constants::MAX_OPERANDS;
use crate::common::{Location, Trap};
use crate::isa::instruction::{Instruction, InstructionDescriptor, Mnemonic};
use crate::isa::opcodes;

/// Every instruction the interpreter implements.
pub const INSTRUCTIONS: [InstructionDescriptor; 6] = [
    InstructionDescriptor::new(opcodes::HLT, Mnemonic::Hlt),
    InstructionDescriptor::new(opcodes::LDI, Mnemonic::Ldi),
    InstructionDescriptor::new(opcodes::PRN, Mnemonic::Prn),
    InstructionDescriptor::new(opcodes::MUL, Mnemonic::Mul),
    InstructionDescriptor::new(opcodes::PUSH, Mnemonic::Push),
    InstructionDescriptor::new(opcodes::POP, Mnemonic::Pop),
];

/// Descriptor table indexed by opcode byte.
pub static OPCODE_TABLE: [Option<InstructionDescriptor>; 256] = build_table();

const fn build_table() -> [Option<InstructionDescriptor>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < INSTRUCTIONS.len() {
        let desc = INSTRUCTIONS[i];
        table[desc.opcode as usize] = Some(desc);
        i += 1;
    }
    table
}

/// Looks up the descriptor for an opcode byte.
#[inline]
pub fn lookup(opcode: u8) -> Option<&'static InstructionDescriptor> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

/// Decodes the instruction starting at `pc` within `bytes`.
///
/// The opcode and each operand byte are bounds-checked individually against
/// `bytes`; a read past the end yields `Trap::OutOfRange` rather than wrapping.
///
/// # Errors
///
/// * `Trap::OutOfRange` if the opcode or an operand lies past the end of `bytes`.
/// * `Trap::IllegalInstruction` if the opcode has no descriptor.
pub fn decode(bytes: &[u8], pc: usize) -> Result<Instruction, Trap> {
    let fetch = |addr: usize| {
        bytes
            .get(addr)
            .copied()
            .ok_or(Trap::OutOfRange(Location::Memory(addr)))
    };

    let opcode = fetch(pc)?;
    let descriptor = lookup(opcode).ok_or(Trap::IllegalInstruction { opcode, pc })?;

    let mut operands = [0u8; MAX_OPERANDS];
    for (i, slot) in operands
        .iter_mut()
        .take(descriptor.operand_count)
        .enumerate()
    {
        *slot = fetch(pc + 1 + i)?;
    }

    Ok(Instruction::new(pc, descriptor, operands))
}
