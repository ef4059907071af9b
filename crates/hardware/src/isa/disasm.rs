//! Instruction Disassembler for LS-8.
//!
//! Converts decoded instructions into assembly text for debug tracing,
//! logging, and program listings.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::decode::decode;
//! use ls8_core::isa::disasm::disassemble;
//!
//! let inst = decode(&[0b1000_0010, 0, 8], 0).unwrap();
//! assert_eq!(disassemble(&inst), "LDI R0,8");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Mnemonic};

/// Disassembles a decoded instruction into a string such as `"MUL R0,R1"`.
pub fn disassemble(inst: &Instruction) -> String {
    let mn = inst.mnemonic();
    match mn {
        Mnemonic::Hlt => mn.name().to_string(),
        Mnemonic::Ldi => format!("{mn} R{},{}", inst.a(), inst.b()),
        Mnemonic::Mul => format!("{mn} R{},R{}", inst.a(), inst.b()),
        Mnemonic::Prn | Mnemonic::Push | Mnemonic::Pop => format!("{mn} R{}", inst.a()),
    }
}

/// Produces a listing of a whole program image, one line per instruction.
///
/// Lines look like `"02: 82 01 09  LDI R1,9"`. Bytes that do not start a
/// complete known instruction are listed as `.byte 0xNN` and skipped singly.
pub fn disassemble_program(bytes: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pc = 0;

    while pc < bytes.len() {
        match decode(bytes, pc) {
            Ok(inst) => {
                let raw = bytes[pc..pc + inst.width()]
                    .iter()
                    .map(|b| format!("{b:02X}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(format!("{pc:02X}: {raw:<8}  {}", disassemble(&inst)));
                pc += inst.width();
            }
            Err(_) => {
                let byte = bytes[pc];
                let raw = format!("{byte:02X}");
                lines.push(format!("{pc:02X}: {raw:<8}  .byte {byte:#04x}"));
                pc += 1;
            }
        }
    }

    lines
}
