//! Fluent assembler for LS-8 test programs.

use ls8_core::isa::opcodes;

/// Builds a program image one instruction at a time.
#[derive(Debug, Default, Clone)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    /// Starts an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// `LDI reg,value`
    pub fn ldi(mut self, reg: u8, value: u8) -> Self {
        self.bytes.extend([opcodes::LDI, reg, value]);
        self
    }

    /// `PRN reg`
    pub fn prn(mut self, reg: u8) -> Self {
        self.bytes.extend([opcodes::PRN, reg]);
        self
    }

    /// `MUL a,b`
    pub fn mul(mut self, a: u8, b: u8) -> Self {
        self.bytes.extend([opcodes::MUL, a, b]);
        self
    }

    /// `PUSH reg`
    pub fn push(mut self, reg: u8) -> Self {
        self.bytes.extend([opcodes::PUSH, reg]);
        self
    }

    /// `POP reg`
    pub fn pop(mut self, reg: u8) -> Self {
        self.bytes.extend([opcodes::POP, reg]);
        self
    }

    /// `HLT`
    pub fn hlt(mut self) -> Self {
        self.bytes.push(opcodes::HLT);
        self
    }

    /// Appends raw bytes (e.g. an illegal opcode).
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Finishes the program.
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
