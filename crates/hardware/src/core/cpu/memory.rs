//! Register and memory access.
//!
//! The bounds-checked read/write surface of the machine state. Each
//! operation either performs exactly the requested mutation or returns
//! `Trap::OutOfRange` and changes nothing.

use super::Cpu;
use crate::common::Trap;

impl Cpu {
    /// Reads general-purpose register `idx`.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `idx` is not in `0..8`.
    #[inline]
    pub fn read_register(&self, idx: usize) -> Result<u8, Trap> {
        self.regs.read(idx)
    }

    /// Writes general-purpose register `idx`.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `idx` is not in `0..8`.
    #[inline]
    pub fn write_register(&mut self, idx: usize, val: u8) -> Result<(), Trap> {
        self.regs.write(idx, val)
    }

    /// Reads the memory byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `addr` is not in `0..256`.
    #[inline]
    pub fn read_memory(&self, addr: usize) -> Result<u8, Trap> {
        self.ram.read(addr)
    }

    /// Writes the memory byte at `addr`.
    ///
    /// Does not move the end of the loaded program.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `addr` is not in `0..256`.
    #[inline]
    pub fn write_memory(&mut self, addr: usize, val: u8) -> Result<(), Trap> {
        self.ram.write(addr, val)
    }
}
