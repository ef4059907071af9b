//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight 8-bit registers `R0`-`R7`. It performs the following:
//! 1. **Storage:** Maintains the register values as unsigned bytes.
//! 2. **Bounds Checking:** Rejects register indices outside `0..8` with a trap.
//! 3. **Debugging:** Provides a snapshot and a formatted dump of the register state.

use crate::common::constants::{REGISTER_COUNT, STACK_POINTER_REG};
use crate::common::{Location, Trap};

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; REGISTER_COUNT],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Creates a register file with `R7` holding `sp` and every other register zero.
    pub const fn with_stack_pointer(sp: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[STACK_POINTER_REG] = sp;
        Self { regs }
    }

    /// Validates a register index without touching any register.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `idx` is not in `0..8`.
    #[inline]
    pub const fn checked_index(idx: usize) -> Result<usize, Trap> {
        if idx < REGISTER_COUNT {
            Ok(idx)
        } else {
            Err(Trap::OutOfRange(Location::Register(idx)))
        }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `idx` is not in `0..8`.
    pub fn read(&self, idx: usize) -> Result<u8, Trap> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(Trap::OutOfRange(Location::Register(idx)))
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `idx` is not in `0..8`; nothing is written.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Trap> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(Trap::OutOfRange(Location::Register(idx)))?;
        *slot = val;
        Ok(())
    }

    /// Copy of all register values, `R0` first.
    pub const fn snapshot(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    /// Formats all registers on one line, e.g. `R0=08 R1=09 ...`.
    pub fn dump(&self) -> String {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, v)| format!("R{i}={v:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
