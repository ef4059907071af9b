//! Main memory.
//!
//! A flat 256-byte array holding both the program image and any data the
//! program writes. Every access is bounds-checked; addresses never wrap.

use crate::common::constants::MEMORY_SIZE;
use crate::common::{Location, Trap};

/// The 256-byte main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    bytes: [u8; MEMORY_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `addr` is not in `0..256`.
    pub fn read(&self, addr: usize) -> Result<u8, Trap> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(Trap::OutOfRange(Location::Memory(addr)))
    }

    /// Writes the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if `addr` is not in `0..256`.
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Trap> {
        let slot = self
            .bytes
            .get_mut(addr)
            .ok_or(Trap::OutOfRange(Location::Memory(addr)))?;
        *slot = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` naming the first address that does not fit;
    /// memory is left untouched in that case.
    pub fn load_at(&mut self, base: usize, data: &[u8]) -> Result<(), Trap> {
        let end = base + data.len();
        if end > MEMORY_SIZE {
            return Err(Trap::OutOfRange(Location::Memory(MEMORY_SIZE.max(base))));
        }
        self.bytes[base..end].copy_from_slice(data);
        Ok(())
    }

    /// Zero-fills all of memory.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// The whole memory as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}
