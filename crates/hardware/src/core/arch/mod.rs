//! LS-8 architectural state.
//!
//! This module contains the storage elements the CPU operates on.
//! It includes the following modules:
//! 1. **GPRs:** The eight 8-bit general-purpose registers.
//! 2. **RAM:** The 256-byte main memory.
//! 3. **Stack:** The growable call stack used by the default stack model.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Main memory implementation.
pub mod ram;

/// Growable call stack implementation.
pub mod stack;
