//! Common utilities and types used throughout the LS-8 interpreter.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Machine dimensions and opcode bit layout.
//! 2. **Error Handling:** Trap and fault representations.

/// Machine-wide constants.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT};
pub use error::{Fault, Location, Trap};
