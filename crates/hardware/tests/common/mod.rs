//! Shared test infrastructure.

/// Fluent program assembler.
pub mod builder;


/// Mock implementations of interpreter traits.
pub mod mocks;
