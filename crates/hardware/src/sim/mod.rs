//! Simulation utilities and program loading.
//!
//! Provides the program loader, the output/trace sink interface, and the
//! simulator that runs a loaded program to completion.

/// Program text parsing and file loading.
pub mod loader;

/// Execution engine owning the CPU.
pub mod simulator;

/// Output and trace sinks.
pub mod trace;

pub use simulator::{HaltReason, RunState, Simulator};
pub use trace::{CaptureSink, ConsoleSink, TraceSink, TraceSnapshot};
