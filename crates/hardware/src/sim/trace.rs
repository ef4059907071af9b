//! Trace sink trait and state snapshots.
//!
//! This module defines where the machine's output goes. It provides:
//! 1. **Output:** PRN values are delivered to a `TraceSink`.
//! 2. **Tracing:** Optional per-instruction `TraceSnapshot`s of PC, instruction bytes and registers.
//! 3. **Sinks:** A console sink for the CLI and a capturing sink for embedding and tests.

use std::fmt;

use crate::common::constants::REGISTER_COUNT;
use crate::core::Cpu;

/// Receiver for program output and diagnostic snapshots.
///
/// Snapshots are purely diagnostic; correct execution never depends on them.
pub trait TraceSink {
    /// Receives the value printed by a PRN instruction.
    fn print(&mut self, value: u8);

    /// Receives a state snapshot taken before an instruction executes.
    fn trace(&mut self, snapshot: &TraceSnapshot);
}

/// Machine state just before an instruction executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceSnapshot {
    /// Program counter.
    pub pc: usize,
    /// Memory bytes at `pc`, `pc + 1` and `pc + 2` (zero past the end of memory).
    pub bytes: [u8; 3],
    /// Register values, `R0` first.
    pub regs: [u8; REGISTER_COUNT],
}

impl TraceSnapshot {
    /// Captures the current state of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        let at = |offset: usize| cpu.read_memory(cpu.pc + offset).unwrap_or(0);
        Self {
            pc: cpu.pc,
            bytes: [at(0), at(1), at(2)],
            regs: cpu.regs.snapshot(),
        }
    }
}

impl fmt::Display for TraceSnapshot {
    /// Formats as `TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc, self.bytes[0], self.bytes[1], self.bytes[2]
        )?;
        for reg in self.regs {
            write!(f, " {reg:02X}")?;
        }
        Ok(())
    }
}

/// Sink for the command line: PRN values to stdout, snapshots to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn print(&mut self, value: u8) {
        println!("{value}");
    }

    fn trace(&mut self, snapshot: &TraceSnapshot) {
        eprintln!("{snapshot}");
    }
}

/// Sink that records everything it receives.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureSink {
    /// Values printed by PRN, in order.
    pub printed: Vec<u8>,
    /// Snapshots received, in order.
    pub traces: Vec<TraceSnapshot>,
}

impl CaptureSink {
    /// Creates an empty sink.
    pub const fn new() -> Self {
        Self {
            printed: Vec::new(),
            traces: Vec::new(),
        }
    }

    /// Printed values rendered one per line, as the console sink would show them.
    pub fn output(&self) -> String {
        self.printed.iter().map(|v| format!("{v}\n")).collect()
    }
}

impl TraceSink for CaptureSink {
    fn print(&mut self, value: u8) {
        self.printed.push(value);
    }

    fn trace(&mut self, snapshot: &TraceSnapshot) {
        self.traces.push(*snapshot);
    }
}
