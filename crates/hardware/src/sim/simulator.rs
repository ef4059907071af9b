//! Simulator: owns the CPU and drives the fetch-decode-execute loop.
//!
//! The simulator is the execution engine. It holds the only reference to the
//! machine state for the duration of a run and moves between two states:
//! `Running` and `Halted`. A run ends on HLT, on reaching the end of the
//! loaded program, or on the first trap.

use tracing::{error, info, trace, warn};

use crate::common::{Fault, Trap};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::execution::Flow;
use crate::isa::disasm::disassemble;
use crate::sim::trace::{ConsoleSink, TraceSink, TraceSnapshot};
use crate::stats::SimStats;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// A HLT instruction executed.
    Hlt,
    /// The PC moved past the last loaded byte without a HLT.
    EndOfProgram,
    /// A previous step raised a fault.
    Faulted,
}

/// Execution engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// More instructions may execute.
    Running,
    /// No further instructions will execute.
    Halted(HaltReason),
}

/// Top-level simulator: CPU state, output sink and run statistics.
#[derive(Debug)]
pub struct Simulator<S: TraceSink = ConsoleSink> {
    /// CPU architectural state (registers, memory, stack).
    pub cpu: Cpu,
    /// Destination for PRN output and trace snapshots.
    pub sink: S,
    /// Statistics for the current run.
    pub stats: SimStats,
    trace: bool,
    state: RunState,
}

impl<S: TraceSink> Simulator<S> {
    /// Creates a simulator with empty memory.
    pub fn new(config: &Config, sink: S) -> Self {
        Self {
            cpu: Cpu::new(config),
            sink,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            state: RunState::Running,
        }
    }

    /// Loads a program image at address 0 and readies it to run.
    ///
    /// The PC returns to the entry point, statistics are cleared and the
    /// engine goes back to `Running`, so a program loaded after a halt or a
    /// fault runs from its first instruction. Registers, the stack and the
    /// sink are kept.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if the image is larger than memory; the
    /// simulator is not modified in that case.
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), Trap> {
        self.cpu.load_program(bytes)?;
        self.stats = SimStats::default();
        self.state = RunState::Running;
        Ok(())
    }

    /// Current engine state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Enables or disables per-instruction trace snapshots.
    pub const fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Executes at most one instruction.
    ///
    /// Returns the state after the step. Once halted, further calls do nothing.
    ///
    /// # Errors
    ///
    /// Returns a `Fault` carrying the PC of the failing instruction. The
    /// engine is halted afterwards.
    pub fn tick(&mut self) -> Result<RunState, Fault> {
        if self.state != RunState::Running {
            return Ok(self.state);
        }

        let pc = self.cpu.pc;
        if pc >= self.cpu.program_end() {
            warn!(pc, "reached end of program without HLT");
            self.state = RunState::Halted(HaltReason::EndOfProgram);
            return Ok(self.state);
        }

        if self.trace {
            self.sink.trace(&TraceSnapshot::capture(&self.cpu));
        }

        self.step().map_err(|trap| {
            error!(pc, %trap, "fatal trap");
            self.state = RunState::Halted(HaltReason::Faulted);
            Fault { pc, trap }
        })
    }

    /// Runs until the machine halts.
    ///
    /// # Errors
    ///
    /// Returns the first `Fault` raised; no instruction executes after it.
    pub fn run(&mut self) -> Result<HaltReason, Fault> {
        loop {
            if let RunState::Halted(reason) = self.tick()? {
                return Ok(reason);
            }
        }
    }

    /// Clears the machine state and statistics and returns to `Running`.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.stats = SimStats::default();
        self.state = RunState::Running;
    }

    /// Consumes the simulator, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn step(&mut self) -> Result<RunState, Trap> {
        let inst = self.cpu.fetch_decode()?;
        trace!(pc = inst.pc, inst = %disassemble(&inst), "execute");

        let flow = self.cpu.execute(&inst, &mut self.sink)?;
        self.cpu.retire(&inst, flow)?;
        self.stats.record(&inst, self.cpu.stack_depth());

        if flow == Flow::Halt {
            info!(pc = self.cpu.pc, retired = self.stats.instructions_retired, "halted");
            self.state = RunState::Halted(HaltReason::Hlt);
        }
        Ok(self.state)
    }
}
