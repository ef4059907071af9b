//! Run statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Throughput:** Instructions retired and host time.
//! 2. **Instruction mix:** Counts by category (ALU, load, I/O, stack, system).
//! 3. **Stack usage:** Maximum call stack depth reached.

use std::time::Instant;

use crate::isa::instruction::{Instruction, Mnemonic};

/// Run statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions that completed.
    pub instructions_retired: u64,
    /// Count of ALU instructions retired.
    pub inst_alu: u64,
    /// Count of register load (LDI) instructions retired.
    pub inst_load: u64,
    /// Count of output (PRN) instructions retired.
    pub inst_io: u64,
    /// Count of PUSH/POP instructions retired.
    pub inst_stack: u64,
    /// Count of system (HLT) instructions retired.
    pub inst_system: u64,
    /// Deepest the call stack got.
    pub max_stack_depth: usize,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_io: 0,
            inst_stack: 0,
            inst_system: 0,
            max_stack_depth: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction and the stack depth after it.
    pub fn record(&mut self, inst: &Instruction, stack_depth: usize) {
        self.instructions_retired += 1;
        match inst.mnemonic() {
            Mnemonic::Mul => self.inst_alu += 1,
            Mnemonic::Ldi => self.inst_load += 1,
            Mnemonic::Prn => self.inst_io += 1,
            Mnemonic::Push | Mnemonic::Pop => self.inst_stack += 1,
            Mnemonic::Hlt => self.inst_system += 1,
        }
        self.max_stack_depth = self.max_stack_depth.max(stack_depth);
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        println!("\n==========================================================");
        println!("LS-8 RUN STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.6} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.io                  {} ({:.2}%)", self.inst_io, pct(self.inst_io));
        println!("  op.stack               {} ({:.2}%)", self.inst_stack, pct(self.inst_stack));
        println!("  op.system              {} ({:.2}%)", self.inst_system, pct(self.inst_system));
        println!("----------------------------------------------------------");
        println!("stack.max_depth          {}", self.max_stack_depth);
        println!("==========================================================");
    }
}
