//! Instruction Execution.
//!
//! This module implements the per-instruction work of the CPU. It performs the following:
//! 1. **Fetch/Decode:** Reads the opcode and operands at the PC through the opcode table.
//! 2. **Dispatch:** Routes ALU instructions to the ALU and everything else to the general handlers.
//! 3. **Retirement:** Advances the PC by the instruction width, or to a handler-chosen target.
//!
//! The run loop that sequences these steps lives in [`crate::sim::simulator`].

use super::Cpu;
use crate::common::constants::MEMORY_SIZE;
use crate::common::{Location, Trap};
use crate::core::arch::gpr::Gpr;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::instruction::{ExecUnit, Instruction, InstructionBits, Mnemonic};
use crate::sim::trace::TraceSink;

/// Where control goes after an instruction completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Fall through to the next instruction.
    Next,
    /// Continue at an absolute address. Reserved for jump instructions.
    Jump(usize),
    /// Stop the machine after advancing past this instruction.
    Halt,
}

impl Cpu {
    /// Fetches and decodes the instruction at the current PC.
    ///
    /// # Errors
    ///
    /// * `Trap::IllegalInstruction` if the opcode is unknown.
    /// * `Trap::OutOfRange` if an operand byte lies past the end of memory.
    pub fn fetch_decode(&self) -> Result<Instruction, Trap> {
        decode(self.ram.as_slice(), self.pc)
    }

    /// Executes a decoded instruction against the machine state.
    ///
    /// PRN output goes to `sink`. The PC is not modified; see [`Cpu::retire`].
    ///
    /// # Errors
    ///
    /// Propagates any trap raised by the handler. A failing instruction has
    /// no partial effect on registers or the stack.
    pub fn execute<S>(&mut self, inst: &Instruction, sink: &mut S) -> Result<Flow, Trap>
    where
        S: TraceSink + ?Sized,
    {
        match inst.descriptor.unit {
            ExecUnit::Alu => self.execute_alu(inst),
            ExecUnit::General => self.execute_general(inst, sink),
        }
    }

    /// Advances the PC after `inst` completed with `flow`.
    ///
    /// # Errors
    ///
    /// Returns `Trap::OutOfRange` if a jump target lies beyond the end of memory.
    ///
    /// Only opcodes with the sets-PC bit may retire with `Flow::Jump`.
    pub fn retire(&mut self, inst: &Instruction, flow: Flow) -> Result<(), Trap> {
        match flow {
            Flow::Next | Flow::Halt => self.pc = inst.pc + inst.width(),
            Flow::Jump(target) => {
                debug_assert!(
                    inst.descriptor.opcode.sets_pc(),
                    "jump retired by opcode {:#04x} without the sets-PC bit",
                    inst.descriptor.opcode
                );
                if target > MEMORY_SIZE {
                    return Err(Trap::OutOfRange(Location::Memory(target)));
                }
                self.pc = target;
            }
        }
        Ok(())
    }

    /// Two-register ALU form: `reg[a] = op(reg[a], reg[b])`.
    fn execute_alu(&mut self, inst: &Instruction) -> Result<Flow, Trap> {
        let dst = inst.a() as usize;
        let lhs = self.read_register(dst)?;
        let rhs = self.read_register(inst.b() as usize)?;
        let result = Alu::execute(inst.mnemonic(), lhs, rhs)?;
        self.write_register(dst, result)?;
        Ok(Flow::Next)
    }

    fn execute_general<S>(&mut self, inst: &Instruction, sink: &mut S) -> Result<Flow, Trap>
    where
        S: TraceSink + ?Sized,
    {
        let reg = inst.a() as usize;
        match inst.mnemonic() {
            Mnemonic::Hlt => Ok(Flow::Halt),
            Mnemonic::Ldi => {
                self.write_register(reg, inst.b())?;
                Ok(Flow::Next)
            }
            Mnemonic::Prn => {
                let val = self.read_register(reg)?;
                sink.print(val);
                Ok(Flow::Next)
            }
            Mnemonic::Push => {
                let val = self.read_register(reg)?;
                self.push(val)?;
                Ok(Flow::Next)
            }
            Mnemonic::Pop => {
                // Validate the destination first so a bad index does not consume a value.
                let dst = Gpr::checked_index(reg)?;
                let val = self.pop()?;
                self.write_register(dst, val)?;
                Ok(Flow::Next)
            }
            other => Err(Trap::UnsupportedOperation {
                mnemonic: other,
                unit: ExecUnit::General,
            }),
        }
    }
}
