//! PUSH/POP stack operations.
//!
//! Two stack models are supported:
//! 1. **Growable:** values live in a separate unbounded `CallStack`.
//! 2. **RAM:** values live in main memory below `stack_top`, addressed by `R7`.
//!    PUSH decrements `R7` then stores; POP loads then increments `R7`.
//!    There is no overflow protection; a deep stack overwrites whatever is below it.
//!
//! In both models a POP from an empty stack is `Trap::StackUnderflow` and
//! leaves every register and memory byte untouched.

use super::Cpu;
use crate::common::Trap;
use crate::common::constants::STACK_POINTER_REG;
use crate::config::StackMode;

impl Cpu {
    /// Pushes a value onto the call stack.
    ///
    /// # Errors
    ///
    /// Never fails in `StackMode::Growable`. In `StackMode::Ram` it propagates
    /// `Trap::OutOfRange` from the register and memory accesses.
    pub fn push(&mut self, val: u8) -> Result<(), Trap> {
        match self.stack_mode {
            StackMode::Growable => {
                self.stack.push(val);
                Ok(())
            }
            StackMode::Ram => {
                let sp = self.regs.read(STACK_POINTER_REG)?.wrapping_sub(1);
                self.ram.write(sp as usize, val)?;
                self.regs.write(STACK_POINTER_REG, sp)
            }
        }
    }

    /// Pops the most recently pushed value.
    ///
    /// # Errors
    ///
    /// Returns `Trap::StackUnderflow` if the stack is empty.
    pub fn pop(&mut self) -> Result<u8, Trap> {
        match self.stack_mode {
            StackMode::Growable => self.stack.pop().ok_or(Trap::StackUnderflow),
            StackMode::Ram => {
                let sp = self.regs.read(STACK_POINTER_REG)?;
                if sp == self.stack_top {
                    return Err(Trap::StackUnderflow);
                }
                let val = self.ram.read(sp as usize)?;
                self.regs.write(STACK_POINTER_REG, sp.wrapping_add(1))?;
                Ok(val)
            }
        }
    }

    /// Number of values currently on the stack.
    pub fn stack_depth(&self) -> usize {
        match self.stack_mode {
            StackMode::Growable => self.stack.depth(),
            StackMode::Ram => {
                let sp = self.regs.snapshot()[STACK_POINTER_REG];
                self.stack_top.wrapping_sub(sp) as usize
            }
        }
    }
}
