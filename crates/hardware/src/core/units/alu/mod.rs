//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the ALU dispatcher. Arithmetic and logic
//! instructions (those with the ALU bit set in their opcode) are routed here
//! rather than through the general dispatcher. All results wrap modulo 256.
//!
//! Only `MUL` is implemented; any other operation that reaches the ALU is
//! rejected with `Trap::UnsupportedOperation`.

use crate::common::Trap;
use crate::isa::instruction::{ExecUnit, Mnemonic};

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform
    /// * `a`  - Value of the first (destination) register
    /// * `b`  - Value of the second register
    ///
    /// # Errors
    ///
    /// Returns `Trap::UnsupportedOperation` for any operation the ALU does not implement.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::Alu;
    /// use ls8_core::isa::Mnemonic;
    ///
    /// assert_eq!(Alu::execute(Mnemonic::Mul, 8, 9), Ok(72));
    /// // 16 * 16 = 256 wraps to 0
    /// assert_eq!(Alu::execute(Mnemonic::Mul, 16, 16), Ok(0));
    /// assert!(Alu::execute(Mnemonic::Ldi, 1, 2).is_err());
    /// ```
    pub fn execute(op: Mnemonic, a: u8, b: u8) -> Result<u8, Trap> {
        match op {
            Mnemonic::Mul => Ok(a.wrapping_mul(b)),
            other => Err(Trap::UnsupportedOperation {
                mnemonic: other,
                unit: ExecUnit::Alu,
            }),
        }
    }
}
