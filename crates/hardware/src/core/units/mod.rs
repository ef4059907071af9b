//! Execution units and functional components.
//!
//! Arithmetic and logic instructions are routed to the ALU, separately from
//! the data-movement and control instructions handled by the CPU directly.

/// Arithmetic Logic Unit for register arithmetic.
pub mod alu;
