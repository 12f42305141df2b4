//! Functional units.
//!
//! The model contains a single unit: the combinational ALU.

/// Arithmetic Logic Unit (add, sub, logic, compare, shifts).
pub mod alu;
