//! Instruction-level definitions for the ALU.
//!
//! The model has no instruction decoder; the only encoded field is the
//! 4-bit ALU opcode.

/// 4-bit ALU opcode and its mnemonic table.
pub mod opcode;

pub use opcode::{AluOp, UndefinedCode};
