//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, and set-less-than. The comparison is
//! unsigned and its result is always 0 or 1. None of these operations
//! produce a carry or overflow.

use super::UnitOutput;
use crate::isa::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The result with carry and overflow clear. Returns the all-zero output
/// for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> UnitOutput {
    let result = match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => u32::from(a < b),
        _ => 0,
    };
    UnitOutput::result_only(result)
}
