//! ALU arithmetic operations.
//!
//! Implements 32-bit wrapping addition and subtraction together with the
//! carry and signed-overflow flags they produce. Both are computed on the
//! operands widened to 64 bits so that bit 32 of the wide result is the
//! carry-out (ADD) or the borrow (SUB).
//!
//! The SUB carry has borrow-occurred polarity: it is set when `a < b`
//! unsigned, the inverse of the ARM/x86 "no borrow" convention. Reference
//! traces recorded against the hardware depend on this polarity.

use super::UnitOutput;
use crate::common::constants::{SIGN_BIT, WORD_BITS};
use crate::isa::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be `Add` or `Sub`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped result with carry and overflow. Returns the all-zero output
/// for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> UnitOutput {
    match op {
        AluOp::Add => add(a, b),
        AluOp::Sub => sub(a, b),
        _ => UnitOutput::default(),
    }
}

/// `a + b` with carry-out and two's-complement overflow.
///
/// Overflow is set when both operands share a sign and the result's sign differs.
#[inline]
pub fn add(a: u32, b: u32) -> UnitOutput {
    let sum = u64::from(a) + u64::from(b);
    let result = sum as u32;
    UnitOutput {
        result,
        carry: (sum >> WORD_BITS) & 1 == 1,
        overflow: ((!(a ^ b) & (a ^ result)) >> SIGN_BIT) == 1,
    }
}

/// `a - b` with borrow and two's-complement overflow.
///
/// Overflow is set when the operands differ in sign and the result's sign
/// differs from `a`.
#[inline]
pub fn sub(a: u32, b: u32) -> UnitOutput {
    let diff = u64::from(a).wrapping_sub(u64::from(b));
    let result = diff as u32;
    UnitOutput {
        result,
        carry: (diff >> WORD_BITS) & 1 == 1,
        overflow: (((a ^ b) & (a ^ result)) >> SIGN_BIT) == 1,
    }
}
