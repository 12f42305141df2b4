//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). The shift amount is the low 5 bits of
//! operand `b`, so shifts by 32 or more wrap modulo 32.
//!
//! SLL reports the last bit shifted out of `a` as carry. The right shifts
//! leave carry clear.

use super::UnitOutput;
use crate::common::constants::{SHAMT_MASK, WORD_BITS};
use crate::isa::AluOp;

/// Extracts the shift amount (0-31) from operand `b`.
#[inline]
pub const fn shamt(b: u32) -> u32 {
    b & SHAMT_MASK
}

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (low 5 bits used, upper bits ignored).
///
/// # Returns
///
/// The shifted result. Returns the all-zero output for non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> UnitOutput {
    let sh = shamt(b);
    match op {
        AluOp::Sll => UnitOutput {
            result: a << sh,
            carry: sh != 0 && (a >> (WORD_BITS - sh)) & 1 == 1,
            overflow: false,
        },
        AluOp::Srl => UnitOutput::result_only(a >> sh),
        AluOp::Sra => UnitOutput::result_only(((a as i32) >> sh) as u32),
        _ => UnitOutput::default(),
    }
}
