//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the combinational 32-bit ALU: two operands and a
//! 4-bit opcode in; a result and four condition flags out. Evaluation is
//! pure and stateless, so it can be called from any number of threads.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (carry and overflow)
//! - [`logic`]:      And, Or, Xor, Slt
//! - [`shifts`]:     Sll, Srl, Sra
//!
//! Each submodule produces a [`UnitOutput`] (result, carry, overflow). The
//! zero and sign flags are then derived from the result uniformly for every
//! opcode, including the undefined range `0x9`-`0xF`, whose result is 0.

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::SIGN_BIT;
use crate::isa::AluOp;

/// Opcode-specific output of a functional unit, before zero/sign derivation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitOutput {
    /// 32-bit result.
    pub result: u32,
    /// Carry (ADD), borrow (SUB) or last bit shifted out (SLL).
    pub carry: bool,
    /// Signed overflow (ADD, SUB).
    pub overflow: bool,
}

impl UnitOutput {
    /// A result with carry and overflow clear.
    #[inline]
    pub const fn result_only(result: u32) -> Self {
        Self {
            result,
            carry: false,
            overflow: false,
        }
    }
}

/// Complete ALU output: the result and all four condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AluOutput {
    /// 32-bit result.
    pub result: u32,
    /// Set when `result == 0`.
    pub zero: bool,
    /// Bit 31 of `result`.
    pub sign: bool,
    /// Opcode-specific carry; clear unless the opcode defines it.
    pub carry: bool,
    /// Signed overflow; clear unless the opcode defines it.
    pub overflow: bool,
}

impl AluOutput {
    /// Derives zero and sign from the unit's result and carries the
    /// opcode-specific flags through unchanged.
    #[inline]
    pub const fn from_unit(unit: UnitOutput) -> Self {
        Self {
            result: unit.result,
            zero: unit.result == 0,
            sign: (unit.result >> SIGN_BIT) & 1 == 1,
            carry: unit.carry,
            overflow: unit.overflow,
        }
    }

    /// Returns the five outputs in harness slot order
    /// (`result, zero, sign, carry, overflow`), flags as 0/1.
    pub const fn as_slots(&self) -> [u32; 5] {
        [
            self.result,
            self.zero as u32,
            self.sign as u32,
            self.carry as u32,
            self.overflow as u32,
        ]
    }
}

impl fmt::Display for AluOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "result={:#010x} Z={} S={} C={} V={}",
            self.result,
            u8::from(self.zero),
            u8::from(self.sign),
            u8::from(self.carry),
            u8::from(self.overflow)
        )
    }
}

/// Arithmetic Logic Unit for 32-bit integer operations.
///
/// A zero-sized type: all state lives in the arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Evaluates one ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    /// Undefined opcodes leave the result at 0; flags are derived from it
    /// like any other result.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also the shift amount source)
    ///
    /// # Examples
    ///
    /// ```
    /// use alusim_core::core::units::alu::Alu;
    /// use alusim_core::isa::AluOp;
    ///
    /// let out = Alu::evaluate(AluOp::Add, 0xFFFF_FFFF, 1);
    /// assert_eq!(out.result, 0);
    /// assert!(out.zero && out.carry);
    ///
    /// let out = Alu::evaluate(AluOp::Sra, 0x8000_0000, 1);
    /// assert_eq!(out.result, 0xC000_0000);
    /// ```
    pub fn evaluate(op: AluOp, a: u32, b: u32) -> AluOutput {
        let unit = match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Slt => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
            AluOp::Undefined(_) => UnitOutput::default(),
        };
        AluOutput::from_unit(unit)
    }
}

/// Evaluates the ALU for a raw opcode value.
///
/// Only the low 4 bits of `opcode` are consulted. This is the function the
/// system-task adapter, the batch pool and the bindings all call.
#[inline]
pub fn evaluate(a: u32, b: u32, opcode: u32) -> AluOutput {
    Alu::evaluate(AluOp::from_bits(opcode), a, b)
}
