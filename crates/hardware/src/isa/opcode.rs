//! ALU opcode definitions.
//!
//! The ALU is selected by a 4-bit opcode. Codes `0x0`-`0x8` name an
//! operation; `0x9`-`0xF` are undefined and carried as [`AluOp::Undefined`]
//! so that every 4-bit value has a representation. Construction from a raw
//! integer masks to the low 4 bits and never fails.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::{OPCODE_COUNT, OPCODE_MASK};
use crate::common::error::ParseOpError;

/// ALU operation selected by the 4-bit opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `0x0`: wrapping addition.
    Add,

    /// `0x1`: wrapping subtraction.
    Sub,

    /// `0x2`: bitwise AND.
    And,

    /// `0x3`: bitwise OR.
    Or,

    /// `0x4`: bitwise XOR.
    Xor,

    /// `0x5`: set less than (unsigned compare).
    Slt,

    /// `0x6`: shift left logical.
    Sll,

    /// `0x7`: shift right logical.
    Srl,

    /// `0x8`: shift right arithmetic.
    Sra,

    /// `0x9`-`0xF`: no operation is assigned. Holds the raw 4-bit code.
    Undefined(UndefinedCode),
}

/// A 4-bit code in the undefined range `0x9`-`0xF`.
///
/// Only [`AluOp::from_bits`] can build one, so an `Undefined` opcode never
/// aliases a defined encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UndefinedCode(u8);

impl UndefinedCode {
    /// The raw 4-bit code.
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl AluOp {
    /// Decodes an opcode from the low 4 bits of `bits`.
    ///
    /// Upper bits are ignored, matching the `& 0xF` the harness applies to
    /// its opcode argument.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & OPCODE_MASK {
            0x0 => Self::Add,
            0x1 => Self::Sub,
            0x2 => Self::And,
            0x3 => Self::Or,
            0x4 => Self::Xor,
            0x5 => Self::Slt,
            0x6 => Self::Sll,
            0x7 => Self::Srl,
            0x8 => Self::Sra,
            code => Self::Undefined(UndefinedCode(code as u8)),
        }
    }

    /// Returns the 4-bit encoding of this opcode.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Add => 0x0,
            Self::Sub => 0x1,
            Self::And => 0x2,
            Self::Or => 0x3,
            Self::Xor => 0x4,
            Self::Slt => 0x5,
            Self::Sll => 0x6,
            Self::Srl => 0x7,
            Self::Sra => 0x8,
            Self::Undefined(code) => code.code(),
        }
    }

    /// Returns the lower-case mnemonic, or `"undef"` for the undefined range.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Slt => "slt",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Undefined(_) => "undef",
        }
    }

    /// Returns `true` for opcodes `0x0`-`0x8`.
    pub const fn is_defined(self) -> bool {
        !matches!(self, Self::Undefined(_))
    }

    /// Returns `true` for the shift class (SLL, SRL, SRA), which consult only
    /// the low 5 bits of operand `b`.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }

    /// Iterates over all 16 encodings in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..OPCODE_COUNT as u32).map(Self::from_bits)
    }
}

impl From<u32> for AluOp {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<AluOp> for u32 {
    fn from(op: AluOp) -> Self {
        Self::from(op.bits())
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined(code) => write!(f, "undef({:#x})", code.code()),
            op => f.write_str(op.mnemonic()),
        }
    }
}

impl FromStr for AluOp {
    type Err = ParseOpError;

    /// Parses a mnemonic (`"add"`, `"SRA"`), the `Display` form of an
    /// undefined opcode (`"undef(0xa)"`), or a decimal / `0x` hex number.
    /// Bare numbers are masked to 4 bits like any other raw opcode; the
    /// `undef(..)` form only accepts `0x9`-`0xF`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let op = match text.as_str() {
            "add" => Self::Add,
            "sub" => Self::Sub,
            "and" => Self::And,
            "or" => Self::Or,
            "xor" => Self::Xor,
            "slt" => Self::Slt,
            "sll" => Self::Sll,
            "srl" => Self::Srl,
            "sra" => Self::Sra,
            other => {
                let undef = other
                    .strip_prefix("undef(")
                    .and_then(|rest| rest.strip_suffix(')'));
                let number = undef.unwrap_or(other);
                let bits = match number.strip_prefix("0x") {
                    Some(hex) => u32::from_str_radix(hex, 16),
                    None => number.parse::<u32>(),
                }
                .map_err(|_| ParseOpError(s.to_string()))?;
                let op = Self::from_bits(bits);
                // `undef(..)` must name a code in the undefined range.
                if undef.is_some() && (op.is_defined() || bits > OPCODE_MASK) {
                    return Err(ParseOpError(s.to_string()));
                }
                op
            }
        };
        Ok(op)
    }
}
