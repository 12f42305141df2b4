//! In-memory signal.
//!
//! `Signal` stands in for a Verilog `reg` of a fixed width. Writes are
//! truncated to that width, so a 1-bit flag slot can only ever hold 0 or 1.
//! It also counts writes, which lets callers tell whether a task touched
//! its output slots at all.

use super::traits::ValueHandle;
use crate::common::constants::WORD_BITS;

/// A fixed-width value holder implementing [`ValueHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signal {
    width: u32,
    value: u32,
    writes: u32,
}

impl Signal {
    /// Creates a zero-valued signal `width` bits wide.
    ///
    /// `width` is clamped to `1..=32`.
    pub const fn new(width: u32) -> Self {
        let width = if width == 0 {
            1
        } else if width > WORD_BITS {
            WORD_BITS
        } else {
            width
        };
        Self {
            width,
            value: 0,
            writes: 0,
        }
    }

    /// A 32-bit signal holding `value`.
    pub const fn word(value: u32) -> Self {
        Self {
            width: WORD_BITS,
            value,
            writes: 0,
        }
    }

    /// A 1-bit signal, as used for the flag outputs.
    pub const fn bit() -> Self {
        Self::new(1)
    }

    /// Width in bits.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Current value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Number of `put_value` calls since construction.
    pub const fn writes(&self) -> u32 {
        self.writes
    }

    const fn mask(&self) -> u32 {
        if self.width >= WORD_BITS {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::word(0)
    }
}

impl ValueHandle for Signal {
    fn get_value(&self) -> u32 {
        self.value
    }

    fn put_value(&mut self, value: u32) {
        self.value = value & self.mask();
        self.writes = self.writes.wrapping_add(1);
    }
}
