//! Common constants shared by the ALU model and its harness adapter.

/// Mask applied to the opcode input before dispatch (4-bit opcode field).
pub const OPCODE_MASK: u32 = 0xF;

/// Number of distinct opcode encodings (including the undefined range).
pub const OPCODE_COUNT: usize = 16;

/// Mask applied to operand `b` to obtain the shift amount (0-31).
pub const SHAMT_MASK: u32 = 0x1F;

/// Operand width in bits.
pub const WORD_BITS: u32 = 32;

/// Bit position of the sign bit in a 32-bit word.
pub const SIGN_BIT: u32 = WORD_BITS - 1;

/// Name under which the ALU system task is registered with the host simulator.
pub const ALU_PREDICT_TASK: &str = "$alu_predict_vpi";

/// Number of positional arguments the ALU system task takes
/// (3 inputs followed by 5 output slots).
pub const ALU_PREDICT_ARGS: usize = 8;
