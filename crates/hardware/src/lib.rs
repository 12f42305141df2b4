//! 32-bit ALU reference model.
//!
//! This crate implements a bit-exact combinational ALU and the plumbing to
//! drive it from a hardware simulation:
//! 1. **Core:** The ALU evaluator (add, sub, logic, compare, shifts) and its four flags.
//! 2. **ISA:** The 4-bit opcode type, total over all 16 encodings.
//! 3. **VPI:** The `$alu_predict_vpi` system-task adapter and its registry.
//! 4. **Simulation:** Parallel batch evaluation and reference-trace verification.
//! 5. **Support:** Configuration, statistics, and error types.

/// Common types and constants (masks, widths, errors).
pub mod common;
/// Configuration (logging, batch pool).
pub mod config;
/// Combinational core (ALU unit).
pub mod core;
/// 4-bit ALU opcode.
pub mod isa;
/// Batch evaluation and reference traces.
pub mod sim;
/// Evaluation statistics collection and reporting.
pub mod stats;
/// Simulator system-task adapter.
pub mod vpi;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// ALU unit, its output type, and the raw-opcode entry point.
pub use crate::core::units::alu::{Alu, AluOutput, evaluate};
/// Opcode type.
pub use crate::isa::AluOp;
