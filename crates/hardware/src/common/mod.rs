//! Common types and constants used throughout the ALU model.
//!
//! 1. **Constants:** Field masks, widths, and the system-task name.
//! 2. **Error Handling:** Error enums for the harness, traces, configuration and opcode parsing.

/// Common constants (masks, widths, task name).
pub mod constants;

/// Error types for the outer surfaces of the model.
pub mod error;

pub use constants::{ALU_PREDICT_ARGS, ALU_PREDICT_TASK, OPCODE_MASK, SHAMT_MASK};
pub use error::{ConfigError, HarnessError, ParseOpError, TraceError};
