//! Combinational core of the model.

/// Functional units (ALU).
pub mod units;
