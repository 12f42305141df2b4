//! Simulation-side drivers for the ALU.
//!
//! 1. **Batch:** Order-preserving parallel evaluation of many input triples.
//! 2. **Trace:** Reading, writing and verifying JSON-lines reference traces.

/// Parallel bulk evaluation.
pub mod batch;

/// Reference trace records and verification.
pub mod trace;

pub use batch::{AluInputs, BatchEvaluator, BatchRun, evaluate_sequential};
pub use trace::{
    Mismatch, TraceChecker, TraceRecord, TraceReport, read_trace, read_trace_file, verify_trace,
    write_trace,
};
