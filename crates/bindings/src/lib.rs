//! Python bindings for the ALU reference model.
//!
//! This crate exposes the model to Python via PyO3. It provides:
//! 1. **Evaluation:** `alu_predict` and the `AluOutput` class.
//! 2. **System task:** `call_systf` drives `$alu_predict_vpi` with handle objects.
//! 3. **Batch and traces:** `evaluate_batch`, `capture_trace`, `verify_trace`, and `Stats`.
//! 4. **Utilities:** Version, mnemonics, logging setup, and Python↔Rust conversion helpers.

use pyo3::prelude::*;

/// Single-evaluation binding (`alu_predict`, `AluOutput`).
pub mod alu;
/// Python dict to Rust `Config` conversion and error mapping.
pub mod conversion;
/// Batch evaluation and trace bindings.
pub mod sim;
/// Statistics binding (`Stats`).
pub mod stats;
/// Utility functions (version, mnemonic, logging).
pub mod utils;
/// System-task binding (`call_systf`).
pub mod vpi;

/// Registers all classes and functions onto the given Python module.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_alusim_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<alu::PyAluOutput>()?;
    m.add_class::<stats::PyStats>()?;

    m.add_function(wrap_pyfunction!(alu::alu_predict, m)?)?;
    m.add_function(wrap_pyfunction!(vpi::call_systf, m)?)?;
    m.add_function(wrap_pyfunction!(vpi::systf_names, m)?)?;
    m.add_function(wrap_pyfunction!(sim::evaluate_batch, m)?)?;
    m.add_function(wrap_pyfunction!(sim::capture_trace, m)?)?;
    m.add_function(wrap_pyfunction!(sim::verify_trace, m)?)?;
    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::mnemonic, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_alusim_module(m)?;
    Ok(())
}
