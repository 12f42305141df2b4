//! Batch and trace Python bindings.
//!
//! `evaluate_batch` runs the core worker pool with the GIL released;
//! `capture_trace` and `verify_trace` read and write JSON-lines reference
//! traces so a testbench can record a run and check it later.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use alusim_core::sim::{AluInputs, BatchEvaluator, TraceChecker, TraceRecord, read_trace_file, write_trace};
use pyo3::exceptions::PyIOError;
use pyo3::prelude::*;

use crate::alu::PyAluOutput;
use crate::conversion::{optional_config, to_py_object, trace_err};
use crate::stats::PyStats;

/// Evaluates many `(a, b, opcode)` triples in parallel.
///
/// # Arguments
///
/// * `inputs` - A list of `(a, b, opcode)` tuples.
/// * `config` - Optional config dict, e.g. `{"batch": {"workers": 4}}`.
///
/// # Returns
///
/// `(outputs, stats)`: one `AluOutput` per input in input order, and the
/// run's `Stats`.
#[pyfunction]
#[pyo3(signature = (inputs, config=None))]
pub fn evaluate_batch(
    py: Python<'_>,
    inputs: Vec<(u32, u32, u32)>,
    config: Option<&Bound<'_, PyAny>>,
) -> PyResult<(Vec<PyAluOutput>, PyStats)> {
    let config = optional_config(py, config)?;
    let inputs: Vec<AluInputs> = inputs
        .into_iter()
        .map(|(a, b, opcode)| AluInputs::new(a, b, opcode))
        .collect();

    let evaluator = BatchEvaluator::new(&config.batch);
    let run = py.allow_threads(|| evaluator.evaluate_all(&inputs));

    let outputs = run.outputs.into_iter().map(PyAluOutput::from).collect();
    Ok((outputs, PyStats::from(run.stats)))
}

/// Evaluates `inputs` and writes them as a reference trace.
///
/// # Returns
///
/// The number of records written.
#[pyfunction]
pub fn capture_trace(path: PathBuf, inputs: Vec<(u32, u32, u32)>) -> PyResult<usize> {
    let records: Vec<TraceRecord> = inputs
        .into_iter()
        .map(|(a, b, opcode)| TraceRecord::capture(a, b, opcode))
        .collect();
    let file = File::create(&path)
        .map_err(|e| PyIOError::new_err(format!("{}: {e}", path.display())))?;
    write_trace(BufWriter::new(file), &records).map_err(trace_err)?;
    Ok(records.len())
}

/// Verifies a JSON-lines trace file against the model.
///
/// # Returns
///
/// A dict with `checked`, `mismatches` (each with `index`, `inputs`,
/// `expected` and `actual`) and `stats`.
#[pyfunction]
#[pyo3(signature = (path, config=None))]
pub fn verify_trace<'py>(
    py: Python<'py>,
    path: PathBuf,
    config: Option<&Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyAny>> {
    let config = optional_config(py, config)?;
    let records = read_trace_file(&path).map_err(trace_err)?;
    let checker = TraceChecker::new(&config.general);
    let report = py.allow_threads(|| checker.verify(&records));
    to_py_object(py, &report)
}
