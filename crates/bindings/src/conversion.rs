//! Python↔Rust conversion helpers.
//!
//! Converts Python dicts into the core `Config` via JSON serialization, so
//! the same schema is used from both Python and the CLI, and maps core
//! errors onto Python exception types.

use alusim_core::common::{ConfigError, HarnessError, TraceError};
use alusim_core::config::Config;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;

/// Converts a Python dict to a `Config`.
///
/// The dict is serialized to JSON and then parsed and validated by
/// `Config::from_json`. Keys must match the Rust config structure
/// (`general`, `batch`).
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A Python dict, e.g. `{"batch": {"workers": 4}}`.
///
/// # Returns
///
/// The parsed `Config`, or a `PyValueError` if the dict is invalid.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<Config> {
    let json = py.import("json")?;
    let dumps = json.getattr("dumps")?;
    let json_str: String = dumps.call1((dict,))?.extract()?;

    Config::from_json(&json_str).map_err(config_err)
}

/// Resolves an optional config dict, falling back to `Config::default()`.
pub fn optional_config(py: Python<'_>, dict: Option<&Bound<'_, PyAny>>) -> PyResult<Config> {
    dict.map_or_else(|| Ok(Config::default()), |d| py_dict_to_config(py, d))
}

/// Converts any serializable value to Python objects via `json.loads`.
pub fn to_py_object<'py, T: Serialize>(py: Python<'py>, value: &T) -> PyResult<Bound<'py, PyAny>> {
    let text = serde_json::to_string(value)
        .map_err(|e| PyRuntimeError::new_err(format!("serialization failed: {e}")))?;
    py.import("json")?.getattr("loads")?.call1((text,))
}

/// Maps a configuration error to `ValueError`.
pub fn config_err(e: ConfigError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Maps a harness error to `RuntimeError`.
pub fn harness_err(e: HarnessError) -> PyErr {
    PyRuntimeError::new_err(e.to_string())
}

/// Maps a trace error to `OSError` (I/O) or `ValueError` (content).
pub fn trace_err(e: TraceError) -> PyErr {
    match e {
        TraceError::Io(_) => PyIOError::new_err(e.to_string()),
        TraceError::Parse { .. } | TraceError::Write(_) => PyValueError::new_err(e.to_string()),
    }
}
