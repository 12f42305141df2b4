//! Statistics Python binding.
//!
//! Exposes evaluation statistics to Python: getters for totals and flag
//! activity, per-opcode counts, `print` / `print_sections` for human-readable
//! output, and `to_dict` for JSON-serializable export.

use alusim_core::AluOp;
use alusim_core::stats::EvalStats;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-exposed statistics: wraps `EvalStats` for read and print from Python.
#[pyclass(name = "Stats")]
#[derive(Clone, Debug)]
pub struct PyStats {
    /// Wrapped core statistics.
    pub inner: EvalStats,
}

impl From<EvalStats> for PyStats {
    fn from(inner: EvalStats) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyStats {
    #[getter]
    fn evaluations(&self) -> u64 {
        self.inner.evaluations
    }
    #[getter]
    fn undefined(&self) -> u64 {
        self.inner.undefined()
    }
    #[getter]
    fn zero_set(&self) -> u64 {
        self.inner.zero_set
    }
    #[getter]
    fn sign_set(&self) -> u64 {
        self.inner.sign_set
    }
    #[getter]
    fn carry_set(&self) -> u64 {
        self.inner.carry_set
    }
    #[getter]
    fn overflow_set(&self) -> u64 {
        self.inner.overflow_set
    }

    /// Evaluations recorded for `opcode` (low 4 bits used).
    fn count(&self, opcode: u32) -> u64 {
        self.inner.count(AluOp::from_bits(opcode))
    }

    /// Print all stats (full dump).
    fn print(&self) {
        self.inner.print();
    }

    /// Print only the given sections. Options: "summary", "opcodes", "flags".
    /// Pass an empty list for full dump.
    fn print_sections(&self, sections: Vec<String>) {
        self.inner.print_sections(&sections);
    }

    /// Export all stats as a Python dict, with per-opcode counts keyed by mnemonic.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let d = PyDict::new(py);
        let s = &self.inner;
        d.set_item("evaluations", s.evaluations)?;
        d.set_item("undefined", s.undefined())?;
        d.set_item("zero_set", s.zero_set)?;
        d.set_item("sign_set", s.sign_set)?;
        d.set_item("carry_set", s.carry_set)?;
        d.set_item("overflow_set", s.overflow_set)?;

        let per_op = PyDict::new(py);
        for op in AluOp::all() {
            per_op.set_item(op.to_string(), s.count(op))?;
        }
        d.set_item("per_opcode", per_op)?;
        Ok(d)
    }

    fn __repr__(&self) -> String {
        format!(
            "Stats(evaluations={}, undefined={})",
            self.inner.evaluations,
            self.inner.undefined()
        )
    }
}
