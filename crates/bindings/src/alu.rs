//! ALU Python binding.
//!
//! Exposes single evaluations to Python: `alu_predict(a, b, opcode)` returns
//! an `AluOutput` object with the result and the four flags.

use alusim_core::{AluOutput, evaluate};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-exposed ALU output.
#[pyclass(name = "AluOutput", frozen, eq)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PyAluOutput {
    /// Wrapped core output.
    pub inner: AluOutput,
}

impl From<AluOutput> for PyAluOutput {
    fn from(inner: AluOutput) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyAluOutput {
    #[getter]
    fn result(&self) -> u32 {
        self.inner.result
    }
    #[getter]
    fn zero(&self) -> bool {
        self.inner.zero
    }
    #[getter]
    fn sign(&self) -> bool {
        self.inner.sign
    }
    #[getter]
    fn carry(&self) -> bool {
        self.inner.carry
    }
    #[getter]
    fn overflow(&self) -> bool {
        self.inner.overflow
    }

    /// Returns `(result, zero, sign, carry, overflow)` with flags as 0/1,
    /// the order a testbench compares its output ports in.
    fn as_tuple(&self) -> (u32, u32, u32, u32, u32) {
        let [result, zero, sign, carry, overflow] = self.inner.as_slots();
        (result, zero, sign, carry, overflow)
    }

    /// Export as a dict with boolean flags.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let d = PyDict::new(py);
        d.set_item("result", self.inner.result)?;
        d.set_item("zero", self.inner.zero)?;
        d.set_item("sign", self.inner.sign)?;
        d.set_item("carry", self.inner.carry)?;
        d.set_item("overflow", self.inner.overflow)?;
        Ok(d)
    }

    fn __repr__(&self) -> String {
        format!("AluOutput({})", self.inner)
    }
}

/// Evaluates the ALU once.
///
/// # Arguments
///
/// * `a` - First operand (0 to 2**32-1).
/// * `b` - Second operand; its low 5 bits are the shift amount for shifts.
/// * `opcode` - Opcode; only the low 4 bits are used.
#[pyfunction]
pub fn alu_predict(a: u32, b: u32, opcode: u32) -> PyAluOutput {
    evaluate(a, b, opcode).into()
}
