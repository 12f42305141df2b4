//! System-task Python binding.
//!
//! Lets a Python testbench drive `$alu_predict_vpi` exactly as a Verilog
//! simulator would: with eight handle objects. Any object with a `value`
//! attribute works (cocotb signal handles, or a plain Python object);
//! inputs are read with `int(handle.value)` and outputs assigned to
//! `handle.value`.

use std::cell::RefCell;
use std::sync::OnceLock;

use alusim_core::config::GeneralConfig;
use alusim_core::vpi::{SysTfRegistry, ValueHandle};
use pyo3::prelude::*;
use pyo3::types::{PyInt, PyTuple};

use crate::conversion::{harness_err, optional_config};

/// Adapts a Python object with a `value` attribute to `ValueHandle`.
///
/// `ValueHandle` calls cannot fail, so the first Python error raised by a
/// read or write is held here and reported once the task returns.
#[derive(Debug)]
struct PyValueHandle<'py> {
    obj: Bound<'py, PyAny>,
    error: RefCell<Option<PyErr>>,
}

impl<'py> PyValueHandle<'py> {
    const fn new(obj: Bound<'py, PyAny>) -> Self {
        Self {
            obj,
            error: RefCell::new(None),
        }
    }

    fn read(&self) -> PyResult<u32> {
        let value = self.obj.getattr("value")?;
        let as_int = self.obj.py().get_type::<PyInt>().call1((value,))?;
        // Integer-format reads hand back a C int; wider values are truncated.
        Ok(as_int.extract::<i64>()? as u32)
    }

    fn record(&self, err: PyErr) {
        let mut slot = self.error.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
    }

    fn take_error(&self) -> Option<PyErr> {
        self.error.borrow_mut().take()
    }
}

impl ValueHandle for PyValueHandle<'_> {
    fn get_value(&self) -> u32 {
        self.read().unwrap_or_else(|err| {
            self.record(err);
            0
        })
    }

    fn put_value(&mut self, value: u32) {
        if let Err(err) = self.obj.setattr("value", value) {
            self.record(err);
        }
    }
}

fn registry(log_calls: bool) -> PyResult<&'static SysTfRegistry> {
    static REGISTRIES: [OnceLock<SysTfRegistry>; 2] = [OnceLock::new(), OnceLock::new()];
    let slot = &REGISTRIES[usize::from(log_calls)];
    if let Some(registry) = slot.get() {
        return Ok(registry);
    }
    let general = GeneralConfig {
        log_evaluations: log_calls,
    };
    let registry = SysTfRegistry::for_config(&general).map_err(harness_err)?;
    Ok(slot.get_or_init(|| registry))
}

/// Calls a registered system task with handle objects.
///
/// # Arguments
///
/// * `name` - Task name including the `$`, e.g. `"$alu_predict_vpi"`.
/// * `*args` - One handle object per task argument.
/// * `config` - Optional config dict; `{"general": {"log_evaluations": True}}`
///   logs each call and its argument values at `debug`.
///
/// # Errors
///
/// `RuntimeError` for an unknown task or wrong argument count; any error
/// raised while reading or writing a handle is re-raised.
#[pyfunction]
#[pyo3(signature = (name, *args, config=None))]
pub fn call_systf(
    py: Python<'_>,
    name: &str,
    args: &Bound<'_, PyTuple>,
    config: Option<&Bound<'_, PyAny>>,
) -> PyResult<()> {
    let config = optional_config(py, config)?;
    let mut handles: Vec<PyValueHandle<'_>> = args.iter().map(PyValueHandle::new).collect();
    {
        let mut refs: Vec<&mut dyn ValueHandle> = handles
            .iter_mut()
            .map(|h| h as &mut dyn ValueHandle)
            .collect();
        registry(config.general.log_evaluations)?.invoke(name, &mut refs).map_err(harness_err)?;
    }
    match handles.iter().find_map(PyValueHandle::take_error) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Names of all registered system tasks.
#[pyfunction]
pub fn systf_names() -> PyResult<Vec<&'static str>> {
    Ok(registry(false)?.names().collect())
}
