//! Utility functions exposed to Python.
//!
//! Provides the version string, opcode mnemonics, and logging setup for
//! the `alusim` module.

use alusim_core::AluOp;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the package version string (e.g., for scripting or diagnostics).
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the mnemonic of an opcode (low 4 bits used), e.g. `"sra"` or
/// `"undef(0xa)"`.
#[pyfunction]
pub fn mnemonic(opcode: u32) -> String {
    AluOp::from_bits(opcode).to_string()
}

/// Installs a stderr log subscriber.
///
/// # Arguments
///
/// * `filter` - An `EnvFilter` directive such as `"alusim_core=debug"`.
///   Defaults to `RUST_LOG`, or `warn` when that is unset.
///
/// # Returns
///
/// `True` if the subscriber was installed, `False` if one was already set.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> bool {
    let filter = filter.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
