//! Simulator system-task adapter.
//!
//! This module is the boundary between the ALU model and a host simulator.
//! It provides:
//! 1. **Handles:** The [`ValueHandle`] trait and the in-memory [`Signal`].
//! 2. **Task:** `$alu_predict_vpi`, the 8-argument call contract.
//! 3. **Registry:** Name-indexed task table and the startup-routine list.

/// Name-indexed system-task table and startup routines.
pub mod registry;

/// In-memory fixed-width signal.
pub mod signal;

/// The `$alu_predict_vpi` task.
pub mod systf;

/// Value-handle trait.
pub mod traits;

pub use registry::{CallTf, STARTUP_ROUTINES, SysTfData, SysTfKind, SysTfRegistry};
pub use signal::Signal;
pub use systf::{alu_predict_calltf, register_alu_predict_systf};
pub use traits::ValueHandle;
