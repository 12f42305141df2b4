//! System-task registry.
//!
//! A host simulator walks a list of startup routines when it loads a
//! plugin; each routine registers the tasks it provides. `SysTfRegistry`
//! is that table on the Rust side: tasks are registered by name and then
//! invoked by name with the call's argument handles.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use super::systf::register_alu_predict_systf;
use super::traits::ValueHandle;
use crate::common::error::HarnessError;
use crate::config::GeneralConfig;

/// Whether a registered callable is a task (no return value) or a function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SysTfKind {
    /// Called as a statement; results are written to argument handles.
    Task,
    /// Called in an expression context.
    Function,
}

/// Call routine of a system task.
pub type CallTf = fn(&mut [&mut dyn ValueHandle]) -> Result<(), HarnessError>;

/// Registration record for one system task.
#[derive(Clone, Copy, Debug)]
pub struct SysTfData {
    /// Name including the leading `$`.
    pub name: &'static str,
    /// Task or function.
    pub kind: SysTfKind,
    /// Routine run on every call.
    pub calltf: CallTf,
}

/// A startup routine run once at load time.
pub type StartupRoutine = fn(&mut SysTfRegistry) -> Result<(), HarnessError>;

/// Startup routines a host runs when loading this model.
pub const STARTUP_ROUTINES: &[StartupRoutine] = &[register_alu_predict_systf];

/// Name-indexed table of registered system tasks.
#[derive(Debug, Default)]
pub struct SysTfRegistry {
    tasks: BTreeMap<&'static str, SysTfData>,
    log_calls: bool,
}

impl SysTfRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry and runs every routine in [`STARTUP_ROUTINES`].
    ///
    /// # Errors
    ///
    /// Propagates the first registration failure.
    pub fn with_startup_routines() -> Result<Self, HarnessError> {
        let mut registry = Self::new();
        for routine in STARTUP_ROUTINES {
            routine(&mut registry)?;
        }
        Ok(registry)
    }

    /// Creates a startup-populated registry that logs calls when
    /// `general.log_evaluations` is set.
    ///
    /// # Errors
    ///
    /// Propagates the first registration failure.
    pub fn for_config(config: &GeneralConfig) -> Result<Self, HarnessError> {
        Ok(Self::with_startup_routines()?.with_call_logging(config.log_evaluations))
    }

    /// Enables a `debug` log line per successful invocation listing every
    /// argument value after the call, inputs and outputs alike.
    #[must_use]
    pub const fn with_call_logging(mut self, enabled: bool) -> Self {
        self.log_calls = enabled;
        self
    }

    /// Registers a task.
    ///
    /// # Errors
    ///
    /// [`HarnessError::DuplicateTask`] if a task with the same name exists.
    pub fn register(&mut self, data: SysTfData) -> Result<(), HarnessError> {
        match self.tasks.entry(data.name) {
            Entry::Occupied(_) => Err(HarnessError::DuplicateTask(data.name.to_string())),
            Entry::Vacant(slot) => {
                debug!(name = data.name, kind = ?data.kind, "registered system task");
                let _ = slot.insert(data);
                Ok(())
            }
        }
    }

    /// Looks up a task by name.
    pub fn lookup(&self, name: &str) -> Option<&SysTfData> {
        self.tasks.get(name)
    }

    /// Names of all registered tasks, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.keys().copied()
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Invokes the task `name` with the call's argument handles.
    ///
    /// # Errors
    ///
    /// [`HarnessError::UnknownTask`] if `name` is not registered, or whatever
    /// the task's call routine reports.
    pub fn invoke(&self, name: &str, args: &mut [&mut dyn ValueHandle]) -> Result<(), HarnessError> {
        let data = self
            .lookup(name)
            .ok_or_else(|| HarnessError::UnknownTask(name.to_string()))?;
        (data.calltf)(args)?;
        if self.log_calls {
            let values: Vec<u32> = args.iter().map(|handle| handle.get_value()).collect();
            debug!(name, ?values, "system task call");
        }
        Ok(())
    }
}
