//! Error types for the outer surfaces of the model.
//!
//! The ALU evaluator itself is total and has no error path. Errors only
//! arise where the model meets the outside world:
//! 1. **Harness:** Malformed system-task calls and registry misuse.
//! 2. **Traces:** I/O and parse failures while reading reference traces.
//! 3. **Configuration:** Invalid JSON or out-of-range settings.
//! 4. **Opcode parsing:** Unrecognised mnemonic text.

use thiserror::Error;

/// Errors raised by the system-task adapter and its registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The task was called with the wrong number of positional arguments.
    #[error("{task} expects {expected} arguments, got {found}")]
    ArgumentCount {
        /// Name of the task being invoked.
        task: &'static str,
        /// Number of arguments the task requires.
        expected: usize,
        /// Number of arguments supplied by the caller.
        found: usize,
    },

    /// A task with this name is already registered.
    #[error("system task {0} is already registered")]
    DuplicateTask(String),

    /// No task with this name has been registered.
    #[error("unknown system task {0}")]
    UnknownTask(String),
}

/// Errors raised while reading or writing reference traces.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The underlying reader failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed as a trace record.
    #[error("malformed trace record on line {line}: {source}")]
    Parse {
        /// 1-based line number in the trace file.
        line: usize,
        /// The JSON error reported for the line.
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be serialized or written.
    #[error("failed to write trace record: {0}")]
    Write(#[source] serde_json::Error),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its accepted range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Error returned when text is neither an opcode mnemonic nor a number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognised ALU opcode {0:?}")]
pub struct ParseOpError(pub String);
