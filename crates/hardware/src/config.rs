//! Configuration for the ALU model's runtime surfaces.
//!
//! The evaluator itself has nothing to configure. Configuration covers:
//! 1. **General:** Per-evaluation logging for the task adapter and trace checks.
//! 2. **Batch:** Worker count and chunk size for bulk evaluation.
//!
//! Configuration is supplied as JSON (from the Python API or the CLI's
//! `--config` file); every key is optional. Use `Config::default()` when
//! there is nothing to override.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Worker threads for batch evaluation (0 = available parallelism).
    pub const BATCH_WORKERS: usize = 0;

    /// Evaluations handed to a worker at a time.
    pub const BATCH_CHUNK_SIZE: usize = 4096;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use alusim_core::config::Config;
///
/// let json = r#"{
///     "general": { "log_evaluations": true },
///     "batch": { "workers": 4 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.log_evaluations);
/// assert_eq!(config.batch.workers, 4);
/// assert_eq!(config.batch.chunk_size, 4096);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Batch evaluation settings
    pub batch: BatchConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or unknown value types,
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.chunk_size == 0 {
            return Err(ConfigError::Invalid {
                field: "batch.chunk_size",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log every task invocation and trace-record check at `debug` level.
    #[serde(default)]
    pub log_evaluations: bool,
}

/// Batch evaluation settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BatchConfig {
    /// Worker threads (0 = use available parallelism)
    #[serde(default = "BatchConfig::default_workers")]
    pub workers: usize,

    /// Evaluations per work unit
    #[serde(default = "BatchConfig::default_chunk_size")]
    pub chunk_size: usize,
}

impl BatchConfig {
    const fn default_workers() -> usize {
        defaults::BATCH_WORKERS
    }

    const fn default_chunk_size() -> usize {
        defaults::BATCH_CHUNK_SIZE
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: defaults::BATCH_WORKERS,
            chunk_size: defaults::BATCH_CHUNK_SIZE,
        }
    }
}
