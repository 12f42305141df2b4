//! # Configuration Tests
//!
//! Defaults, JSON overrides, and validation.

use alusim_core::common::ConfigError;
use alusim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.log_evaluations);
    assert_eq!(config.batch.workers, 0);
    assert_eq!(config.batch.chunk_size, 4096);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_batch_section() {
    let config = Config::from_json(r#"{"batch": {"chunk_size": 128}}"#).unwrap();
    assert_eq!(config.batch.chunk_size, 128);
    assert_eq!(config.batch.workers, 0);
    assert!(!config.general.log_evaluations);
}

#[test]
fn test_json_deserialization_with_logging() {
    let json = r#"{
        "general": { "log_evaluations": true },
        "batch": { "workers": 8, "chunk_size": 1 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.general.log_evaluations);
    assert_eq!(config.batch.workers, 8);
    assert_eq!(config.batch.chunk_size, 1);
}

#[test]
fn test_zero_chunk_size_rejected() {
    let err = Config::from_json(r#"{"batch": {"chunk_size": 0}}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "batch.chunk_size",
            ..
        }
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let err = Config::from_json(r#"{"batch": {"workers": "many"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid config:"));
}
