//! Tests for configuration loading and validation

use std::fs;
use std::path::PathBuf;

use polls::config::{ConfigError, PollsConfig};
use polls::storage::Backend;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS AND PARSING
// =============================================================================

#[test]
fn test_config_default() {
    let config = PollsConfig::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.workers, 4);
    assert_eq!(config.server.address(), "127.0.0.1:8000");
    assert_eq!(config.storage.backend().unwrap(), Backend::Sqlite);
    assert!(config.storage.database.ends_with("polls/polls.db"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_partial_config_keeps_defaults() {
    let config = PollsConfig::parse("[server]\nport = 9090\n").unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.workers, 4);
}

#[test]
fn test_parse_full_config() {
    let config = PollsConfig::parse(
        r#"
[server]
host = "0.0.0.0"
port = 8080
workers = 8

[storage]
backend = "memory"
database = "/tmp/polls-test.db"
"#,
    )
    .unwrap();

    assert_eq!(config.server.address(), "0.0.0.0:8080");
    assert_eq!(config.server.workers, 8);
    assert_eq!(config.storage.backend().unwrap(), Backend::Memory);
    assert_eq!(config.storage.database, PathBuf::from("/tmp/polls-test.db"));
}

#[test]
fn test_parse_rejects_wrong_types() {
    assert!(PollsConfig::parse("[server]\nport = \"eighty\"\n").is_err());
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_validate_rejects_zero_workers() {
    let mut config = PollsConfig::default();
    config.server.workers = 0;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "server.workers", .. }));
}

#[test]
fn test_validate_rejects_empty_host() {
    let mut config = PollsConfig::default();
    config.server.host = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_unknown_backend() {
    let mut config = PollsConfig::default();
    config.storage.backend = "postgres".to_string();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("storage.backend"));
}

#[test]
fn test_backend_names() {
    assert_eq!("sqlite".parse::<Backend>().unwrap(), Backend::Sqlite);
    assert_eq!("FILE".parse::<Backend>().unwrap(), Backend::Sqlite);
    assert_eq!("mem".parse::<Backend>().unwrap(), Backend::Memory);
    assert_eq!(Backend::Memory.to_string(), "memory");
}

// =============================================================================
// FILES
// =============================================================================

#[test]
fn test_load_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = PollsConfig::load(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config.server.port, 8000);
}

#[test]
fn test_load_malformed_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server\nport = 1").unwrap();

    let err = PollsConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
