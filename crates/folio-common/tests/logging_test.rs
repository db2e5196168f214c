//! Integration test for the logging setup.
//!
//! Lives in its own test binary because it installs the global subscriber.

use folio_common::{init_logging, FolioError, LogFormat, LoggingConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_json_logging_to_file() {
    // RUST_LOG would override the configured level.
    std::env::remove_var("RUST_LOG");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("folio.log");

    init_logging(LoggingConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        file_path: Some(log_path.to_string_lossy().to_string()),
        include_targets: true,
    })
    .expect("logging should initialize");

    tracing::info!(locale = "fr", "active locale changed");
    tracing::debug!("filtered out at info level");

    let contents = fs::read_to_string(&log_path).unwrap();
    let line = contents
        .lines()
        .find(|line| line.contains("active locale changed"))
        .expect("info line should be written");
    let record: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(record["level"], "INFO");
    assert_eq!(record["fields"]["locale"], "fr");
    assert!(!contents.contains("filtered out"));

    // A second subscriber cannot be installed.
    let second = init_logging(LoggingConfig::default());
    assert!(matches!(second, Err(FolioError::Generic { .. })));
}
