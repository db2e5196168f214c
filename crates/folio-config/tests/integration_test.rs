//! Integration tests for folio-config crate.
//!
//! These tests load real files from disk through the public loader API.

use folio_common::FolioError;
use folio_config::{ConfigError, ConfigLoader};
use folio_i18n::UnknownLocalePolicy;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(
        &path,
        r#"
[i18n]
default_locale = "fr"
locales_dir = "content/locales"
unknown_locale = "reject"

[logging]
level = "debug"
format = "compact"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_config(&path).unwrap();
    assert_eq!(config.i18n.default_locale.as_str(), "fr");
    assert_eq!(config.i18n.locales_dir, PathBuf::from("content/locales"));
    assert_eq!(config.i18n.unknown_locale, UnknownLocalePolicy::Reject);

    let logging = config.logging.to_logging_config();
    assert_eq!(logging.level, "debug");
    assert!(logging.file_path.is_none());
}

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("folio.yaml");
    fs::write(&path, "i18n:\n  default_locale: en\nlogging:\n  file: /tmp/folio.log\n").unwrap();

    let config = ConfigLoader::load_config(&path).unwrap();
    assert_eq!(config.i18n.unknown_locale, UnknownLocalePolicy::Degrade);
    assert_eq!(
        config.logging.to_logging_config().file_path.as_deref(),
        Some("/tmp/folio.log")
    );
}

#[test]
fn test_invalid_file_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[i18n]\ndefault_locale = \"not a locale\"\n").unwrap();

    let err = ConfigLoader::load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));

    let folio: FolioError = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(folio, FolioError::Config { .. }));
    assert_eq!(folio.to_string(), "Configuration error: failed to load configuration");
    let source = folio.source().map(ToString::to_string).unwrap_or_default();
    assert!(source.starts_with("Configuration validation failed"), "{source}");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::load_config(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError { .. }));
}
