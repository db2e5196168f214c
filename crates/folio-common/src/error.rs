//! Error types and utilities for Folio

use thiserror::Error;

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FolioError {
    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error with source
    pub fn localization_with_source(
        msg: impl Into<String>,
        locale: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Returns the locale attached to a localization error, if any
    pub fn locale(&self) -> Option<&str> {
        match self {
            Self::Localization { locale, .. } => locale.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_error_creation() {
        let io_err = io::Error::new(io::ErrorKind::Other, "busy");
        let error = FolioError::with_source("test message", io_err);
        assert_eq!(error.to_string(), "test message");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_error_with_source() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "folio.toml");
        let error = FolioError::config_with_source("cannot open config", io_err);

        assert_eq!(error.to_string(), "Configuration error: cannot open config");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_localization_locale_accessor() {
        let io_err = io::Error::new(io::ErrorKind::InvalidData, "de.json");
        let error = FolioError::localization_with_source("unknown locale", Some("xx".to_string()), io_err);
        assert_eq!(error.locale(), Some("xx"));
        assert_eq!(error.to_string(), "Localization error: unknown locale");
        assert_eq!(FolioError::validation_field("bad", "logging.format").locale(), None);
    }

    #[test]
    fn test_validation_field() {
        let error = FolioError::validation_field("must not be empty", "i18n.locales_dir");
        match error {
            FolioError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("i18n.locales_dir"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_io_conversion() {
        let error: FolioError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(error, FolioError::Io(_)));
    }
}
