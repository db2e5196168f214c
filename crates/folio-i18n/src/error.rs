//! Error types for internationalization operations
//!
//! Missing translations are never errors; these only cover setup problems
//! (bad resources, bad locale identifiers, rejected locale switches).

use folio_common::FolioError;
use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Locale is not present in the dictionary and the policy rejects it
    #[error("Unknown locale '{locale}' (available: {available})")]
    UnknownLocale { locale: String, available: String },

    /// Failed to read a resource file or directory
    #[error("Failed to load resource: {path}")]
    ResourceLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a resource file
    #[error("Failed to parse resource {path}: {message}")]
    ResourceParse { path: String, message: String },

    /// Two resource files define the same locale
    #[error("Locale '{locale}' is defined more than once in {dir}")]
    DuplicateLocale { locale: String, dir: String },

    /// Dictionary data does not have the locale -> tree shape
    #[error("Invalid dictionary: {0}")]
    InvalidDictionary(String),
}

impl I18nError {
    /// The locale this error is about, when there is one
    pub fn locale(&self) -> Option<&str> {
        match self {
            Self::UnknownLocale { locale, .. } | Self::DuplicateLocale { locale, .. } => {
                Some(locale.as_str())
            }
            Self::InvalidLanguageId(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

impl From<I18nError> for FolioError {
    fn from(err: I18nError) -> Self {
        let locale = err.locale().map(str::to_string);
        FolioError::localization_with_source(err.to_string(), locale, err)
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
