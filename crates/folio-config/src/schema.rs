//! Application configuration structures

use folio_common::{LogFormat, LoggingConfig};
use folio_i18n::{LocaleId, UnknownLocalePolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Translation settings
    pub i18n: I18nConfig,

    /// Logging configuration
    pub logging: LogConfig,
}

/// Translation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    /// Locale active when the site starts
    pub default_locale: LocaleId,

    /// Directory holding one `<locale>.json|toml|yaml` file per locale
    pub locales_dir: PathBuf,

    /// How a switch to a locale without translations is handled
    pub unknown_locale: UnknownLocalePolicy,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `folio_i18n=trace`
    pub level: String,

    /// Line format
    pub format: LogFormat,

    /// Append logs to this file instead of stderr
    pub file: Option<PathBuf>,

    /// Include the module target in each line
    pub include_targets: bool,
}

impl LogConfig {
    /// Convert into the settings the logging initializer expects
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self
                .file
                .as_ref()
                .map(|path| path.to_string_lossy().to_string()),
            include_targets: self.include_targets,
        }
    }
}
