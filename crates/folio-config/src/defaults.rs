//! Default values for every configuration section.

use crate::schema::{Config, I18nConfig, LogConfig};
use folio_common::LogFormat;
use folio_i18n::{LocaleId, UnknownLocalePolicy};
use std::path::PathBuf;

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Directory searched for locale files when none is configured
pub const DEFAULT_LOCALES_DIR: &str = "locales";

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: LocaleId::new(DEFAULT_LOCALE),
            locales_dir: PathBuf::from(DEFAULT_LOCALES_DIR),
            unknown_locale: UnknownLocalePolicy::Degrade,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
            include_targets: true,
        }
    }
}
