//! Configuration loading utilities

use crate::schema::Config;
use crate::validator::ConfigValidator;
use folio_common::{FolioError, LogFormat, Result as FolioResult};
use folio_i18n::{LocaleId, UnknownLocalePolicy};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG_PATH";

/// Files looked for in the working directory, in order
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["folio.toml", "folio.yaml", "folio.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// File extension is neither TOML nor YAML
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParseError { var: String, message: String },

    /// Configuration validation error
    #[error("Configuration validation failed: {}", .0.join("; "))]
    ValidationError(Vec<String>),
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::config_with_source("failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML or YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        let mut config = Self::parse(path, &content)?;

        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;

        info!("Configuration loaded from {:?}", path);
        Ok(config)
    }

    /// Parse configuration text, choosing the format from the file extension
    pub fn parse(path: &Path, content: &str) -> Result<Config, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(content)?),
            _ => Err(ConfigError::UnsupportedFormat(
                path.to_string_lossy().to_string(),
            )),
        }
    }

    /// Load configuration from environment variables and files
    pub fn load() -> FolioResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_from_file(config_path);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
        {
            return Self::load_from_file(path);
        }

        // No config file found, use defaults with env overrides
        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FolioResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides from any variable source
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("FOLIO_DEFAULT_LOCALE") {
            config.i18n.default_locale = LocaleId::new(locale);
        }

        if let Some(dir) = lookup("FOLIO_LOCALES_DIR") {
            config.i18n.locales_dir = PathBuf::from(dir);
        }

        if let Some(policy) = lookup("FOLIO_UNKNOWN_LOCALE") {
            config.i18n.unknown_locale =
                policy
                    .parse::<UnknownLocalePolicy>()
                    .map_err(|message| ConfigError::EnvParseError {
                        var: "FOLIO_UNKNOWN_LOCALE".to_string(),
                        message,
                    })?;
        }

        if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("FOLIO_LOG_FORMAT") {
            config.logging.format =
                format
                    .parse::<LogFormat>()
                    .map_err(|e| ConfigError::EnvParseError {
                        var: "FOLIO_LOG_FORMAT".to_string(),
                        message: e.to_string(),
                    })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_toml() {
        let config = ConfigLoader::parse(
            Path::new("folio.toml"),
            "[i18n]\ndefault_locale = \"fr\"\nunknown_locale = \"reject\"\n",
        )
        .unwrap();
        assert_eq!(config.i18n.default_locale.as_str(), "fr");
        assert_eq!(config.i18n.unknown_locale, UnknownLocalePolicy::Reject);
        assert_eq!(config.i18n.locales_dir, PathBuf::from("locales"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_yaml() {
        let config = ConfigLoader::parse(
            Path::new("folio.yml"),
            "logging:\n  level: debug\n  format: json\n",
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.i18n.default_locale.as_str(), "en");
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let result = ConfigLoader::parse(Path::new("folio.toml"), "[i18n]\nlanguage = \"fr\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParseError(_))));
    }

    #[test]
    fn test_parse_unsupported_format() {
        let result = ConfigLoader::parse(Path::new("folio.ini"), "");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_overrides() {
        let env = vars(&[
            ("FOLIO_DEFAULT_LOCALE", "fr"),
            ("FOLIO_LOCALES_DIR", "/srv/site/locales"),
            ("FOLIO_UNKNOWN_LOCALE", "reject"),
            ("FOLIO_LOG_LEVEL", "folio_i18n=trace"),
            ("FOLIO_LOG_FORMAT", "compact"),
        ]);
        let mut config = Config::default();
        ConfigLoader::apply_overrides(&mut config, |var| env.get(var).cloned()).unwrap();

        assert_eq!(config.i18n.default_locale.as_str(), "fr");
        assert_eq!(config.i18n.locales_dir, PathBuf::from("/srv/site/locales"));
        assert_eq!(config.i18n.unknown_locale, UnknownLocalePolicy::Reject);
        assert_eq!(config.logging.level, "folio_i18n=trace");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_bad_policy_override() {
        let env = vars(&[("FOLIO_UNKNOWN_LOCALE", "ignore")]);
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(&mut config, |var| env.get(var).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::EnvParseError { ref var, .. } if var == "FOLIO_UNKNOWN_LOCALE"));
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let mut config = Config::default();
        ConfigLoader::apply_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config, Config::default());
    }
}
