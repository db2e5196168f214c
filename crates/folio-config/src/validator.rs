//! Runtime validation of loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use tracing_subscriber::EnvFilter;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting every problem at once.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let problems = Self::problems(config);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(problems))
        }
    }

    /// Lists the problems found in a configuration.
    pub fn problems(config: &Config) -> Vec<String> {
        let mut problems = Vec::new();

        let locale = &config.i18n.default_locale;
        if locale.as_str().is_empty() {
            problems.push("i18n.default_locale cannot be empty".to_string());
        } else if !locale.is_well_formed() {
            problems.push(format!(
                "i18n.default_locale '{locale}' is not a valid language identifier"
            ));
        }

        if config.i18n.locales_dir.as_os_str().is_empty() {
            problems.push("i18n.locales_dir cannot be empty".to_string());
        }

        if config.logging.level.trim().is_empty() {
            problems.push("logging.level cannot be empty".to_string());
        } else if let Err(e) = EnvFilter::try_new(&config.logging.level) {
            problems.push(format!(
                "logging.level '{}' is not a valid filter: {e}",
                config.logging.level
            ));
        }

        if let Some(file) = &config.logging.file {
            if file.as_os_str().is_empty() {
                problems.push("logging.file cannot be empty if specified".to_string());
            }
        }

        problems
    }
}
