//! # Folio Config
//!
//! Configuration loading and validation for Folio.
//!
//! Settings come from a TOML or YAML file (or built-in defaults) with
//! `FOLIO_*` environment variable overrides applied on top.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::{DEFAULT_LOCALE, DEFAULT_LOCALES_DIR};
pub use loader::{ConfigError, ConfigLoader, CONFIG_PATH_VAR};
pub use schema::{Config, I18nConfig, LogConfig};
pub use validator::ConfigValidator;
