//! Translation lookup for the Folio portfolio site
//!
//! This crate resolves dotted keys such as `navigation.links.contact`
//! against a nested, per-locale string dictionary. It includes:
//!
//! - Locale trees with statically checked leaf/branch nodes
//! - An immutable dictionary with a per-locale coverage report
//! - Loading of JSON, TOML and YAML locale files
//! - A [`Translator`] holding the active locale, with key or explicit fallback
//!
//! # Example
//!
//! ```rust
//! use folio_i18n::{Dictionary, Translator};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dictionary = Dictionary::from_json(serde_json::json!({
//!     "en": { "nav": { "home": "Home" } },
//!     "fr": { "nav": { "home": "Accueil" } }
//! }))?;
//! let translator = Translator::new(dictionary, "en");
//!
//! assert_eq!(translator.resolve("nav.home", None), "Home");
//! translator.set_locale("fr")?;
//! assert_eq!(translator.resolve("nav.home", None), "Accueil");
//! assert_eq!(translator.resolve("nav.missing", Some("N/A")), "N/A");
//! assert_eq!(translator.resolve("nav.missing", None), "nav.missing");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod dictionary;
pub mod error;
pub mod loader;
pub mod locale;
pub mod translator;
pub mod tree;

pub use dictionary::{CoverageReport, Dictionary, DictionaryBuilder, LocaleCoverage};
pub use error::{I18nError, I18nResult};
pub use loader::{DictionaryLoader, ResourceFormat};
pub use locale::LocaleId;
pub use translator::{Translator, UnknownLocalePolicy};
pub use tree::{LocaleTree, KEY_SEPARATOR};
