//! # Folio Common
//!
//! Shared error types, logging setup, and test helpers for the Folio workspace.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

// Re-export commonly used types
pub use error::{FolioError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
