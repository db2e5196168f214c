//! # Folio Site
//!
//! Content tooling for the Folio portfolio site: the navigation and section
//! labels the pages render, resolved through the shared translator, and the
//! `folio` command line front end.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod content;
pub mod error;
pub mod site;

pub use cli::{Args, Command};
pub use error::{SiteError, SiteResult};
pub use site::Site;
