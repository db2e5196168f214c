//! Application-wide error types using thiserror.

use folio_common::FolioError;
use folio_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// Configuration or logging setup error.
    #[error(transparent)]
    Config(#[from] FolioError),

    /// Translation setup error.
    #[error("Localization error: {0}")]
    I18n(#[from] I18nError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Some locales lack keys the site needs.
    #[error("{locales} locale(s) are missing translations")]
    IncompleteTranslations { locales: usize },
}

/// Result type for the site application.
pub type SiteResult<T> = Result<T, SiteError>;
