//! Test utilities shared across the Folio workspace.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// The two-locale navigation dictionary used across the workspace tests, as JSON.
pub fn navigation_fixture() -> serde_json::Value {
    serde_json::json!({
        "en": { "nav": { "home": "Home" } },
        "fr": { "nav": { "home": "Accueil" } }
    })
}
