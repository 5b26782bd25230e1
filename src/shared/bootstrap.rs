//! Process-wide application context, initialized lazily exactly once.
//!
//! `get_or_init()` is idempotent: the first caller loads configuration,
//! every later caller gets the same instance.

use crate::shared::config::AppConfig;
use std::sync::OnceLock;
use tracing::warn;

static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Shared process state. Configuration is loaded once at first access.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    /// Get the process-wide context, initializing it on first use.
    pub fn get_or_init() -> &'static AppContext {
        APP_CONTEXT.get_or_init(|| {
            let config = AppConfig::load().unwrap_or_else(|e| {
                warn!(error = %e, "config load failed, using defaults");
                AppConfig::default()
            });
            AppContext { config }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_init_returns_same_instance() {
        let a = AppContext::get_or_init();
        let b = AppContext::get_or_init();
        assert!(std::ptr::eq(a, b));
    }
}
