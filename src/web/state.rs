//! Shared application state for the page handlers
//!
//! Everything here is constructed once at startup and immutable afterwards.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::auth::CredentialPair;
use crate::domain::page::PageRegistry;

/// State handed to every page handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// The accepted login credential pair
    pub credentials: Arc<CredentialPair>,
    /// Parsed page templates
    pub pages: Arc<PageRegistry>,
    /// Verbose error pages when true
    pub debug: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            credentials: Arc::new(CredentialPair::new(
                config.auth.username.clone(),
                config.auth.password.clone(),
            )),
            pages: Arc::new(PageRegistry::embedded()),
            debug: config.server.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::new(&AppConfig::default());

        assert!(state
            .credentials
            .check("admin", "1234")
            .is_authenticated());
        assert!(state.pages.get("login.html").is_some());
        assert!(state.debug);
    }
}
