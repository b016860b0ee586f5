//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::config::GatewayConfig;
use platform::cookie::{CookiePolicy, SessionCookie};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie issued on sign-in and cleared on sign-out
    pub session_cookie: SessionCookie,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie: SessionCookie::new(
                platform::config::DEFAULT_SESSION_COOKIE_NAME,
                CookiePolicy::production(platform::config::DEFAULT_COOKIE_DOMAIN),
            ),
        }
    }
}

impl AuthConfig {
    /// Derive from the process-wide gateway configuration
    pub fn from_gateway(config: &GatewayConfig) -> Self {
        Self {
            session_cookie: config.session_cookie(),
        }
    }
}
