//! Application Configuration
//!
//! Configuration for the Proxy application layer.

use platform::config::GatewayConfig;
use platform::cookie::{CookiePolicy, SessionCookie};

/// Proxy application configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Cookie the session token is read from
    pub session_cookie: SessionCookie,
    /// Answer 401 locally instead of forwarding without a token
    pub require_session: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            session_cookie: SessionCookie::new(
                platform::config::DEFAULT_SESSION_COOKIE_NAME,
                CookiePolicy::production(platform::config::DEFAULT_COOKIE_DOMAIN),
            ),
            require_session: false,
        }
    }
}

impl ProxyConfig {
    /// Derive from the process-wide gateway configuration
    pub fn from_gateway(config: &GatewayConfig) -> Self {
        Self {
            session_cookie: config.session_cookie(),
            require_session: config.require_session,
        }
    }
}
