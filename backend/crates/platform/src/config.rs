//! Gateway Configuration
//!
//! Runtime settings read from environment variables once at startup.
//! Parsing goes through an injectable lookup so tests never touch the
//! process environment.

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::cookie::{CookiePolicy, SessionCookie};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "token";
pub const DEFAULT_COOKIE_DOMAIN: &str = "fgpos.gabrielpinto.me";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Deployment environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEnv {
    Development,
    /// Any other named environment (production, staging, ...)
    Deployed(String),
}

impl RuntimeEnv {
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("development") {
            RuntimeEnv::Development
        } else {
            RuntimeEnv::Deployed(name.to_string())
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeEnv::Development)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RuntimeEnv::Development => "development",
            RuntimeEnv::Deployed(name) => name,
        }
    }
}

impl fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream API connection settings
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `https://api.example.com`
    pub base_url: Url,
    /// Whole-request timeout
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
            connect_timeout: DEFAULT_UPSTREAM_CONNECT_TIMEOUT,
        }
    }
}

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub env: RuntimeEnv,
    pub port: u16,
    pub upstream: UpstreamConfig,
    pub session_cookie_name: String,
    pub cookie_policy: CookiePolicy,
    /// Reject proxied requests without a session cookie locally
    pub require_session: bool,
}

impl GatewayConfig {
    /// Development configuration pointing at `base_url`
    pub fn development(base_url: Url) -> Self {
        Self {
            env: RuntimeEnv::Development,
            port: DEFAULT_PORT,
            upstream: UpstreamConfig::new(base_url),
            session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            cookie_policy: CookiePolicy::development(),
            require_session: false,
        }
    }

    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value lookup
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `API_URL` | required |
    /// | `APP_ENV` | `production` |
    /// | `PORT` | `3000` |
    /// | `SESSION_COOKIE_NAME` | `token` |
    /// | `SESSION_COOKIE_DOMAIN` | `fgpos.gabrielpinto.me` |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10` |
    /// | `UPSTREAM_CONNECT_TIMEOUT_SECS` | `5` |
    /// | `PROXY_REQUIRE_SESSION` | `false` |
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("API_URL").ok_or(ConfigError::Missing("API_URL"))?;
        let base_url = parse_base_url(&base_url)?;

        // Unset means deployed: hardened cookies are the safe default.
        let env = RuntimeEnv::from_name(&get("APP_ENV").unwrap_or_else(|| "production".into()));

        let port = match get("PORT") {
            Some(port) => port.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                reason: format!("'{}' is not a valid port", port),
            })?,
            None => DEFAULT_PORT,
        };

        let session_cookie_name = get("SESSION_COOKIE_NAME")
            .unwrap_or_else(|| DEFAULT_SESSION_COOKIE_NAME.to_string());
        if !session_cookie_name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            return Err(ConfigError::Invalid {
                var: "SESSION_COOKIE_NAME",
                reason: "only ASCII letters, digits, '_' and '-' are allowed".into(),
            });
        }

        let cookie_domain =
            get("SESSION_COOKIE_DOMAIN").unwrap_or_else(|| DEFAULT_COOKIE_DOMAIN.to_string());
        if cookie_domain
            .bytes()
            .any(|b| b == b';' || b == b',' || b.is_ascii_whitespace() || b.is_ascii_control())
        {
            return Err(ConfigError::Invalid {
                var: "SESSION_COOKIE_DOMAIN",
                reason: format!("'{}' is not a valid cookie domain", cookie_domain),
            });
        }

        let upstream = UpstreamConfig {
            base_url,
            timeout: parse_secs(get("UPSTREAM_TIMEOUT_SECS"), "UPSTREAM_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT),
            connect_timeout: parse_secs(
                get("UPSTREAM_CONNECT_TIMEOUT_SECS"),
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
            )?
            .unwrap_or(DEFAULT_UPSTREAM_CONNECT_TIMEOUT),
        };

        let require_session = match get("PROXY_REQUIRE_SESSION") {
            Some(value) => parse_bool(&value, "PROXY_REQUIRE_SESSION")?,
            None => false,
        };

        Ok(Self {
            cookie_policy: CookiePolicy::for_env(&env, cookie_domain),
            env,
            port,
            upstream,
            session_cookie_name,
            require_session,
        })
    }

    /// Session Cookie Manager for this configuration
    pub fn session_cookie(&self) -> SessionCookie {
        SessionCookie::new(self.session_cookie_name.clone(), self.cookie_policy.clone())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        var: "API_URL",
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            var: "API_URL",
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

fn parse_secs(raw: Option<String>, var: &'static str) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::Invalid {
            var,
            reason: format!("'{}' is not a positive number of seconds", raw),
        }),
    }
}

fn parse_bool(raw: &str, var: &'static str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            reason: format!("'{}' is not a boolean", raw),
        }),
    }
}
