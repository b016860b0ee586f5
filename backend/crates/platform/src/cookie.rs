//! Session Cookie Management
//!
//! The single session cookie that carries the upstream token between the
//! browser and the gateway. Security attributes come from a [`CookiePolicy`]
//! resolved once at startup from the runtime environment.

use axum::http::{HeaderMap, HeaderValue, header};
use thiserror::Error;

use crate::config::RuntimeEnv;

/// Expiry date used when clearing a cookie
const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Environment-dependent cookie security attributes
///
/// Development deployments get a plain cookie so that local testing works
/// over http on localhost. Every other deployment gets `HttpOnly`, `Secure`
/// and a `Domain` restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePolicy {
    /// Emit `HttpOnly` and `Secure`
    pub secure_cookies: bool,
    /// Emit `Domain=<domain>`
    pub domain_restricted: bool,
    /// Domain used when `domain_restricted` is set
    pub domain: String,
    pub same_site: SameSite,
    pub path: String,
}

impl CookiePolicy {
    /// Plain cookie, no domain scoping
    pub fn development() -> Self {
        Self {
            secure_cookies: false,
            domain_restricted: false,
            domain: String::new(),
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }

    /// HttpOnly + Secure cookie scoped to `domain`
    pub fn production(domain: impl Into<String>) -> Self {
        Self {
            secure_cookies: true,
            domain_restricted: true,
            domain: domain.into(),
            ..Self::development()
        }
    }

    /// Resolve the policy for a runtime environment
    pub fn for_env(env: &RuntimeEnv, domain: impl Into<String>) -> Self {
        if env.is_development() {
            Self::development()
        } else {
            Self::production(domain)
        }
    }
}

/// Token that cannot be carried in a cookie without escaping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Session token contains characters not allowed in a cookie value")]
pub struct InvalidCookieValue;

/// Session Cookie Manager
///
/// Issues, clears and reads the session cookie. Handlers hold one of these
/// in their state instead of relying on a process-wide session store.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    policy: CookiePolicy,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, policy: CookiePolicy) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> &CookiePolicy {
        &self.policy
    }

    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);
        self.push_security_attributes(&mut cookie);
        cookie.push_str(&format!("; SameSite={}", self.policy.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.policy.path));
        cookie
    }

    /// Build Set-Cookie header for deletion (expired)
    ///
    /// Name, path and domain must match the live cookie for the browser to
    /// replace it.
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!("{}=", self.name);
        self.push_security_attributes(&mut cookie);
        cookie.push_str(&format!("; SameSite={}", self.policy.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.policy.path));
        cookie.push_str("; Max-Age=0");
        cookie.push_str(&format!("; Expires={}", EPOCH_EXPIRES));
        cookie
    }

    /// Set the session cookie on a response
    ///
    /// A clearing cookie always precedes the new one, so a browser that still
    /// holds a previous session ends up with exactly one value.
    pub fn issue(&self, headers: &mut HeaderMap, token: &str) -> Result<(), InvalidCookieValue> {
        if token.is_empty() || !token.bytes().all(is_cookie_octet) {
            return Err(InvalidCookieValue);
        }

        let cookie =
            HeaderValue::from_str(&self.build_set_cookie(token)).map_err(|_| InvalidCookieValue)?;

        self.clear(headers);
        headers.append(header::SET_COOKIE, cookie);
        Ok(())
    }

    /// Remove the session cookie unconditionally
    pub fn clear(&self, headers: &mut HeaderMap) {
        // Name and domain come from configuration and are validated there.
        if let Ok(value) = HeaderValue::from_str(&self.build_delete_cookie()) {
            headers.append(header::SET_COOKIE, value);
        }
    }

    /// Read the session token from a request
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.name).filter(|token| !token.is_empty())
    }

    fn push_security_attributes(&self, cookie: &mut String) {
        if self.policy.secure_cookies {
            cookie.push_str("; HttpOnly; Secure");
        }
        if self.policy.domain_restricted {
            cookie.push_str(&format!("; Domain={}", self.policy.domain));
        }
    }
}

/// RFC 6265 `cookie-octet`
fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

/// Extract a cookie value from headers
///
/// Browsers may split cookies over several `Cookie` headers; all are searched.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}
