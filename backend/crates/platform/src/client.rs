//! Upstream API client
//!
//! A shared `reqwest::Client` (one connection pool per process) bound to the
//! upstream base URL, with explicit timeouts.

use reqwest::{Client, Method, RequestBuilder, Url};

use crate::config::UpstreamConfig;

/// HTTP client for the upstream API
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Build a client with the configured timeouts
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Absolute URL for an upstream path
    ///
    /// The path is appended to the base URL, so a base with a path prefix
    /// (`https://host/v1`) keeps it.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Start a request to `path`, bearer-authorized when a token is given
    pub fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.endpoint(path));
        match bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Body of a failed upstream response, ready to relay
///
/// JSON bodies are returned as-is; anything else is wrapped as
/// `{"detail": "<text>"}` so clients always receive JSON.
pub fn error_payload(body: &[u8]) -> serde_json::Value {
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => serde_json::json!({ "detail": String::from_utf8_lossy(body).trim() }),
    }
}
