//! Upstream Identity Source
//!
//! Credential verification and registration delegated to the upstream API
//! (`/api/auth/sign-in`, `/api/auth/sign-up`).

use platform::client::{UpstreamClient, error_payload};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::domain::entity::{credential::Credential, session::Session};
use crate::domain::strategy::{CredentialStrategy, Registrar};
use crate::error::{AuthError, AuthResult};

pub const SIGN_IN_PATH: &str = "/api/auth/sign-in";
pub const SIGN_UP_PATH: &str = "/api/auth/sign-up";

/// Identity source backed by the upstream API
#[derive(Debug, Clone)]
pub struct UpstreamIdentity {
    client: UpstreamClient,
}

impl UpstreamIdentity {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

impl CredentialStrategy for UpstreamIdentity {
    async fn authenticate(&self, credential: &Credential) -> AuthResult<Session> {
        let response = self
            .client
            .request(Method::POST, SIGN_IN_PATH, None)
            .basic_auth(credential.email.as_str(), Some(credential.password.expose()))
            .send()
            .await?;

        let status = response.status();

        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), "Identity source rejected credentials");
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::UpstreamFailure(format!(
                "Sign-in endpoint responded with status {}",
                status.as_u16()
            )));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<Session>(&body).map_err(|e| {
            AuthError::UpstreamFailure(format!("Unreadable sign-in response: {}", e))
        })
    }
}

impl Registrar for UpstreamIdentity {
    async fn register(&self, payload: &Value) -> AuthResult<Value> {
        let response = self
            .client
            .request(Method::POST, SIGN_UP_PATH, None)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(AuthError::UpstreamRejected {
                status: status.as_u16(),
                body: error_payload(&body),
            });
        }

        if status == StatusCode::NO_CONTENT || body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| {
            AuthError::UpstreamFailure(format!("Unreadable sign-up response: {}", e))
        })
    }
}
