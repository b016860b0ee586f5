//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials missing, empty, or rejected by the identity source
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request the gateway cannot interpret
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON body rejected by the extractor
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// Upstream answered with an error to be passed on to the client
    #[error("Upstream rejected the request with status {status}")]
    UpstreamRejected {
        status: u16,
        body: serde_json::Value,
    },

    /// Upstream answered, but not with something usable
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    /// Upstream could not be reached or did not answer in time
    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::unauthorized("Invalid credentials")
                .with_action("Check your email and password and try again"),
            AuthError::InvalidRequest(message) => AppError::bad_request(message),
            AuthError::InvalidBody(rejection) => AppError::from(rejection),
            AuthError::UpstreamRejected { status, body } => AppError::relayed(status, body),
            AuthError::UpstreamFailure(message) => AppError::bad_gateway(message),
            AuthError::Transport(e) => AppError::from(e),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
