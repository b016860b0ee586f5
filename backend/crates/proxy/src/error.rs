//! Proxy Error Types
//!
//! This module provides proxy-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Proxy-specific result type alias
pub type ProxyResult<T> = Result<T, ProxyError>;

/// Proxy-specific error variants
#[derive(Debug, Error)]
pub enum ProxyError {
    /// No session cookie while sessions are required
    #[error("Session cookie missing")]
    MissingSession,

    /// Request body rejected by the extractor
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// Upstream answered with a non-2xx status
    #[error("Upstream responded with status {status}")]
    Upstream {
        status: u16,
        body: serde_json::Value,
    },

    /// Upstream could not be reached or did not answer in time
    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProxyError> for AppError {
    fn from(err: ProxyError) -> Self {
        match err {
            ProxyError::MissingSession => AppError::unauthorized("Authentication required")
                .with_action("Sign in and retry the request"),
            ProxyError::InvalidBody(rejection) => AppError::from(rejection),
            ProxyError::Upstream { status, body } => AppError::relayed(status, body),
            ProxyError::Transport(e) => AppError::from(e),
            ProxyError::Internal(message) => AppError::internal(message),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_missing_session_is_unauthorized() {
        let app = AppError::from(ProxyError::MissingSession);
        assert_eq!(app.kind(), ErrorKind::Unauthorized);
        assert_eq!(app.status_code(), 401);
        assert!(!app.is_relayed());
    }

    #[test]
    fn test_upstream_error_keeps_status_and_body() {
        let err = ProxyError::Upstream {
            status: 422,
            body: json!({ "errors": ["quantity"] }),
        };
        let app = AppError::from(err);
        assert_eq!(app.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(app.status_code(), 422);
        assert_eq!(app.payload(), Some(&json!({ "errors": ["quantity"] })));
    }

    #[test]
    fn test_unusual_upstream_status_is_kept() {
        let app = AppError::from(ProxyError::Upstream {
            status: 418,
            body: json!({}),
        });
        assert_eq!(app.status_code(), 418);
    }
}
