//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! and the response stage of the error pipeline.

use super::app_error::AppError;
#[cfg(feature = "axum")]
use super::kind::ErrorKind;

/// 内部エラー時にクライアントへ返す汎用メッセージ
pub const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// reqwest conversions (feature-gated)
// ============================================================================

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::gateway_timeout("Upstream API did not respond in time").with_source(err)
        } else if err.is_connect() {
            AppError::bad_gateway("Upstream API is unreachable").with_source(err)
        } else if err.is_decode() {
            AppError::bad_gateway("Upstream API returned an unreadable response").with_source(err)
        } else if err.is_builder() {
            AppError::internal("Failed to build upstream request").with_source(err)
        } else {
            AppError::bad_gateway("Upstream API request failed").with_source(err)
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        let kind = ErrorKind::from_status(rejection.status().as_u16());
        AppError::new(kind, rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        use super::pipeline::ErrorReport;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match self.payload() {
            Some(payload) => payload.clone(),
            None => {
                // 内部エラーの詳細はクライアントに返さない
                let detail = if self.kind() == ErrorKind::InternalServerError {
                    GENERIC_INTERNAL_MESSAGE
                } else {
                    self.message()
                };

                // RFC 7807 Problem Details for HTTP APIs
                serde_json::json!({
                    "type": format!("https://httpstatuses.io/{}", self.status_code()),
                    "title": self.kind().as_str(),
                    "status": self.status_code(),
                    "detail": detail,
                    "action": self.action(),
                })
            }
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(ErrorReport::from(&self));
        response
    }
}
