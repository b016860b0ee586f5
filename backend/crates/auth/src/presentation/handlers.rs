//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpUseCase};
use crate::domain::strategy::{CredentialStrategy, Registrar};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{SignInRequest, SignUpResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: CredentialStrategy + Registrar + Clone + Send + Sync + 'static,
{
    pub strategy: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /auth/sign-in
///
/// A `Basic` Authorization header takes precedence over the JSON body.
pub async fn sign_in<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> AuthResult<impl IntoResponse>
where
    S: CredentialStrategy + Registrar + Clone + Send + Sync + 'static,
{
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| {
            value
                .get(..6)
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("basic "))
        });

    let input = match authorization {
        Some(value) => SignInInput::Authorization(value.to_string()),
        // No credentials at all is a failed sign-in, not a malformed request
        None if body.iter().all(u8::is_ascii_whitespace) => SignInInput::Json {
            email: String::new(),
            password: String::new(),
        },
        None => {
            let Json(req) = Json::<SignInRequest>::from_bytes(&body)?;
            SignInInput::Json {
                email: req.email,
                password: req.password,
            }
        }
    };

    let session = SignInUseCase::new(state.strategy.clone())
        .execute(input)
        .await?;

    let mut response_headers = HeaderMap::new();
    state
        .config
        .session_cookie
        .issue(&mut response_headers, session.token.as_str())
        .map_err(|e| AuthError::UpstreamFailure(e.to_string()))?;

    Ok((StatusCode::OK, response_headers, Json(session.user)))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /auth/sign-up
pub async fn sign_up<S>(
    State(state): State<AuthAppState<S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    S: CredentialStrategy + Registrar + Clone + Send + Sync + 'static,
{
    let Json(payload) = payload?;

    let output = SignUpUseCase::new(state.strategy.clone())
        .execute(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            name: output.name,
            email: output.email,
            id: output.id,
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /auth/sign-out
pub async fn sign_out<S>(State(state): State<AuthAppState<S>>) -> impl IntoResponse
where
    S: CredentialStrategy + Registrar + Clone + Send + Sync + 'static,
{
    let mut headers = HeaderMap::new();
    state.config.session_cookie.clear(&mut headers);

    (StatusCode::NO_CONTENT, headers)
}
