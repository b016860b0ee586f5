//! HTTP Handlers

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::ProxyConfig;
use crate::application::forward::ForwardUseCase;
use crate::domain::entities::{CartPayload, UpstreamReply};
use crate::domain::repository::UpstreamApi;
use crate::error::{ProxyError, ProxyResult};

/// Shared state for proxy handlers
#[derive(Clone)]
pub struct ProxyAppState<U>
where
    U: UpstreamApi + Clone + Send + Sync + 'static,
{
    pub upstream: Arc<U>,
    pub config: Arc<ProxyConfig>,
}

impl<U> ProxyAppState<U>
where
    U: UpstreamApi + Clone + Send + Sync + 'static,
{
    fn use_case(&self) -> ForwardUseCase<U> {
        ForwardUseCase::new(self.upstream.clone(), self.config.clone())
    }

    fn token(&self, headers: &HeaderMap) -> Option<String> {
        self.config.session_cookie.read(headers)
    }
}

/// GET /api/products
pub async fn list_products<U>(
    State(state): State<ProxyAppState<U>>,
    headers: HeaderMap,
) -> ProxyResult<Response>
where
    U: UpstreamApi + Clone + Send + Sync + 'static,
{
    let reply = state.use_case().list_products(state.token(&headers)).await?;
    Ok(relay(reply))
}

/// GET /api/invoices
pub async fn list_invoices<U>(
    State(state): State<ProxyAppState<U>>,
    headers: HeaderMap,
) -> ProxyResult<Response>
where
    U: UpstreamApi + Clone + Send + Sync + 'static,
{
    let reply = state.use_case().list_invoices(state.token(&headers)).await?;
    Ok(relay(reply))
}

/// POST /api/invoices
pub async fn create_invoice<U>(
    State(state): State<ProxyAppState<U>>,
    headers: HeaderMap,
    cart: Result<Json<CartPayload>, JsonRejection>,
) -> ProxyResult<Response>
where
    U: UpstreamApi + Clone + Send + Sync + 'static,
{
    let token = state.token(&headers);

    // Strict mode answers 401 before looking at the body
    if token.is_none() && state.config.require_session {
        return Err(ProxyError::MissingSession);
    }

    let Json(cart) = cart?;
    let reply = state.use_case().create_invoice(token, cart).await?;
    Ok(relay(reply))
}

/// Upstream status, content type and body, unchanged
fn relay(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);

    let mut headers = HeaderMap::new();
    if let Some(content_type) = reply.content_type {
        headers.insert(header::CONTENT_TYPE, content_type);
    }

    // Raw body: no content type is invented when upstream sent none
    (status, headers, Body::from(reply.body)).into_response()
}
