//! Forward Use Case
//!
//! Sends a client request upstream with the session token as bearer
//! credential and classifies the reply.

use std::sync::Arc;

use axum::http::Method;
use platform::client::error_payload;

use crate::application::config::ProxyConfig;
use crate::domain::entities::{CartPayload, InvoicePayload, ProxyRequest, UpstreamReply};
use crate::domain::repository::UpstreamApi;
use crate::domain::value_objects::Resource;
use crate::error::{ProxyError, ProxyResult};

/// Forward use case
pub struct ForwardUseCase<U>
where
    U: UpstreamApi,
{
    upstream: Arc<U>,
    config: Arc<ProxyConfig>,
}

impl<U> ForwardUseCase<U>
where
    U: UpstreamApi,
{
    pub fn new(upstream: Arc<U>, config: Arc<ProxyConfig>) -> Self {
        Self { upstream, config }
    }

    /// GET /api/products
    pub async fn list_products(&self, token: Option<String>) -> ProxyResult<UpstreamReply> {
        self.forward(Method::GET, Resource::Products, token, None)
            .await
    }

    /// GET /api/invoices
    pub async fn list_invoices(&self, token: Option<String>) -> ProxyResult<UpstreamReply> {
        self.forward(Method::GET, Resource::Invoices, token, None)
            .await
    }

    /// POST /api/invoices
    pub async fn create_invoice(
        &self,
        token: Option<String>,
        cart: CartPayload,
    ) -> ProxyResult<UpstreamReply> {
        let invoice = InvoicePayload::from(cart);
        let body = serde_json::to_value(&invoice)
            .map_err(|e| ProxyError::Internal(format!("Failed to encode invoice: {}", e)))?;

        self.forward(Method::POST, Resource::Invoices, token, Some(body))
            .await
    }

    async fn forward(
        &self,
        method: Method,
        resource: Resource,
        token: Option<String>,
        body: Option<serde_json::Value>,
    ) -> ProxyResult<UpstreamReply> {
        if token.is_none() && self.config.require_session {
            return Err(ProxyError::MissingSession);
        }

        tracing::debug!(
            method = %method,
            resource = %resource,
            authorized = token.is_some(),
            "Forwarding request upstream"
        );

        let reply = self
            .upstream
            .send(ProxyRequest {
                method,
                resource,
                token,
                body,
            })
            .await?;

        if !reply.is_success() {
            return Err(ProxyError::Upstream {
                status: reply.status,
                body: error_payload(&reply.body),
            });
        }

        Ok(reply)
    }
}
