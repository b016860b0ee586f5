//! HTTP Upstream
//!
//! `UpstreamApi` over the shared upstream client.

use axum::http::header;
use platform::client::UpstreamClient;

use crate::domain::entities::{ProxyRequest, UpstreamReply};
use crate::domain::repository::UpstreamApi;
use crate::error::ProxyResult;

#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: UpstreamClient,
}

impl HttpUpstream {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

impl UpstreamApi for HttpUpstream {
    async fn send(&self, request: ProxyRequest) -> ProxyResult<UpstreamReply> {
        let mut builder = self.client.request(
            request.method,
            request.resource.path(),
            request.token.as_deref(),
        );
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        Ok(UpstreamReply {
            status,
            content_type,
            body,
        })
    }
}
