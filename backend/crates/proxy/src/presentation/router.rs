//! Proxy Router

use crate::application::config::ProxyConfig;
use crate::domain::repository::UpstreamApi;
use crate::infra::upstream::HttpUpstream;
use crate::presentation::handlers::{self, ProxyAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the Proxy router over the upstream API
pub fn proxy_router(upstream: HttpUpstream, config: ProxyConfig) -> Router {
    proxy_router_generic(upstream, config)
}

/// Create a generic Proxy router for any upstream implementation
pub fn proxy_router_generic<U>(upstream: U, config: ProxyConfig) -> Router
where
    U: UpstreamApi + Clone + Send + Sync + 'static,
{
    let state = ProxyAppState {
        upstream: Arc::new(upstream),
        config: Arc::new(config),
    };

    Router::new()
        .route("/products", get(handlers::list_products::<U>))
        .route(
            "/invoices",
            get(handlers::list_invoices::<U>).post(handlers::create_invoice::<U>),
        )
        .with_state(state)
}
