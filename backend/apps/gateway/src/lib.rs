//! Gateway application assembly
//!
//! Builds the full router (auth + proxy + error pipeline + HTTP layers) from
//! a [`GatewayConfig`]. The binary and the end-to-end tests share this.

use std::any::Any;

use axum::http::{HeaderName, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use auth::{AuthConfig, UpstreamIdentity, auth_router};
use kernel::error::{app_error::AppError, kind::ErrorKind, pipeline::log_errors};
use platform::client::UpstreamClient;
use platform::config::{GatewayConfig, RuntimeEnv};
use proxy::{HttpUpstream, ProxyConfig, proxy_router};

/// Default `RUST_LOG` filter
pub const DEFAULT_LOG_FILTER: &str = "gateway=info,auth=info,proxy=info,kernel=info,tower_http=info";

/// Build the application router
pub fn build_app(config: &GatewayConfig) -> Result<Router, reqwest::Error> {
    let client = UpstreamClient::new(&config.upstream)?;

    let routes = Router::new()
        .nest(
            "/auth",
            auth_router(
                UpstreamIdentity::new(client.clone()),
                AuthConfig::from_gateway(config),
            ),
        )
        .nest(
            "/api",
            proxy_router(HttpUpstream::new(client), ProxyConfig::from_gateway(config)),
        );

    Ok(with_middleware(routes, &config.env))
}

/// Wrap routes with the fallbacks, error pipeline and HTTP layers
///
/// Layer order, innermost first: panic recovery, error logging, security
/// headers (deployed environments only), request tracing.
pub fn with_middleware(routes: Router, env: &RuntimeEnv) -> Router {
    let mut app = routes
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_errors));

    if !env.is_development() {
        for (name, value) in security_headers() {
            app = app.layer(SetResponseHeaderLayer::if_not_present(name, value));
        }
    }

    app.layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::not_found("Resource not found")
}

async fn method_not_allowed() -> AppError {
    AppError::new(ErrorKind::MethodNotAllowed, "Method not allowed for this resource")
}

/// Hardening headers for deployed environments
fn security_headers() -> [(HeaderName, HeaderValue); 7] {
    [
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ),
        (
            HeaderName::from_static("x-download-options"),
            HeaderValue::from_static("noopen"),
        ),
        (
            HeaderName::from_static("x-permitted-cross-domain-policies"),
            HeaderValue::from_static("none"),
        ),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=15552000; includeSubDomains"),
        ),
    ]
}

/// Panic payload carried as the error source
#[derive(Debug, thiserror::Error)]
#[error("handler panicked: {0}")]
struct PanicError(String);

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal("Request handler panicked")
        .with_source(PanicError(message))
        .into_response()
}
