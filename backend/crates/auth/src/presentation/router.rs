//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::strategy::{CredentialStrategy, Registrar};
use crate::infra::upstream::UpstreamIdentity;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by the upstream identity source
pub fn auth_router(identity: UpstreamIdentity, config: AuthConfig) -> Router {
    auth_router_generic(identity, config)
}

/// Create a generic Auth router for any identity source implementation
pub fn auth_router_generic<S>(strategy: S, config: AuthConfig) -> Router
where
    S: CredentialStrategy + Registrar + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        strategy: Arc::new(strategy),
        config: Arc::new(config),
    };

    Router::new()
        .route("/sign-in", post(handlers::sign_in::<S>))
        .route("/sign-up", post(handlers::sign_up::<S>))
        .route("/sign-out", post(handlers::sign_out::<S>))
        .with_state(state)
}
