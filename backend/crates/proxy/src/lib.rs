//! Proxy (Protected Resource Forwarding) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Payloads, resources, upstream trait
//! - `application/` - Use cases
//! - `infra/` - Upstream HTTP implementation
//! - `presentation/` - HTTP handlers
//!
//! ## Forwarding Model
//! - The session cookie is translated into `Authorization: Bearer <token>`
//! - Requests without a session are forwarded unauthenticated unless
//!   `require_session` is set
//! - Upstream status, content type and body are relayed unchanged; error
//!   bodies are always JSON

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProxyConfig;
pub use error::{ProxyError, ProxyResult};
pub use infra::upstream::HttpUpstream;
pub use presentation::router::{proxy_router, proxy_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
}
