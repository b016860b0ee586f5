//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credentials, sessions, strategy traits
//! - `application/` - Use cases and application services
//! - `infra/` - Upstream identity source
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Sign-in with email + password (JSON body or `Basic` header)
//! - Sign-up forwarded to the upstream API
//! - Session token carried in a single cookie, cleared on sign-out
//!
//! ## Security Model
//! - The gateway never decodes the token; the upstream owns its meaning
//! - Passwords are zeroized after use and never logged
//! - The token is never echoed in a response body

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::upstream::UpstreamIdentity;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
