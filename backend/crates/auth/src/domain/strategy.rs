//! Strategy Traits
//!
//! Interfaces to the identity source. Implementation is in infrastructure layer.

use serde_json::Value;

use crate::domain::entity::{credential::Credential, session::Session};
use crate::error::AuthResult;

/// Credential verification strategy
#[trait_variant::make(CredentialStrategy: Send)]
pub trait LocalCredentialStrategy {
    /// Verify a credential and return the resulting session
    ///
    /// Rejected credentials are `AuthError::InvalidCredentials`; anything the
    /// identity source cannot answer is `AuthError::UpstreamFailure` or
    /// `AuthError::Transport`.
    async fn authenticate(&self, credential: &Credential) -> AuthResult<Session>;
}

/// Account registration
#[trait_variant::make(Registrar: Send)]
pub trait LocalRegistrar {
    /// Register an account and return the upstream response body
    async fn register(&self, payload: &Value) -> AuthResult<Value>;
}
