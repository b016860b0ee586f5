//! Sign In Use Case
//!
//! Verifies a credential against the identity source.

use std::sync::Arc;

use crate::domain::entity::{credential::Credential, session::Session};
use crate::domain::strategy::CredentialStrategy;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub enum SignInInput {
    /// `{email, password}` from a JSON body
    Json { email: String, password: String },
    /// Raw `Authorization` header value
    Authorization(String),
}

/// Sign in use case
pub struct SignInUseCase<S>
where
    S: CredentialStrategy,
{
    strategy: Arc<S>,
}

impl<S> SignInUseCase<S>
where
    S: CredentialStrategy,
{
    pub fn new(strategy: Arc<S>) -> Self {
        Self { strategy }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<Session> {
        let credential = match input {
            SignInInput::Json { email, password } => Credential::new(email, password)?,
            SignInInput::Authorization(header) => {
                Credential::from_basic_authorization(&header)?.ok_or_else(|| {
                    AuthError::InvalidRequest("Unsupported authorization scheme".to_string())
                })?
            }
        };

        let session = self.strategy.authenticate(&credential).await?;

        if session.token.is_empty() {
            return Err(AuthError::UpstreamFailure(
                "Identity source returned an empty token".to_string(),
            ));
        }

        tracing::info!(user_id = %session.user.id_label(), "User signed in");

        Ok(session)
    }
}
