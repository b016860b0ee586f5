//! Sign Up Use Case
//!
//! Forwards a registration to the identity source.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::strategy::Registrar;
use crate::error::{AuthError, AuthResult};

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    /// `name` from the submitted payload (null when absent)
    pub name: Value,
    /// `email` from the submitted payload (null when absent)
    pub email: Value,
    /// Identifier assigned by the upstream (`data` field of its response)
    pub id: Value,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: Registrar,
{
    registrar: Arc<R>,
}

impl<R> SignUpUseCase<R>
where
    R: Registrar,
{
    pub fn new(registrar: Arc<R>) -> Self {
        Self { registrar }
    }

    pub async fn execute(&self, payload: Value) -> AuthResult<SignUpOutput> {
        let Some(fields) = payload.as_object() else {
            return Err(AuthError::InvalidRequest(
                "Sign-up payload must be a JSON object".to_string(),
            ));
        };

        let name = fields.get("name").cloned().unwrap_or(Value::Null);
        let email = fields.get("email").cloned().unwrap_or(Value::Null);

        let response = self.registrar.register(&payload).await?;

        let id = response
            .get("data")
            .filter(|id| !id.is_null())
            .cloned()
            .ok_or_else(|| {
                AuthError::UpstreamFailure("Sign-up response did not include an id".to_string())
            })?;

        tracing::info!(id = %id, "User signed up");

        Ok(SignUpOutput { name, email, id })
    }
}
