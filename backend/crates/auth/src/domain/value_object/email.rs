//! Email Value Object
//!
//! The login identifier presented at sign-in. Only emptiness is checked
//! locally; format rules belong to the upstream identity source.

use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Email address as presented by the client (trimmed, non-empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> AuthResult<Self> {
        let email = email.into().trim().to_string();

        if email.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
