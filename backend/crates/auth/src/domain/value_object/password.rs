//! Password Value Object
//!
//! Clear text password that lives only for the duration of a sign-in
//! request. Zeroized on drop, redacted in debug output, not `Clone`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{AuthError, AuthResult};

#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    /// Passwords are taken verbatim; only emptiness is rejected.
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Self(raw))
    }

    /// Clear text, for the outbound verification call only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
