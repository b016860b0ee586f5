//! Credential Entity
//!
//! Email and password submitted at sign-in, either in a JSON body or in a
//! `Basic` Authorization header.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::value_object::{email::Email, password::Password};
use crate::error::{AuthError, AuthResult};

#[derive(Debug)]
pub struct Credential {
    pub email: Email,
    pub password: Password,
}

impl Credential {
    /// Build a credential, rejecting empty fields as invalid credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> AuthResult<Self> {
        Ok(Self {
            email: Email::new(email)?,
            password: Password::new(password)?,
        })
    }

    /// Parse an `Authorization: Basic <base64(email:password)>` header value
    ///
    /// Returns `Ok(None)` when the header uses another scheme. A `Basic`
    /// value that does not decode to `email:password` is a bad request.
    pub fn from_basic_authorization(header: &str) -> AuthResult<Option<Self>> {
        let Some((scheme, encoded)) = header.trim().split_once(' ') else {
            return Ok(None);
        };
        if !scheme.eq_ignore_ascii_case("basic") {
            return Ok(None);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::InvalidRequest("Malformed Basic credentials".to_string()))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|_| AuthError::InvalidRequest("Malformed Basic credentials".to_string()))?;

        // Passwords may contain ':'; the email may not
        let (email, password) = decoded
            .split_once(':')
            .ok_or_else(|| AuthError::InvalidRequest("Malformed Basic credentials".to_string()))?;

        Self::new(email, password).map(Some)
    }
}
