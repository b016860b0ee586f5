//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sign in request (JSON body)
///
/// Both fields default to empty so that a missing field is reported as
/// invalid credentials rather than a malformed body.
#[derive(Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Sign up response
#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub name: Value,
    pub email: Value,
    pub id: Value,
}
