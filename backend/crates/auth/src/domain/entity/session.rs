//! Session Entity
//!
//! Result of a successful credential verification: the upstream token plus
//! the user profile the upstream returned alongside it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_object::session_token::SessionToken;

/// User profile as returned by the upstream identity API
///
/// Kept as the raw JSON object so the sign-in response echoes it unchanged,
/// explicit nulls and unknown keys included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    /// Upstream `id` field, if present
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// `id` rendered for log fields; `-` when absent or null
    pub fn id_label(&self) -> String {
        match self.id() {
            Some(Value::String(id)) => id.clone(),
            None | Some(Value::Null) => "-".to_string(),
            Some(other) => other.to_string(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Authenticated session
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub token: SessionToken,
    pub user: UserProfile,
}
