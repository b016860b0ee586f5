//! Domain Layer
//!
//! Contains entities, value objects, and the credential strategy traits.

pub mod entity;
pub mod strategy;
pub mod value_object;

// Re-exports
pub use entity::{credential::Credential, session::Session};
pub use strategy::{CredentialStrategy, Registrar};
