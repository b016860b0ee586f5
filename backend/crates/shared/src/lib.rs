//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of gateway vocabulary:
//! - The unified error type and result alias
//! - The error taxonomy mapped to HTTP status codes
//! - The two-stage error pipeline (response mapping + logging)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all gateway crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    #[cfg(feature = "axum")]
    pub mod pipeline;
}
