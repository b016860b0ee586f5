//! Infrastructure Layer
//!
//! Upstream API implementation.

pub mod upstream;

pub use upstream::HttpUpstream;
