//! Infrastructure Layer
//!
//! Identity source implementations.

pub mod upstream;

pub use upstream::UpstreamIdentity;
