//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Runtime configuration loaded from the environment
//! - Session cookie management (environment-dependent security attributes)
//! - The upstream API HTTP client

pub mod client;
pub mod config;
pub mod cookie;
