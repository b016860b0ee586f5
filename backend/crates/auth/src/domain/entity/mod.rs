//! Entity Module

pub mod credential;
pub mod session;
