//! Application Layer - Use cases

pub mod config;
pub mod forward;

pub use config::ProxyConfig;
pub use forward::ForwardUseCase;
