//! Domain Layer - Forwarded resources and payloads
//!
//! This layer contains:
//! - Domain entities (cart, invoice, forwarded request/reply)
//! - Domain value objects (ProductId, Resource)
//! - Domain services (cart to invoice mapping)
//! - Upstream trait (interface)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
