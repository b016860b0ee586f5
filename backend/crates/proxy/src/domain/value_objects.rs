//! Domain Value Objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier, kept in the JSON form the client sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Text(id) => f.write_str(id),
            ProductId::Number(id) => write!(f, "{}", id),
        }
    }
}

/// Protected upstream resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    Invoices,
}

impl Resource {
    /// Upstream path, identical to the path the client calls
    pub const fn path(&self) -> &'static str {
        match self {
            Resource::Products => "/api/products",
            Resource::Invoices => "/api/invoices",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
