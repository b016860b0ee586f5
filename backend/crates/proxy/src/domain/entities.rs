//! Domain Entities
//!
//! Payloads exchanged with the client and the upstream API.

use axum::body::Bytes;
use axum::http::{HeaderValue, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::{ProductId, Resource};

/// Shopping cart as submitted by the client
///
/// Prices, quantities and the creation date are carried through in whatever
/// JSON form the client sent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPayload {
    pub cart_total_price: Value,
    pub cart_items: Vec<CartItem>,
    pub creation_date: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub price: Value,
    pub quantity: Value,
}

/// Invoice as expected by the upstream API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub creation_date: Value,
    pub total_price: Value,
    pub sold_products: Vec<SoldProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldProduct {
    pub id: ProductId,
    pub units_total_price: Value,
    pub sold_units: Value,
}

/// Request to forward upstream
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    pub method: Method,
    pub resource: Resource,
    /// Session token, sent as a bearer credential when present
    pub token: Option<String>,
    pub body: Option<Value>,
}

/// Upstream response, relayed without interpretation
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
