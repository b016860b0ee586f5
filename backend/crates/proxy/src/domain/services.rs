//! Domain Services
//!
//! Pure transformations with no I/O.

use crate::domain::entities::{CartItem, CartPayload, InvoicePayload, SoldProduct};

impl From<CartItem> for SoldProduct {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            units_total_price: item.price,
            sold_units: item.quantity,
        }
    }
}

/// Map a cart to the invoice the upstream expects
///
/// One sold product per cart item, in cart order.
impl From<CartPayload> for InvoicePayload {
    fn from(cart: CartPayload) -> Self {
        Self {
            creation_date: cart.creation_date,
            total_price: cart.cart_total_price,
            sold_products: cart.cart_items.into_iter().map(SoldProduct::from).collect(),
        }
    }
}
