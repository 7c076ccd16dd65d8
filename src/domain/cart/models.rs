//! Cart Models

use serde::{Deserialize, Serialize};

use super::prices::Price;

/// A catalog item selected for purchase.
///
/// Serializes in the shape the order store expects
/// (`{id, title, price, fileUrl}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Stable catalog identifier.
    pub id: String,

    /// Display title, also embedded in the confirmation notification body.
    pub title: String,

    /// Purchase price in minor units.
    pub price: Price,

    /// Canonical access URL for the purchased content, when the catalog
    /// provides one. An access token is synthesized from `id` otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Transient ordered list of items for one checkout attempt.
///
/// Duplicates are allowed: each element is an independent purchase event.
/// A cart is owned by the checkout screen's state and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Create a cart with the given items.
    pub fn with_items(items: impl Into<Vec<CartItem>>) -> Self {
        Cart {
            items: items.into(),
        }
    }

    /// Add an item to the end of the cart.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// The items in cart order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the number of items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculate the total of the cart.
    ///
    /// Pure and deterministic; an empty cart totals zero.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items
            .iter()
            .fold(Price::ZERO, |sum, item| sum.saturating_add(item.price))
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Cart { items }
    }
}
