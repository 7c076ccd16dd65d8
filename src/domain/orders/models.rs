//! Order Models

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::cart::{CartItem, Price};

/// Store-assigned order identifier.
///
/// Assigned exactly once per successful commit and never reused or mutated;
/// the client never invents one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        OrderId(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId(id.to_string())
    }
}

/// New Order record submitted to the store.
///
/// Serializes as `{items, total, userId}`; the store assigns `createdAt`
/// from its own clock along with the order id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<CartItem>,
    pub total: Price,
    pub user_id: String,
}

/// Client-side record of a successful commit.
///
/// Immutable once created; the remote order is the durable copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier.
    pub order_id: OrderId,

    /// Catalog ids of the purchased items, in cart order.
    pub items: Vec<String>,

    /// Client-observed purchase time.
    pub placed_at: Timestamp,
}
