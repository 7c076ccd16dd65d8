//! Access tokens
//!
//! Proof-of-purchase tokens rendered as QR codes after a confirmed order.
//! A token is either the item's canonical `fileUrl` or, when the catalog has
//! none, the synthesized identifier `book:<id>`. Derivation is deterministic
//! and total; nothing here touches the network.

use std::fmt;

use crate::domain::cart::{Cart, CartItem};

/// A string that lets the purchaser retrieve purchased content: a direct URL
/// or a synthesized identifier.
///
/// Derived on demand at display time, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Derive the token for a purchased item.
    ///
    /// The `book:<id>` fallback format is fixed: tokens already issued to
    /// purchasers encode it, so it must be reproduced byte for byte.
    #[must_use]
    pub fn for_item(item: &CartItem) -> Self {
        match item.file_url.as_deref() {
            Some(url) if !url.is_empty() => AccessToken(url.to_string()),
            _ => AccessToken(format!("book:{}", item.id)),
        }
    }

    /// The token as a string slice, the exact value to encode in a QR code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchased item paired with its access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    /// The purchased item.
    pub item: CartItem,

    /// The scannable token granting access to it.
    pub token: AccessToken,
}

/// Derive one proof per purchased item, in cart order.
#[must_use]
pub fn proofs(cart: &Cart) -> Vec<Proof> {
    cart.items()
        .iter()
        .map(|item| Proof {
            token: AccessToken::for_item(item),
            item: item.clone(),
        })
        .collect()
}
