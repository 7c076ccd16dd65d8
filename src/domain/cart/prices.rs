//! Prices

use std::fmt;

use serde::{Deserialize, Serialize};

/// A price in minor units (pence/cents). Single currency, implied by the
/// store locale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self { value: 0 };

    /// Creates a new price from minor units.
    #[must_use]
    pub fn from_minor(value: u64) -> Self {
        Price { value }
    }

    /// The amount in minor units.
    #[must_use]
    pub fn minor(self) -> u64 {
        self.value
    }

    /// Adds two prices, saturating at the numeric bound so summation stays
    /// a total function.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Price {
            value: self.value.saturating_add(other.value),
        }
    }
}

impl fmt::Display for Price {
    /// Renders the amount with two fraction digits, e.g. `12.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.value / 100, self.value % 100)
    }
}
