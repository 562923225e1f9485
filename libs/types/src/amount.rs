//! Integer currency amounts
//!
//! All fund amounts are non-negative integers denominated in the smallest
//! unit of the native settlement currency. Arithmetic is checked; overflow
//! never wraps silently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount of the native settlement currency, in the
/// smallest unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a count of smallest-currency units
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// Get the raw unit count
    pub const fn units(&self) -> u128 {
        self.0
    }

    /// Check whether this amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction. Returns `None` if `other` exceeds `self`.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Self(units)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units as u128)
    }
}
