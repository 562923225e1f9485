//! Funds-delivery seam toward the host environment
//!
//! The contract never moves external funds itself; it asks the host
//! ledger's transfer primitive to deliver an amount to an identity.
//! Delivery is all-or-nothing: it either fully succeeds or fully fails,
//! and on failure the invoking operation commits nothing.

use std::collections::{HashMap, HashSet};
use types::amount::Amount;
use types::ids::Address;

use crate::errors::DeliveryError;

/// Host funds-transfer primitive.
pub trait Settlement {
    /// Deliver `amount` to `recipient`.
    ///
    /// Atomic: on error, no funds moved.
    fn deliver(&mut self, recipient: &Address, amount: Amount) -> Result<(), DeliveryError>;
}

/// In-memory settlement backend.
///
/// Tracks external balances per identity and can simulate recipients that
/// refuse funds. Used by tests and simulations; production deployments
/// bind the `Settlement` trait to the host ledger's native transfer
/// primitive instead.
#[derive(Debug, Clone, Default)]
pub struct MemorySettlement {
    balances: HashMap<Address, Amount>,
    rejecting: HashSet<Address>,
}

impl MemorySettlement {
    /// Create an empty settlement backend.
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            rejecting: HashSet::new(),
        }
    }

    /// External balance delivered to an identity so far.
    pub fn balance_of(&self, identity: &Address) -> Amount {
        self.balances.get(identity).copied().unwrap_or(Amount::ZERO)
    }

    /// Mark an identity as refusing all deliveries.
    pub fn reject_deliveries_to(&mut self, identity: Address) {
        self.rejecting.insert(identity);
    }
}

impl Settlement for MemorySettlement {
    fn deliver(&mut self, recipient: &Address, amount: Amount) -> Result<(), DeliveryError> {
        if self.rejecting.contains(recipient) {
            return Err(DeliveryError::Rejected {
                recipient: recipient.to_string(),
            });
        }

        let current = self.balances.entry(recipient.clone()).or_insert(Amount::ZERO);
        // A recipient whose balance cannot accept the funds counts as a refusal.
        *current = current
            .checked_add(amount)
            .ok_or_else(|| DeliveryError::Rejected {
                recipient: recipient.to_string(),
            })?;
        Ok(())
    }
}
