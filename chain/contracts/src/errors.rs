//! Contract-specific error types
//!
//! Error taxonomy for the custody ledger. Every precondition failure
//! aborts the whole operation with no state mutation and surfaces one of
//! these kinds to the caller; there is no silent recovery or retry inside
//! the contract layer.

use thiserror::Error;
use types::amount::Amount;

/// Custody ledger errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Unauthorized: caller is not the owner")]
    Unauthorized,

    #[error("Caller is blacklisted from depositing")]
    Blacklisted,

    #[error("Suspicious activity: unsolicited contact threshold reached")]
    SuspiciousActivity,

    #[error("Too early: deposits accepted from {not_before}")]
    TooEarly { not_before: i64 },

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Amount,
        available: Amount,
    },

    #[error("Not in emergency stop")]
    NotInEmergency,

    #[error("Delivery failed: {0}")]
    DeliveryFailed(#[from] DeliveryError),

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

/// External funds-transfer errors
///
/// Raised by the host's transfer primitive when a delivery cannot
/// complete. Delivery is all-or-nothing: on error, no funds moved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryError {
    #[error("recipient {recipient} rejected the transfer")]
    Rejected { recipient: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_early_display() {
        let err = LedgerError::TooEarly { not_before: 1_700_000_060 };
        assert!(err.to_string().contains("1700000060"));
    }

    #[test]
    fn test_insufficient_funds_display() {
        let err = LedgerError::InsufficientFunds {
            requested: Amount::new(500),
            available: Amount::new(100),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 500, available 100"
        );
    }

    #[test]
    fn test_ledger_error_from_delivery() {
        let delivery_err = DeliveryError::Rejected {
            recipient: "addr2".to_string(),
        };
        let ledger_err: LedgerError = delivery_err.into();
        assert!(matches!(ledger_err, LedgerError::DeliveryFailed(_)));
        assert!(ledger_err.to_string().contains("addr2"));
    }
}
