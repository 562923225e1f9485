//! Transaction journal records
//!
//! Each successful timed deposit appends one immutable record to the
//! contract's journal. The journal is append-only: records are never
//! rewritten or truncated by the contract layer.

use crate::amount::Amount;
use crate::ids::{Address, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single journal entry for a successful timed deposit.
///
/// Immutable once appended. The timestamp is the host-supplied current
/// time at the moment the deposit committed, in unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub record_id: RecordId,
    pub depositor: Address,
    pub amount: Amount,
    pub timestamp: i64,
}

impl TransactionRecord {
    /// Create a new record for a committed deposit
    pub fn new(depositor: Address, amount: Amount, timestamp: i64) -> Self {
        Self {
            record_id: RecordId::new(),
            depositor,
            amount,
            timestamp,
        }
    }

    /// Journal timestamp as a UTC datetime
    ///
    /// Returns `None` if the stored timestamp is out of chrono's
    /// representable range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}
