//! Contract notifications
//!
//! Notifications are immutable records emitted by contract operations and
//! consumed by external observers (test harnesses, monitoring). No
//! acknowledgment is required or awaited. Emission order matches the
//! order in which operations complete.

use serde::{Deserialize, Serialize};
use types::amount::Amount;
use types::ids::Address;

/// Custody disbursed to a recipient by the owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub recipient: Address,
    pub amount: Amount,
}

/// Funds received from a user and attributed to the owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveUser {
    pub sender: Address,
    pub owner: Address,
    pub amount: Amount,
}

/// Emergency stop flipped by the owner
///
/// The reason string exists only in this notification; the contract keeps
/// no other record of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyStopToggled {
    pub stopped: bool,
    pub reason: String,
}

/// Enum wrapper for all contract notifications, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    Transfer(Transfer),
    ReceiveUser(ReceiveUser),
    EmergencyStopToggled(EmergencyStopToggled),
}
