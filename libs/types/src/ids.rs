//! Unique identifier types for wallet entities
//!
//! Callers, recipients, and the owner are all identified by `Address`, an
//! opaque identity authenticated by the host environment. Journal records
//! use `RecordId`, a UUID v7 for time-sortable ordering enabling efficient
//! chronological queries and replay capabilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a caller, recipient, or the contract owner.
///
/// The host environment authenticates every operation's caller and hands
/// the contract an unforgeable identity. The contract treats it as opaque:
/// it is only ever compared, stored, and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create a new Address from an identity string
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// Get the identity string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a transaction journal record
///
/// Uses UUID v7 for time-based sorting. Records can be efficiently
/// queried in chronological order using the embedded timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new RecordId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let addr = Address::new("wallet_owner");
        assert_eq!(addr.as_str(), "wallet_owner");
        assert_eq!(addr.to_string(), "wallet_owner");
    }

    #[test]
    fn test_address_equality() {
        let a = Address::new("addr1");
        let b = Address::from("addr1");
        let c = Address::new("addr2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_address_serialization() {
        let addr = Address::new("addr1");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"addr1\"");

        let deserialized: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, deserialized);
    }

    #[test]
    fn test_record_id_creation() {
        let id1 = RecordId::new();
        let id2 = RecordId::new();
        assert_ne!(id1, id2, "RecordIds should be unique");
    }

    #[test]
    fn test_record_id_serialization() {
        let id = RecordId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
