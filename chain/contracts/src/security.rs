//! Shared security primitives for the contract layer
//!
//! Provides the access-control and abuse-control state used by the custody
//! ledger: fixed ownership, the deposit blacklist, the unsolicited-contact
//! suspicion tracker, and the emergency-stop flag.

use std::collections::{HashMap, HashSet};
use types::ids::Address;

/// Unsolicited-contact count at which deposits are rejected.
pub const SUSPICION_THRESHOLD: u32 = 5;

/// Fixed single-owner access control.
///
/// The owner identity is set at construction and never changes for the
/// lifetime of the contract instance.
#[derive(Debug, Clone)]
pub struct Ownership {
    owner: Address,
}

impl Ownership {
    /// Create ownership bound to the given identity.
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    /// Check if a caller is the owner.
    pub fn is_owner(&self, caller: &Address) -> bool {
        *caller == self.owner
    }

    /// Get the owner identity.
    pub fn owner(&self) -> &Address {
        &self.owner
    }
}

/// Set of identities barred from depositing.
///
/// Mutated only through owner-gated operations. Membership is binary and
/// carries no expiry.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<Address>,
}

impl Blacklist {
    /// Create an empty blacklist.
    pub fn new() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Add an identity. Idempotent if already present.
    pub fn insert(&mut self, target: Address) {
        self.entries.insert(target);
    }

    /// Check membership.
    pub fn contains(&self, target: &Address) -> bool {
        self.entries.contains(target)
    }

    /// Number of blacklisted identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the blacklist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-identity unsolicited-contact counter.
///
/// Each unrecognized call with a non-empty payload increments the caller's
/// count. Counts only ever grow — there is no decay and no clearing path,
/// so an identity that reaches the threshold stays throttled for the
/// lifetime of the instance.
#[derive(Debug, Clone, Default)]
pub struct SuspicionTracker {
    counts: HashMap<Address, u32>,
}

impl SuspicionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Record one unsolicited contact. Returns the updated count.
    pub fn record_contact(&mut self, caller: &Address) -> u32 {
        let count = self.counts.entry(caller.clone()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Current count for an identity.
    pub fn count(&self, caller: &Address) -> u32 {
        self.counts.get(caller).copied().unwrap_or(0)
    }

    /// Check whether an identity's deposits are throttled.
    pub fn is_throttled(&self, caller: &Address) -> bool {
        self.count(caller) >= SUSPICION_THRESHOLD
    }
}

/// Emergency-stop flag.
///
/// Toggled symmetrically in either direction; enables only the full-drain
/// recovery path. Normal operations are not gated by this flag.
#[derive(Debug, Clone, Default)]
pub struct EmergencyStop {
    stopped: bool,
}

impl EmergencyStop {
    /// Create in the normal (not stopped) state.
    pub fn new() -> Self {
        Self { stopped: false }
    }

    /// Flip the flag. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.stopped = !self.stopped;
        self.stopped
    }

    /// Check if currently stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
