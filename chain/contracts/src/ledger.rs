//! Custody Ledger — pooled funds, abuse controls, and the transaction journal
//!
//! Implements the custody state machine:
//! - Timed deposits guarded by blacklist and suspicion checks
//! - Owner-gated disbursement and withdrawal
//! - Pass-through relay that never takes custody
//! - Emergency-stop flag enabling the full-drain recovery path
//! - Append-only journal of successful timed deposits

use types::amount::Amount;
use types::ids::Address;
use types::transaction::TransactionRecord;

use crate::errors::LedgerError;
use crate::events::{EmergencyStopToggled, LedgerEvent, ReceiveUser, Transfer};
use crate::security::{Blacklist, EmergencyStop, Ownership, SuspicionTracker};
use crate::settlement::Settlement;

/// Core contract managing pooled custody for one owner.
///
/// The entire contract state lives in this one instance. Each operation
/// runs to completion atomically: every precondition is checked before the
/// first state change, so a failing operation commits nothing.
///
/// Timed deposits check, in this order:
/// 1. Blacklist membership
/// 2. Suspicion throttle
/// 3. Timing precondition
///
/// The ordering is observable through the returned error kind and must not
/// be rearranged.
#[derive(Debug)]
pub struct CustodyLedger {
    /// Fixed administrative owner
    ownership: Ownership,
    /// Total custodied funds
    balance: Amount,
    /// Identities barred from depositing
    blacklist: Blacklist,
    /// Unsolicited-contact counts
    suspicion: SuspicionTracker,
    /// Emergency-stop flag
    emergency: EmergencyStop,
    /// Append-only journal of successful timed deposits
    history: Vec<TransactionRecord>,
    /// Emitted notifications (append-only)
    events: Vec<LedgerEvent>,
}

impl CustodyLedger {
    /// Create a new ledger owned by the given identity.
    pub fn new(owner: Address) -> Self {
        Self {
            ownership: Ownership::new(owner),
            balance: Amount::ZERO,
            blacklist: Blacklist::new(),
            suspicion: SuspicionTracker::new(),
            emergency: EmergencyStop::new(),
            history: Vec::new(),
            events: Vec::new(),
        }
    }

    // ───────────────────────── Deposits ─────────────────────────

    /// Accept funds from `caller` once `current_time` has reached
    /// `not_before`.
    ///
    /// Preconditions, first failing one wins: caller not blacklisted,
    /// caller under the suspicion threshold, timing satisfied. On success
    /// the balance grows and one journal record is appended. Zero amounts
    /// are permitted and recorded.
    pub fn deposit_timed(
        &mut self,
        caller: &Address,
        amount: Amount,
        not_before: i64,
        current_time: i64,
    ) -> Result<(), LedgerError> {
        if self.blacklist.contains(caller) {
            return Err(LedgerError::Blacklisted);
        }
        if self.suspicion.is_throttled(caller) {
            return Err(LedgerError::SuspiciousActivity);
        }
        if current_time < not_before {
            return Err(LedgerError::TooEarly { not_before });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.history
            .push(TransactionRecord::new(caller.clone(), amount, current_time));
        Ok(())
    }

    /// Accept funds from `caller`, immediately and fully attributed to the
    /// owner, without the timed-deposit guards.
    ///
    /// Emits `ReceiveUser(sender, owner, amount)`. The journal is not
    /// touched: it records timed deposits only.
    pub fn receive_from_user(
        &mut self,
        caller: &Address,
        amount: Amount,
    ) -> Result<LedgerEvent, LedgerError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let event = LedgerEvent::ReceiveUser(ReceiveUser {
            sender: caller.clone(),
            owner: self.ownership.owner().clone(),
            amount,
        });
        self.events.push(event.clone());
        Ok(event)
    }

    // ───────────────────────── Disbursement ─────────────────────────

    /// Owner-initiated payout from custody to an arbitrary recipient.
    ///
    /// Not gated by the blacklist or the emergency stop: this is an
    /// owner-directed disbursement, not a user deposit path. Emits
    /// `Transfer(recipient, amount)`.
    pub fn transfer_to_user(
        &mut self,
        caller: &Address,
        recipient: &Address,
        amount: Amount,
        settlement: &mut dyn Settlement,
    ) -> Result<LedgerEvent, LedgerError> {
        if !self.ownership.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        settlement.deliver(recipient, amount)?;
        // Cannot underflow: amount <= balance checked above.
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;

        let event = LedgerEvent::Transfer(Transfer {
            recipient: recipient.clone(),
            amount,
        });
        self.events.push(event.clone());
        Ok(event)
    }

    /// Owner withdraws custodied funds to themself.
    pub fn withdraw(
        &mut self,
        caller: &Address,
        amount: Amount,
        settlement: &mut dyn Settlement,
    ) -> Result<(), LedgerError> {
        if !self.ownership.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        let owner = self.ownership.owner().clone();
        settlement.deliver(&owner, amount)?;
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Pass-through relay: forwards the attached amount straight to the
    /// recipient. Custody balance is never touched; any caller may relay
    /// to any recipient. A failed delivery aborts the whole operation and
    /// the attached funds stay with the caller.
    pub fn transfer_via_direct_send(
        &self,
        _caller: &Address,
        recipient: &Address,
        amount_sent: Amount,
        settlement: &mut dyn Settlement,
    ) -> Result<(), LedgerError> {
        settlement.deliver(recipient, amount_sent)?;
        Ok(())
    }

    // ───────────────────────── Abuse Controls ─────────────────────────

    /// Record an unrecognized call carrying a non-empty payload.
    ///
    /// Increments the caller's suspicion count and changes nothing else.
    /// Never fails: probing attempts learn nothing from differentiated
    /// failures. The payload content is deliberately not inspected or
    /// stored.
    pub fn on_unrecognized_call(&mut self, caller: &Address, _payload: &[u8]) {
        self.suspicion.record_contact(caller);
    }

    /// Bar an identity from depositing. Owner-only; idempotent.
    pub fn blacklist_user(
        &mut self,
        caller: &Address,
        target: Address,
    ) -> Result<(), LedgerError> {
        if !self.ownership.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }
        self.blacklist.insert(target);
        Ok(())
    }

    // ───────────────────────── Emergency Path ─────────────────────────

    /// Flip the emergency-stop flag, either direction. Owner-only.
    ///
    /// The reason is recorded for audit solely via the emitted
    /// `EmergencyStopToggled` notification. The flag gates nothing except
    /// `emergency_withdraw`.
    pub fn toggle_emergency_stop(
        &mut self,
        caller: &Address,
        reason: impl Into<String>,
    ) -> Result<LedgerEvent, LedgerError> {
        if !self.ownership.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }

        let stopped = self.emergency.toggle();
        let event = LedgerEvent::EmergencyStopToggled(EmergencyStopToggled {
            stopped,
            reason: reason.into(),
        });
        self.events.push(event.clone());
        Ok(event)
    }

    /// Drain the entire balance to the owner. Owner-only; enabled only
    /// while stopped. Succeeds trivially on a zero balance. The journal
    /// is untouched: this is a withdrawal, not a deposit.
    pub fn emergency_withdraw(
        &mut self,
        caller: &Address,
        settlement: &mut dyn Settlement,
    ) -> Result<(), LedgerError> {
        if !self.ownership.is_owner(caller) {
            return Err(LedgerError::Unauthorized);
        }
        if !self.emergency.is_stopped() {
            return Err(LedgerError::NotInEmergency);
        }

        let owner = self.ownership.owner().clone();
        settlement.deliver(&owner, self.balance)?;
        self.balance = Amount::ZERO;
        Ok(())
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Get the owner identity.
    pub fn owner(&self) -> &Address {
        self.ownership.owner()
    }

    /// Get the total custodied balance.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Check whether an identity is blacklisted.
    pub fn is_blacklisted(&self, identity: &Address) -> bool {
        self.blacklist.contains(identity)
    }

    /// Current unsolicited-contact count for an identity.
    pub fn suspicion_count(&self, identity: &Address) -> u32 {
        self.suspicion.count(identity)
    }

    /// Check whether the emergency stop is engaged.
    pub fn is_stopped(&self) -> bool {
        self.emergency.is_stopped()
    }

    /// Get the full ordered transaction journal.
    pub fn get_transaction_history(&self) -> &[TransactionRecord] {
        &self.history
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted notifications.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Drain all notifications (consume and clear).
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}
