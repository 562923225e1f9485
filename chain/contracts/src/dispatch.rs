//! Uniform call dispatch
//!
//! Models the contract's entry surface as a closed variant: every known
//! operation plus the unrecognized-call fallback. The host decodes an
//! incoming call into a `Call` and hands it to `dispatch` together with
//! the current time and its transfer primitive.

use serde::{Deserialize, Serialize};
use types::amount::Amount;
use types::ids::Address;

use crate::errors::LedgerError;
use crate::ledger::CustodyLedger;
use crate::settlement::Settlement;

/// One decoded call against the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Call {
    DepositTimed {
        caller: Address,
        amount: Amount,
        not_before: i64,
    },
    TransferToUser {
        caller: Address,
        recipient: Address,
        amount: Amount,
    },
    Withdraw {
        caller: Address,
        amount: Amount,
    },
    DirectSend {
        caller: Address,
        recipient: Address,
        amount_sent: Amount,
    },
    ReceiveFromUser {
        caller: Address,
        amount: Amount,
    },
    BlacklistUser {
        caller: Address,
        target: Address,
    },
    ToggleEmergencyStop {
        caller: Address,
        reason: String,
    },
    EmergencyWithdraw {
        caller: Address,
    },
    /// A call matching no known operation. A non-empty payload feeds the
    /// suspicion counter; an empty payload is a plain value transfer with
    /// no data and is ignored. Either way the call succeeds.
    Unrecognized {
        caller: Address,
        payload: Vec<u8>,
    },
}

/// Route one call to its operation.
pub fn dispatch(
    ledger: &mut CustodyLedger,
    call: Call,
    current_time: i64,
    settlement: &mut dyn Settlement,
) -> Result<(), LedgerError> {
    match call {
        Call::DepositTimed {
            caller,
            amount,
            not_before,
        } => ledger.deposit_timed(&caller, amount, not_before, current_time),
        Call::TransferToUser {
            caller,
            recipient,
            amount,
        } => ledger
            .transfer_to_user(&caller, &recipient, amount, settlement)
            .map(|_| ()),
        Call::Withdraw { caller, amount } => ledger.withdraw(&caller, amount, settlement),
        Call::DirectSend {
            caller,
            recipient,
            amount_sent,
        } => ledger.transfer_via_direct_send(&caller, &recipient, amount_sent, settlement),
        Call::ReceiveFromUser { caller, amount } => {
            ledger.receive_from_user(&caller, amount).map(|_| ())
        }
        Call::BlacklistUser { caller, target } => ledger.blacklist_user(&caller, target),
        Call::ToggleEmergencyStop { caller, reason } => {
            ledger.toggle_emergency_stop(&caller, reason).map(|_| ())
        }
        Call::EmergencyWithdraw { caller } => ledger.emergency_withdraw(&caller, settlement),
        Call::Unrecognized { caller, payload } => {
            if !payload.is_empty() {
                ledger.on_unrecognized_call(&caller, &payload);
            }
            Ok(())
        }
    }
}
