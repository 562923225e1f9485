//! Smart Contract Logic for the Custodial Wallet
//!
//! This crate implements the contract layer for the custodial wallet,
//! covering pooled custody accounting, owner-gated disbursement, abuse
//! controls, and the append-only transaction journal.
//!
//! # Modules
//! - `events`: Contract notifications emitted by operations
//! - `errors`: Contract-specific error types
//! - `security`: Shared security primitives (ownership, blacklist, suspicion tracking, emergency stop)
//! - `settlement`: Funds-delivery seam toward the host environment
//! - `ledger`: The custody state machine (balance, journal, operations)
//! - `dispatch`: Uniform call dispatch including the unrecognized-call fallback
//!
//! # Version
//! v0.1.0 — Initial implementation

pub mod errors;
pub mod events;
pub mod security;
pub mod settlement;
pub mod ledger;
pub mod dispatch;

/// Contract ABI version — frozen after release
pub const CONTRACT_ABI_VERSION: &str = "1.0.0";
