//! Core data models for kakeibo
//!
//! Amounts, transaction IDs and the transaction record shared by the
//! expense and income lists.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MAX_SAFE_INTEGER};
pub use transaction::{EntryKind, Transaction};
