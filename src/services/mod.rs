//! Service layer for kakeibo
//!
//! The ledger store owns the transaction lists and derives totals; the
//! history module projects a list into date sections for display.

pub mod history;
pub mod ledger;

pub use history::{group_by_date, HistoryGroup};
pub use ledger::{LedgerStore, LedgerSummary};
