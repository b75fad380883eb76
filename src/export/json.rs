//! JSON Export functionality
//!
//! Writes a snapshot of the in-memory ledger with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::{Money, Transaction};
use crate::services::LedgerStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of the ledger as written by every export format
#[derive(Debug, Clone, Serialize)]
pub struct LedgerExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub balance: Money,
    pub total_income_amount: Money,
    pub total_expense_amount: Money,

    /// Expenses, newest first
    pub expenses: &'a [Transaction],

    /// Incomes, newest first
    pub incomes: &'a [Transaction],

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub income_count: usize,

    /// Earliest transaction date in either list
    pub earliest_transaction: Option<String>,

    /// Latest transaction date in either list
    pub latest_transaction: Option<String>,
}

impl<'a> LedgerExport<'a> {
    /// Capture the current state of `store`
    pub fn from_store(store: &'a LedgerStore) -> Self {
        let summary = store.summary();
        let dates = || summary.expenses.iter().chain(summary.incomes).map(Transaction::date);

        let metadata = ExportMetadata {
            expense_count: summary.expenses.len(),
            income_count: summary.incomes.len(),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            balance: summary.balance,
            total_income_amount: summary.total_income_amount,
            total_expense_amount: summary.total_expense_amount,
            expenses: summary.expenses,
            incomes: summary.incomes,
            metadata,
        }
    }
}

/// Export the ledger to pretty-printed JSON
pub fn export_json<W: Write>(store: &LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_store(store);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
