//! CSV Export functionality
//!
//! One row per transaction, expenses first, each list newest first.

use serde::Serialize;
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::{EntryKind, Transaction};
use crate::services::LedgerStore;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Kind")]
    kind: EntryKind,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Label")]
    label: &'a str,
    #[serde(rename = "Amount")]
    amount: i64,
}

impl<'a> CsvRow<'a> {
    fn new(kind: EntryKind, txn: &'a Transaction) -> Self {
        Self {
            id: txn.id().to_string(),
            kind,
            date: txn.date().to_string(),
            label: txn.timestamp(),
            amount: txn.amount().yen(),
        }
    }
}

/// Export every transaction to CSV (`ID,Kind,Date,Label,Amount`)
pub fn export_csv<W: Write>(store: &LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut wrote_any = false;
    for kind in [EntryKind::Expense, EntryKind::Income] {
        for txn in store.transactions(kind) {
            csv_writer.serialize(CsvRow::new(kind, txn))?;
            wrote_any = true;
        }
    }
    // serialize() only emits the header alongside the first row
    if !wrote_any {
        csv_writer.write_record(["ID", "Kind", "Date", "Label", "Amount"])?;
    }

    csv_writer.flush()?;
    Ok(())
}
