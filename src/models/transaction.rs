//! Transaction model
//!
//! Expenses and incomes share one shape; which list holds a transaction is
//! what makes it one or the other. Fields are read-only after creation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::LedgerError;
use crate::format::date::format_timestamp;

/// Which ledger list a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    /// Plural noun used for list headings
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Expense => "Expenses",
            Self::Income => "Incomes",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "expenses" => Ok(Self::Expense),
            "income" | "incomes" => Ok(Self::Income),
            other => Err(LedgerError::Command(format!(
                "unknown kind '{}' (expected expense or income)",
                other
            ))),
        }
    }
}

/// A recorded amount with its date label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    amount: Money,
    date: NaiveDate,
    timestamp: String,
}

impl Transaction {
    /// Create a transaction with a fresh ID; the label is rendered from `date` once
    pub fn new(amount: Money, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            date,
            timestamp: format_timestamp(date),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// The amount entered
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Calendar date the transaction was recorded for
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Display label, `YYYY/MM/DD(曜)`
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.timestamp, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(Money::from_yen(1500), date(2025, 1, 15));

        assert_eq!(txn.amount().yen(), 1500);
        assert_eq!(txn.date(), date(2025, 1, 15));
        assert_eq!(txn.timestamp(), "2025/01/15(水)");
    }

    #[test]
    fn test_ids_differ() {
        let a = Transaction::new(Money::from_yen(1), date(2025, 1, 1));
        let b = Transaction::new(Money::from_yen(1), date(2025, 1, 1));
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(Money::from_yen(2000), date(2025, 1, 14));
        assert_eq!(txn.to_string(), "2025/01/14(火) ¥2,000");
    }

    #[test]
    fn test_entry_kind_parse() {
        assert_eq!("expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert_eq!("Incomes".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert!("transfer".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_serialization_shape() {
        let txn = Transaction::new(Money::from_yen(800), date(2025, 1, 15));
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["amount"], 800);
        assert_eq!(value["date"], "2025-01-15");
        assert_eq!(value["timestamp"], "2025/01/15(水)");
        assert_eq!(value["id"], txn.id().to_string());
        assert_eq!(
            serde_json::to_string(&EntryKind::Income).unwrap(),
            "\"income\""
        );
    }
}
