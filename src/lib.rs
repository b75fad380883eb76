//! kakeibo - an in-memory household ledger
//!
//! Records expenses and incomes, derives totals and the balance, and groups
//! history by date, newest first. The ledger lives in memory only.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transaction IDs, transactions)
//! - `format`: Yen and date-label text conversion
//! - `input`: Amount field, entry form and validation rules
//! - `services`: The ledger store and history grouping
//! - `display`: Plain-text rendering of history and totals
//! - `export`: JSON, YAML and CSV snapshots
//! - `cli`: Command handlers and the interactive session
//!
//! # Example
//!
//! ```rust
//! use kakeibo::models::Money;
//! use kakeibo::services::{group_by_date, LedgerStore};
//!
//! let mut store = LedgerStore::new();
//! store.add_income(Money::from_yen(50000), "2025-01-01")?;
//! store.add_expense(Money::from_yen(1500), "2025-01-15")?;
//!
//! assert_eq!(store.balance().to_string(), "¥48,500");
//! let groups = group_by_date(store.expenses()).unwrap();
//! assert_eq!(groups[0].label, "2025/01/15(水)");
//! # Ok::<(), kakeibo::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod models;
pub mod services;

pub use error::{LedgerError, LedgerResult};
