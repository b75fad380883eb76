//! Transaction entry form
//!
//! Holds what a user has typed for one expense or income: the amount field,
//! whether a custom date is used, and that date. Submitting validates,
//! records the transaction and clears the amount while keeping the date
//! choice, so several entries for the same day can be made in a row.

use chrono::NaiveDate;

use super::amount_field::AmountFieldState;
use super::validation::{validate_amount, validate_date};
use crate::error::LedgerResult;
use crate::format::date::{format_iso, today};
use crate::models::{EntryKind, Transaction};
use crate::services::LedgerStore;

/// State of a transaction entry form
#[derive(Debug)]
pub struct TransactionForm {
    amount: AmountFieldState,
    use_custom_date: bool,
    date: String,
}

impl TransactionForm {
    /// Empty form; the date defaults to today and the custom-date switch is off
    pub fn new() -> Self {
        Self::with_date(format_iso(today()))
    }

    /// Empty form with a preset date string
    pub fn with_date(date: impl Into<String>) -> Self {
        Self {
            amount: AmountFieldState::default(),
            use_custom_date: false,
            date: date.into(),
        }
    }

    pub fn amount_field(&self) -> &AmountFieldState {
        &self.amount
    }

    pub fn amount_field_mut(&mut self) -> &mut AmountFieldState {
        &mut self.amount
    }

    pub fn use_custom_date(&self) -> bool {
        self.use_custom_date
    }

    /// Turn the custom-date switch on or off
    pub fn set_use_custom_date(&mut self, enabled: bool) {
        self.use_custom_date = enabled;
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Set the date string (`YYYY-MM-DD`); checked on submit
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// The date a submit would record: the entered date when the switch is
    /// on, today otherwise
    pub fn effective_date(&self) -> LedgerResult<NaiveDate> {
        if self.use_custom_date {
            validate_date(&self.date)
        } else {
            Ok(today())
        }
    }

    /// Whether a submit would pass validation
    pub fn is_valid(&self) -> bool {
        validate_amount(self.amount.amount()).is_ok() && self.effective_date().is_ok()
    }

    /// Validate and record the entry in `store`
    ///
    /// On success the amount resets to zero; the date and switch are kept.
    /// On error nothing changes.
    pub fn submit(&mut self, store: &mut LedgerStore, kind: EntryKind) -> LedgerResult<Transaction> {
        let amount = self.amount.amount();
        validate_amount(amount)?;
        let date = self.effective_date()?;

        let txn = store.add_on(kind, amount, date)?;
        self.amount.clear();
        Ok(txn)
    }
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::new()
    }
}
