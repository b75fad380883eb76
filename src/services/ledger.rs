//! Ledger store
//!
//! The authoritative in-memory ledger: two newest-first lists (expenses and
//! incomes) and the totals derived from them. Adding is the only way a
//! transaction enters the system; nothing is ever edited or removed.
//!
//! Totals and the balance are folds over the current lists, computed on each
//! read, so they can never disagree with the lists.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::format::date::{parse_iso_date, today};
use crate::input::validation::validate_amount;
use crate::models::{EntryKind, Money, Transaction};

/// Read model handed to display and export code
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSummary<'a> {
    pub expenses: &'a [Transaction],
    pub incomes: &'a [Transaction],
    pub balance: Money,
    pub total_expense_amount: Money,
    pub total_income_amount: Money,
}

/// In-memory ledger of expenses and incomes
#[derive(Debug, Clone)]
pub struct LedgerStore {
    expenses: Vec<Transaction>,
    incomes: Vec<Transaction>,
    validate_amounts: bool,
}

impl LedgerStore {
    /// Create an empty ledger that rejects non-positive amounts
    pub fn new() -> Self {
        Self::with_validation(true)
    }

    /// Create an empty ledger, choosing whether amounts are validated
    ///
    /// With validation off the ledger accepts any amount. Dates are always
    /// checked.
    pub fn with_validation(validate_amounts: bool) -> Self {
        Self {
            expenses: Vec::new(),
            incomes: Vec::new(),
            validate_amounts,
        }
    }

    /// Whether amounts are checked on add
    pub fn validates_amounts(&self) -> bool {
        self.validate_amounts
    }

    /// Record an expense dated `date` (`YYYY-MM-DD`)
    pub fn add_expense(&mut self, amount: Money, date: &str) -> LedgerResult<Transaction> {
        self.add(EntryKind::Expense, amount, date)
    }

    /// Record an income dated `date` (`YYYY-MM-DD`)
    pub fn add_income(&mut self, amount: Money, date: &str) -> LedgerResult<Transaction> {
        self.add(EntryKind::Income, amount, date)
    }

    /// Record an expense dated today
    pub fn add_expense_today(&mut self, amount: Money) -> LedgerResult<Transaction> {
        self.add_on(EntryKind::Expense, amount, today())
    }

    /// Record an income dated today
    pub fn add_income_today(&mut self, amount: Money) -> LedgerResult<Transaction> {
        self.add_on(EntryKind::Income, amount, today())
    }

    /// Record a transaction of `kind` dated `date` (`YYYY-MM-DD`)
    ///
    /// The date is read as a local calendar day. A date that doesn't parse is
    /// rejected before anything is stored.
    pub fn add(&mut self, kind: EntryKind, amount: Money, date: &str) -> LedgerResult<Transaction> {
        let parsed = parse_iso_date(date).inspect_err(|err| {
            warn!(%kind, date, error = %err, "rejected transaction with invalid date");
        })?;
        self.add_on(kind, amount, parsed)
    }

    /// Record a transaction of `kind` on an already-parsed date
    ///
    /// The new transaction goes to the front of its list and a copy is returned.
    pub fn add_on(
        &mut self,
        kind: EntryKind,
        amount: Money,
        date: NaiveDate,
    ) -> LedgerResult<Transaction> {
        if self.validate_amounts {
            validate_amount(amount).inspect_err(|err| {
                warn!(%kind, amount = amount.yen(), error = %err, "rejected transaction amount");
            })?;
        }

        let txn = Transaction::new(amount, date);
        debug!(
            %kind,
            id = %txn.id(),
            amount = amount.yen(),
            timestamp = txn.timestamp(),
            "recorded transaction"
        );

        self.list_mut(kind).insert(0, txn.clone());
        Ok(txn)
    }

    /// Expenses, newest first
    pub fn expenses(&self) -> &[Transaction] {
        &self.expenses
    }

    /// Incomes, newest first
    pub fn incomes(&self) -> &[Transaction] {
        &self.incomes
    }

    /// The list for `kind`, newest first
    pub fn transactions(&self, kind: EntryKind) -> &[Transaction] {
        match kind {
            EntryKind::Expense => &self.expenses,
            EntryKind::Income => &self.incomes,
        }
    }

    /// Sum of the list for `kind`
    pub fn total(&self, kind: EntryKind) -> Money {
        self.transactions(kind).iter().map(Transaction::amount).sum()
    }

    /// Sum of all expenses
    pub fn total_expense_amount(&self) -> Money {
        self.total(EntryKind::Expense)
    }

    /// Sum of all incomes
    pub fn total_income_amount(&self) -> Money {
        self.total(EntryKind::Income)
    }

    /// Total income minus total expense
    pub fn balance(&self) -> Money {
        self.total_income_amount() - self.total_expense_amount()
    }

    /// Snapshot of the lists together with the derived totals
    pub fn summary(&self) -> LedgerSummary<'_> {
        let total_expense_amount = self.total_expense_amount();
        let total_income_amount = self.total_income_amount();
        LedgerSummary {
            expenses: &self.expenses,
            incomes: &self.incomes,
            balance: total_income_amount - total_expense_amount,
            total_expense_amount,
            total_income_amount,
        }
    }

    /// Number of recorded transactions across both lists
    pub fn len(&self) -> usize {
        self.expenses.len() + self.incomes.len()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.incomes.is_empty()
    }

    fn list_mut(&mut self, kind: EntryKind) -> &mut Vec<Transaction> {
        match kind {
            EntryKind::Expense => &mut self.expenses,
            EntryKind::Income => &mut self.incomes,
        }
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
