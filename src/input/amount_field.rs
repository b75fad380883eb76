//! Amount entry field state
//!
//! Pairs the number behind an amount input with the text the field shows.
//! Only the number is stored; the text is derived from it on every read, so
//! the two can't drift apart.

use std::fmt;

use tracing::warn;

use crate::format::money::{input_or_invalid, parse};
use crate::models::Money;

type ChangeCallback = Box<dyn FnMut(Money)>;

/// State behind an amount text field
pub struct AmountFieldState {
    amount: Money,
    on_change: Option<ChangeCallback>,
}

impl AmountFieldState {
    /// Create a field holding `initial`
    pub fn new(initial: Money) -> Self {
        Self {
            amount: initial,
            on_change: None,
        }
    }

    /// Register a callback that receives every parsed value from [`Self::handle_change`]
    pub fn with_on_change(mut self, callback: impl FnMut(Money) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Replace the stored amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    /// Handle raw text typed into the field
    ///
    /// The text is sanitized by [`parse`], stored, and forwarded to the change
    /// callback. Returns the parsed amount.
    pub fn handle_change(&mut self, raw: &str) -> Money {
        let amount = parse(raw);
        if !amount.is_safe() {
            warn!(input = raw, "amount field received a value beyond the safe range");
        }

        self.set_amount(amount);
        if let Some(callback) = self.on_change.as_mut() {
            callback(amount);
        }
        amount
    }

    /// The stored amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Text the field shows: `""` for zero and negatives, the invalid-value
    /// label when the amount can't be formatted
    pub fn text(&self) -> String {
        input_or_invalid(self.amount.as_f64())
    }

    /// Whether the stored amount is too large to format
    pub fn is_out_of_range(&self) -> bool {
        !self.amount.is_safe()
    }

    /// Reset to zero without notifying the callback
    pub fn clear(&mut self) {
        self.set_amount(Money::zero());
    }
}

impl Default for AmountFieldState {
    fn default() -> Self {
        Self::new(Money::zero())
    }
}

impl fmt::Debug for AmountFieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmountFieldState")
            .field("amount", &self.amount)
            .field("text", &self.text())
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::INVALID_AMOUNT_LABEL;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state() {
        let field = AmountFieldState::new(Money::from_yen(1500));
        assert_eq!(field.amount().yen(), 1500);
        assert_eq!(field.text(), "¥1,500");

        let empty = AmountFieldState::default();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_set_amount_updates_text() {
        let mut field = AmountFieldState::default();

        field.set_amount(Money::from_yen(15000));
        assert_eq!(field.text(), "¥15,000");

        field.set_amount(Money::zero());
        assert_eq!(field.text(), "");

        field.set_amount(Money::from_yen(-300));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_handle_change_parses_and_formats() {
        let mut field = AmountFieldState::default();

        assert_eq!(field.handle_change("¥1,2345").yen(), 12345);
        assert_eq!(field.amount().yen(), 12345);
        assert_eq!(field.text(), "¥12,345");

        field.handle_change("abc");
        assert_eq!(field.amount().yen(), 0);
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_handle_change_notifies_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut field = AmountFieldState::default()
            .with_on_change(move |amount| sink.borrow_mut().push(amount.yen()));

        field.handle_change("12");
        field.handle_change("¥1,200");
        field.set_amount(Money::from_yen(99));

        assert_eq!(*seen.borrow(), vec![12, 1200]);
    }

    #[test]
    fn test_out_of_range_shows_invalid_label() {
        let mut field = AmountFieldState::default();
        field.handle_change("99999999999999999");

        assert!(field.is_out_of_range());
        assert_eq!(field.text(), INVALID_AMOUNT_LABEL);

        field.clear();
        assert!(!field.is_out_of_range());
        assert_eq!(field.text(), "");
    }
}
