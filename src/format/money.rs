//! Currency text conversion
//!
//! Converts amounts to yen text for display and for input fields, and parses
//! user-typed text back into an amount. Every function here is pure.
//!
//! Two presentation policies exist:
//! - display: always renders a value, including `¥0` and `¥-1,500`
//! - input: zero and negative amounts render as `""` so the field shows its
//!   placeholder while being edited

use crate::error::{LedgerError, LedgerResult};
use crate::models::money::{Money, MAX_SAFE_INTEGER};

/// Currency symbol prefixed to every formatted amount
pub const CURRENCY_SYMBOL: &str = "¥";

/// Shown in place of an amount that cannot be formatted
pub const INVALID_AMOUNT_LABEL: &str = "無効な値";

/// Options controlling [`format_money`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormatOptions {
    /// Prefix the currency symbol
    pub show_symbol: bool,
    /// Render zero as an empty string
    pub empty_on_zero: bool,
    /// Render negative amounts as an empty string
    pub empty_on_negative: bool,
    /// Digits after the decimal point
    pub decimal_places: usize,
}

impl Default for MoneyFormatOptions {
    fn default() -> Self {
        Self {
            show_symbol: true,
            empty_on_zero: false,
            empty_on_negative: false,
            decimal_places: 0,
        }
    }
}

impl MoneyFormatOptions {
    /// Options for input fields: zero and negatives render empty
    pub const fn input() -> Self {
        Self {
            show_symbol: true,
            empty_on_zero: true,
            empty_on_negative: true,
            decimal_places: 0,
        }
    }
}

fn check_safe_integer(value: f64) -> LedgerResult<()> {
    if value.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(LedgerError::AmountOutOfRange { value });
    }
    Ok(())
}

/// Format an amount according to `options`
///
/// NaN formats as `""`. Magnitudes beyond `MAX_SAFE_INTEGER` (and infinities)
/// fail with [`LedgerError::AmountOutOfRange`].
pub fn format_money(value: f64, options: MoneyFormatOptions) -> LedgerResult<String> {
    if value.is_nan() {
        return Ok(String::new());
    }

    check_safe_integer(value)?;

    if value == 0.0 && options.empty_on_zero {
        return Ok(String::new());
    }
    if value < 0.0 && options.empty_on_negative {
        return Ok(String::new());
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = round_half_away(value.abs(), options.decimal_places);
    let text = format!("{:.*}", options.decimal_places, magnitude);

    let grouped = match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_thousands(int_part), frac_part),
        None => group_thousands(&text),
    };

    let symbol = if options.show_symbol {
        CURRENCY_SYMBOL
    } else {
        ""
    };
    Ok(format!("{}{}{}", symbol, sign, grouped))
}

/// Display formatting: `15000 -> "¥15,000"`, `0 -> "¥0"`, `-1500 -> "¥-1,500"`
pub fn format_for_display(value: f64) -> LedgerResult<String> {
    format_money(value, MoneyFormatOptions::default())
}

/// Input formatting: like [`format_for_display`] but zero and negatives are `""`
pub fn format_for_input(value: f64) -> LedgerResult<String> {
    format_money(value, MoneyFormatOptions::input())
}

/// Display formatting with out-of-range amounts replaced by [`INVALID_AMOUNT_LABEL`]
pub fn display_or_invalid(value: f64) -> String {
    format_for_display(value).unwrap_or_else(|_| INVALID_AMOUNT_LABEL.to_string())
}

/// Input formatting with out-of-range amounts replaced by [`INVALID_AMOUNT_LABEL`]
pub fn input_or_invalid(value: f64) -> String {
    format_for_input(value).unwrap_or_else(|_| INVALID_AMOUNT_LABEL.to_string())
}

/// Parse user-typed text into an amount
///
/// Every character that is not an ASCII digit is dropped and the remaining
/// digits are read as a non-negative integer. Text without digits parses to
/// zero. This sanitizes rather than rejects: `"abc123def"` is 123 and
/// `"¥1,500"` is 1500. A digit run too long for `i64` saturates at `i64::MAX`.
pub fn parse(text: &str) -> Money {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Money::zero();
    }

    digits
        .parse::<i64>()
        .map(Money::from_yen)
        .unwrap_or_else(|_| Money::from_yen(i64::MAX))
}

fn round_half_away(value: f64, decimal_places: usize) -> f64 {
    let scale = 10f64.powi(decimal_places.min(15) as i32);
    (value * scale).round() / scale
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
