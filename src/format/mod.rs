//! Text conversion for amounts and dates
//!
//! - `money`: yen formatting for display and input, and sanitizing parse
//! - `date`: transaction date labels and strict `YYYY-MM-DD` parsing

pub mod date;
pub mod money;

pub use date::{format_timestamp, parse_iso_date, parse_label_date};
pub use money::{
    display_or_invalid, format_for_display, format_for_input, format_money, parse,
    MoneyFormatOptions, CURRENCY_SYMBOL, INVALID_AMOUNT_LABEL,
};
