//! Date labels for transactions
//!
//! A transaction carries its calendar date plus a label rendered once at
//! creation, `YYYY/MM/DD(曜)`, e.g. `2025/01/15(水)`. Dates are plain
//! calendar dates with no time zone attached, so the label never shifts by a
//! day the way a UTC conversion would.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::error::{LedgerError, LedgerResult};

const LABEL_DATE_FORMAT: &str = "%Y/%m/%d";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short Japanese weekday name
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "日",
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
    }
}

/// Render the display label for a date: `2025/01/15(水)`
pub fn format_timestamp(date: NaiveDate) -> String {
    format!(
        "{}({})",
        date.format(LABEL_DATE_FORMAT),
        weekday_label(date.weekday())
    )
}

/// Recover the calendar date from a label, ignoring the weekday suffix
pub fn parse_label_date(label: &str) -> Option<NaiveDate> {
    let date_part = label.split('(').next()?.trim();
    NaiveDate::parse_from_str(date_part, LABEL_DATE_FORMAT).ok()
}

/// Parse a strict `YYYY-MM-DD` date
///
/// The input must be exactly four, two and two ASCII digits separated by
/// dashes and name a real calendar day; `2025-1-5` and `2025-02-30` fail.
pub fn parse_iso_date(input: &str) -> LedgerResult<NaiveDate> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(LedgerError::invalid_date(input));
    }

    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .map_err(|_| LedgerError::invalid_date(input))
}

/// Render a date as `YYYY-MM-DD`
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Today on the local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
