//! Validation rules for transaction entry
//!
//! The same checks guard the ledger's add operations (when enabled) and the
//! transaction form, so a record can't reach either list with a
//! non-positive amount or a date that isn't a real day.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::format::date::parse_iso_date;
use crate::models::{Money, MAX_SAFE_INTEGER};

/// Check an amount: must be positive and no larger than `MAX_SAFE_INTEGER`
pub fn validate_amount(amount: Money) -> LedgerResult<()> {
    if !amount.is_positive() {
        return Err(LedgerError::Validation(
            "amount must be greater than zero".into(),
        ));
    }
    if !amount.is_safe() {
        return Err(LedgerError::Validation(format!(
            "amount must not exceed {} yen",
            Money::from_yen(MAX_SAFE_INTEGER)
                .display()
                .trim_start_matches(crate::format::CURRENCY_SYMBOL)
        )));
    }
    Ok(())
}

/// Check a `YYYY-MM-DD` date string and return the parsed date
pub fn validate_date(input: &str) -> LedgerResult<NaiveDate> {
    parse_iso_date(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount_passes() {
        assert!(validate_amount(Money::from_yen(1)).is_ok());
        assert!(validate_amount(Money::from_yen(MAX_SAFE_INTEGER)).is_ok());
    }

    #[test]
    fn test_non_positive_amount_fails() {
        let zero = validate_amount(Money::zero()).unwrap_err();
        assert!(zero.is_validation());
        assert_eq!(
            zero.to_string(),
            "Validation error: amount must be greater than zero"
        );
        assert!(validate_amount(Money::from_yen(-500)).is_err());
    }

    #[test]
    fn test_oversized_amount_fails() {
        let err = validate_amount(Money::from_yen(MAX_SAFE_INTEGER + 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: amount must not exceed 9,007,199,254,740,991 yen"
        );
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(validate_date("2025-02-31").is_err());
        assert!(validate_date("yesterday").is_err());
    }
}
