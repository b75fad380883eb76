//! Money type for representing yen amounts
//!
//! Amounts are whole yen stored as `i64`. The yen has no minor unit in
//! everyday use, so there is no fractional part to carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::format::money as money_format;

/// Largest integer a double can represent exactly (2^53 - 1)
///
/// Amounts beyond this are rejected by validation and cannot be formatted.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// A whole-yen amount
///
/// Arithmetic saturates at the `i64` bounds instead of panicking; a
/// saturated value is far outside the safe range and formats as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole yen
    ///
    /// # Examples
    /// ```
    /// use kakeibo::models::Money;
    /// let amount = Money::from_yen(1500);
    /// assert_eq!(amount.to_string(), "¥1,500");
    /// ```
    pub const fn from_yen(yen: i64) -> Self {
        Self(yen)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in yen
    pub const fn yen(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Check if the amount lies within `±MAX_SAFE_INTEGER`
    pub const fn is_safe(&self) -> bool {
        self.0 >= -MAX_SAFE_INTEGER && self.0 <= MAX_SAFE_INTEGER
    }

    /// The amount as a float, the representation the formatter works on
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Sanitizing parse: keeps only the digits of `s`
    ///
    /// `"¥1,500"` parses to 1500 and `"abc"` to zero. See
    /// [`crate::format::money::parse`].
    pub fn parse(s: &str) -> Self {
        money_format::parse(s)
    }

    /// Display text; out-of-range amounts render as the invalid-value label
    pub fn display(&self) -> String {
        money_format::display_or_invalid(self.as_f64())
    }

    /// Input-field text; zero and negative amounts render empty
    pub fn for_input(&self) -> String {
        money_format::input_or_invalid(self.as_f64())
    }

    /// Add two amounts, saturating at the `i64` bounds
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<i64> for Money {
    fn from(yen: i64) -> Self {
        Self(yen)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
