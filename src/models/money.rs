//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Serialized as a plain decimal string (`"150.00"`) so it reads the
//! same in the CSV datasets and the audit log.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Currency symbols stripped from user input
const SYMBOLS: [char; 4] = ['$', '₹', '€', '£'];

/// Largest accepted amount: one trillion units
const MAX_CENTS: i64 = 100_000_000_000_000;

/// Largest accepted exponent in `1.5e3` style input
const MAX_EXPONENT: i32 = 300;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Approximate value in whole units, for ratios and charts only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Sum two amounts, `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts `"10"`, `"10.5"`, `"10.50"`, `".5"`, `"1.5e3"`, a leading sign,
    /// and a leading currency symbol. Fraction digits past the second are
    /// rounded half away from zero. Amounts beyond one trillion are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(input.to_string());

        let (negative, rest) = if let Some(stripped) = input.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = input.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, input)
        };

        let rest = rest.trim_start_matches(SYMBOLS).replace(',', "");

        let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().map_err(|_| invalid())?;
                if exponent.abs() > MAX_EXPONENT {
                    return Err(out_of_range());
                }
                (mantissa, exponent)
            }
            None => (rest.as_str(), 0),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let digits: Vec<i64> = whole
            .bytes()
            .chain(fraction.bytes())
            .map(|b| i64::from(b - b'0'))
            .collect();
        let digit_at = |i: i64| {
            usize::try_from(i)
                .ok()
                .and_then(|i| digits.get(i).copied())
                .unwrap_or(0)
        };

        // Digits before `cut` make up the cents, the one at `cut` decides rounding
        let cut = whole.len() as i64 + i64::from(exponent) + 2;

        let mut cents: i64 = 0;
        for i in 0..cut.max(0) {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit_at(i)))
                .filter(|c| *c <= MAX_CENTS)
                .ok_or_else(out_of_range)?;
        }
        if digit_at(cut) >= 5 {
            cents += 1;
        }
        if cents > MAX_CENTS {
            return Err(out_of_range());
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Money::parse(&raw).map_err(de::Error::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(18000).format_with_symbol("₹"), "₹180.00");
        assert_eq!(Money::from_cents(-250).format_with_symbol("$"), "-$2.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("100.0").unwrap().cents(), 10000);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("+3").unwrap().cents(), 300);
        assert_eq!(Money::parse(" 1,250.75 ").unwrap().cents(), 125075);
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse("0.125").unwrap().cents(), 13);
        assert_eq!(Money::parse("0.124").unwrap().cents(), 12);
        assert_eq!(Money::parse("-0.125").unwrap().cents(), -13);
        assert_eq!(Money::parse("9.999").unwrap().cents(), 1000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "nan", "inf", "-", ".", "1.2.3", "--5", "12a"] {
            assert!(Money::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_parse_exponent_form() {
        assert_eq!(Money::parse("1e3").unwrap().cents(), 100000);
        assert_eq!(Money::parse("1.5E2").unwrap().cents(), 15000);
        assert_eq!(Money::parse("2.5e-1").unwrap().cents(), 25);
        assert_eq!(Money::parse("1e-05").unwrap().cents(), 0);
        assert_eq!(Money::parse("5e-3").unwrap().cents(), 1);
        assert!(Money::parse("1e").is_err());
        assert!(Money::parse("e5").is_err());
    }

    #[test]
    fn test_parse_rejects_huge_amounts() {
        for input in ["90000000000000000", "1000000000000.01", "1e13", "9e300", "1e999"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::OutOfRange(_))),
                "accepted {input:?}"
            );
        }
        assert_eq!(
            Money::parse("-1000000000000").unwrap().cents(),
            -100_000_000_000_000
        );
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(500)), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(a), None);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
