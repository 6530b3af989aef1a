use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Signed money amount represented as **integer cents**.
///
/// The settlement core works on `f64` so that uneven splits (e.g. a third of
/// a cent) behave exactly like the reference algorithm. `MoneyCents` lives at
/// the edges: parsing what people typed and printing what they owe.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing accepts `.` or `,` as decimal separator and rejects more than 2
/// decimals:
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Rounds a decimal amount to the nearest cent (half away from zero).
    ///
    /// Non-finite input maps to zero; out of range values saturate.
    #[must_use]
    pub fn from_f64_rounded(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        // `as` saturates on overflow.
        Self((value * 100.0).round() as i64)
    }

    /// Returns the amount in major units.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Parses the fractional part (after the separator) into cents.
fn parse_fraction(frac: &str) -> Result<i64, EngineError> {
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(EngineError::InvalidAmount(format!("invalid amount: {frac}")));
    }
    match frac.len() {
        0 => Ok(0),
        1 | 2 => {
            let digits: i64 = frac
                .parse()
                .map_err(|_| EngineError::InvalidAmount(format!("invalid amount: {frac}")))?;
            Ok(if frac.len() == 1 { digits * 10 } else { digits })
        }
        _ => Err(EngineError::InvalidAmount("too many decimals".to_string())),
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    /// At most 2 fractional digits are allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidAmount(format!("invalid amount: {}", s.trim()));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, trimmed[1..].trim_start()),
            Some(b'+') => (false, trimmed[1..].trim_start()),
            _ => (false, trimmed),
        };
        if digits.is_empty() {
            return Err(EngineError::InvalidAmount("empty amount".to_string()));
        }

        let normalized = digits.replace(',', ".");
        let (units_str, frac_str) = match normalized.split_once('.') {
            Some((units, frac)) if !frac.contains('.') => (units, frac),
            Some(_) => return Err(invalid()),
            None => (normalized.as_str(), ""),
        };
        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| overflow())?;
        let cents = parse_fraction(frac_str)?;
        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(MoneyCents(if negative { -total } else { total }))
    }
}
