// ============================================================================
// Currency
// Code-to-minor-unit registry for currency-tagged amounts
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currencies the registry knows about, with their minor-unit digit counts.
///
/// Everything handled here uses two minor digits; the digit count is carried
/// per entry so the table stays honest if that ever changes.
const CURRENCIES: &[(&str, u32)] = &[
    ("EUR", 2),
    ("USD", 2),
    ("GBP", 2),
    ("CHF", 2),
    ("AUD", 2),
    ("CAD", 2),
    ("MYR", 2),
    ("SGD", 2),
];

/// An opaque currency code with a known minor-unit digit count.
///
/// Looked up by code at construction; unknown codes are an error. The type is
/// `Copy` and immutable: the code points into the static registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    minor_digits: u32,
}

impl Currency {
    /// Look a currency up by its code.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` for codes not in the registry.
    pub fn from_code(code: &str) -> MoneyResult<Self> {
        CURRENCIES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(code, minor_digits)| Self { code, minor_digits })
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    /// The process-wide default currency.
    pub fn default_currency() -> Self {
        // EUR is the first registry entry by convention
        let (code, minor_digits) = CURRENCIES[0];
        Self { code, minor_digits }
    }

    /// The currency code, e.g. "EUR".
    #[inline]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// How many digits after the decimal point the standard minor unit has.
    #[inline]
    pub fn minor_digits(&self) -> u32 {
        self.minor_digits
    }

    /// All registered currency codes.
    pub fn all() -> impl Iterator<Item = &'static str> {
        CURRENCIES.iter().map(|(code, _)| *code)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::default_currency()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Currency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::from_code(&code).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
