// ============================================================================
// Rational Money
// Exact currency-tagged fraction with no fixed decimal representation
// ============================================================================

use crate::domain::currency::Currency;
use crate::domain::money::Money;
use crate::numeric::{IntoRational, MoneyError, MoneyResult, Rational, RoundingMode};
use std::fmt;

/// An exact monetary quantity: an arbitrary-precision fraction tagged with a
/// currency, with no decimal scale yet.
///
/// All arithmetic is exact; nothing rounds until the value is materialized
/// with [`RationalMoney::to_money`] (or [`Money::from_rational`]). This is the
/// composition vehicle for multi-step computations that must round only once.
///
/// # Example
/// ```ignore
/// use exact_money::prelude::*;
///
/// let exact = RationalMoney::of(100, "EUR")?
///     .divide(3)?
///     .multiply(3)?;           // exactly 100 again
/// assert!(exact.subtract(RationalMoney::of(100, "EUR")?)?.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalMoney {
    amount: Rational,
    currency: Currency,
}

/// Operand accepted by [`RationalMoney`] arithmetic: another rational money
/// value (currency checked for add/subtract) or a dimensionless exact scalar.
#[derive(Debug, Clone)]
pub enum RationalInput {
    /// Another rational money value
    Money(RationalMoney),
    /// Dimensionless exact scalar
    Scalar(Rational),
    /// Scalar given as an exact decimal string, parsed at use
    Text(String),
}

impl From<RationalMoney> for RationalInput {
    fn from(value: RationalMoney) -> Self {
        RationalInput::Money(value)
    }
}

impl From<&RationalMoney> for RationalInput {
    fn from(value: &RationalMoney) -> Self {
        RationalInput::Money(value.clone())
    }
}

impl From<Rational> for RationalInput {
    fn from(value: Rational) -> Self {
        RationalInput::Scalar(value)
    }
}

impl From<i64> for RationalInput {
    fn from(value: i64) -> Self {
        RationalInput::Scalar(Rational::from_integer(value))
    }
}

impl From<i32> for RationalInput {
    fn from(value: i32) -> Self {
        RationalInput::Scalar(Rational::from_integer(value))
    }
}

impl From<&str> for RationalInput {
    fn from(value: &str) -> Self {
        RationalInput::Text(value.to_string())
    }
}

impl From<rust_decimal::Decimal> for RationalInput {
    fn from(value: rust_decimal::Decimal) -> Self {
        RationalInput::Scalar(Rational::from_decimal(value))
    }
}

impl RationalMoney {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an exact scalar amount in major units.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` for unregistered codes and `InvalidAmount`
    /// for unparseable string amounts.
    pub fn of(amount: impl IntoRational, currency: &str) -> MoneyResult<Self> {
        Ok(Self {
            amount: amount.into_rational()?,
            currency: Currency::from_code(currency)?,
        })
    }

    /// Exact zero in the given currency.
    pub fn zero(currency: &str) -> MoneyResult<Self> {
        Self::of(0i64, currency)
    }

    pub(crate) fn from_parts(amount: Rational, currency: Currency) -> Self {
        Self { amount, currency }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The exact fractional amount in major units.
    #[inline]
    pub fn amount(&self) -> &Rational {
        &self.amount
    }

    /// The value's currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Check if the exact fraction is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if the exact fraction is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if the exact fraction is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// Return the value with its fraction in lowest terms.
    pub fn simplified(&self) -> Self {
        Self {
            amount: self.amount.simplified(),
            currency: self.currency,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if a rational money operand carries a
    /// different currency.
    pub fn add(&self, value: impl Into<RationalInput>) -> MoneyResult<Self> {
        let rhs = self.checked_operand(value.into())?;
        Ok(Self {
            amount: &self.amount + &rhs,
            currency: self.currency,
        })
    }

    /// Exact subtraction.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if a rational money operand carries a
    /// different currency.
    pub fn subtract(&self, value: impl Into<RationalInput>) -> MoneyResult<Self> {
        let rhs = self.checked_operand(value.into())?;
        Ok(Self {
            amount: &self.amount - &rhs,
            currency: self.currency,
        })
    }

    /// Exact multiplication by a dimensionless scalar (or another value's
    /// bare amount; no currency constraint applies to scaling).
    pub fn multiply(&self, value: impl Into<RationalInput>) -> MoneyResult<Self> {
        let rhs = self.scalar_operand(value.into())?;
        Ok(Self {
            amount: &self.amount * &rhs,
            currency: self.currency,
        })
    }

    /// Exact division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the divisor is exactly zero.
    pub fn divide(&self, value: impl Into<RationalInput>) -> MoneyResult<Self> {
        let rhs = self.scalar_operand(value.into())?;
        Ok(Self {
            amount: self.amount.checked_div(&rhs)?,
            currency: self.currency,
        })
    }

    /// Materialize at a fixed scale: the single terminal rounding.
    pub fn to_money(&self, scale: u32, rounding: RoundingMode) -> MoneyResult<Money> {
        Money::from_rational_rounded(self, scale, rounding)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn checked_operand(&self, input: RationalInput) -> MoneyResult<Rational> {
        match input {
            RationalInput::Money(other) => {
                if self.currency != other.currency {
                    return Err(MoneyError::CurrencyMismatch {
                        left: self.currency.code().to_string(),
                        right: other.currency.code().to_string(),
                    });
                }
                Ok(other.amount)
            },
            other => self.scalar_operand(other),
        }
    }

    fn scalar_operand(&self, input: RationalInput) -> MoneyResult<Rational> {
        match input {
            RationalInput::Money(other) => Ok(other.amount),
            RationalInput::Scalar(value) => Ok(value),
            RationalInput::Text(text) => text.parse(),
        }
    }
}

impl fmt::Display for RationalMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// ============================================================================
// Tests
// ============================================================================
