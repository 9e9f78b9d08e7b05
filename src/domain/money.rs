// ============================================================================
// Fixed-Scale Money
// Immutable currency-tagged amount materialized at a decimal scale
// ============================================================================

use crate::domain::currency::Currency;
use crate::domain::rational_money::RationalMoney;
use crate::interfaces::{CurrencyFormatter, Tax};
use crate::numeric::{
    format_scaled, quantize_i64, IntoRational, MoneyError, MoneyResult, Rational, RoundingMode,
};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable monetary value at a fixed decimal scale.
///
/// The value is `amount / 10^scale` units of `currency`. Every arithmetic
/// method converts its operands to exact fractions, computes in the exact
/// domain, and quantizes the result exactly once under the value's rounding
/// mode. Chained operations therefore round once per step, never twice.
///
/// Values are immutable: every operation returns a new `Money`. The rounding
/// mode is per-value configuration fixed at construction (default half-up),
/// not process-global state.
///
/// # Example
/// ```ignore
/// use exact_money::prelude::*;
///
/// let price = Money::of(12345, "EUR", 4)?;     // 1.2345 EUR
/// let half = price.multiply("0.5")?;            // 6172.5 -> 6173
/// assert_eq!(half.amount(), 6173);
/// ```
#[derive(Clone)]
pub struct Money {
    /// Integer count of `10^-scale` units, already materialized
    amount: i64,
    scale: u32,
    currency: Currency,
    rounding: RoundingMode,
    tax: Option<Arc<dyn Tax>>,
}

// ============================================================================
// Operand Ingestion
// ============================================================================

/// Polymorphic operand accepted by [`Money::parse`] and binary arithmetic.
///
/// The variants are dispatched once at the API boundary:
/// - an existing `Money` keeps its own currency (checked against the receiver)
/// - raw integers and integer strings are already-scaled minor-unit counts
/// - a [`MoneyData`] record carries its own amount and currency
/// - a `rust_decimal::Decimal` is an exact major-unit amount
///
/// Floats are deliberately not accepted; see `Rational::from_f64_lossy` for
/// the one documented lossy escape hatch.
#[derive(Debug, Clone)]
pub enum MoneyInput {
    /// An existing money value
    Money(Money),
    /// Minor-unit count at the receiving value's scale
    Minor(i64),
    /// Minor-unit count as an exact decimal string
    Text(String),
    /// Structured `{amount, currency}` record
    Record(MoneyData),
    /// Exact major-unit decimal amount
    Decimal(rust_decimal::Decimal),
}

impl From<Money> for MoneyInput {
    fn from(value: Money) -> Self {
        MoneyInput::Money(value)
    }
}

impl From<&Money> for MoneyInput {
    fn from(value: &Money) -> Self {
        MoneyInput::Money(value.clone())
    }
}

impl From<i64> for MoneyInput {
    fn from(value: i64) -> Self {
        MoneyInput::Minor(value)
    }
}

impl From<i32> for MoneyInput {
    fn from(value: i32) -> Self {
        MoneyInput::Minor(value as i64)
    }
}

impl From<&str> for MoneyInput {
    fn from(value: &str) -> Self {
        MoneyInput::Text(value.to_string())
    }
}

impl From<String> for MoneyInput {
    fn from(value: String) -> Self {
        MoneyInput::Text(value)
    }
}

impl From<MoneyData> for MoneyInput {
    fn from(value: MoneyData) -> Self {
        MoneyInput::Record(value)
    }
}

impl From<rust_decimal::Decimal> for MoneyInput {
    fn from(value: rust_decimal::Decimal) -> Self {
        MoneyInput::Decimal(value)
    }
}

/// Plain-data projection of a money value for serialization.
///
/// `amount` is the minor-unit count at the currency's standard scale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyData {
    /// Minor-unit count
    pub amount: i64,
    /// Currency code
    pub currency: String,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value from an exact integer count of `10^-scale` units.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not registered.
    pub fn of(amount: i64, currency: &str, scale: u32) -> MoneyResult<Self> {
        let currency = Currency::from_code(currency)?;
        Ok(Self {
            amount,
            scale,
            currency,
            rounding: RoundingMode::default(),
            tax: None,
        })
    }

    /// Create a value at the currency's standard minor-unit scale.
    pub fn new(amount: i64, currency: &str) -> MoneyResult<Self> {
        let currency = Currency::from_code(currency)?;
        Ok(Self {
            amount,
            scale: currency.minor_digits(),
            currency,
            rounding: RoundingMode::default(),
            tax: None,
        })
    }

    /// Zero in the given currency, at its standard scale.
    pub fn zero(currency: &str) -> MoneyResult<Self> {
        Self::new(0, currency)
    }

    /// Create from a count of the currency's standard minor unit (cents).
    ///
    /// The count is independent of any other value's scale; the result uses
    /// the currency's own minor-digit scale.
    pub fn from_cents(amount: i64, currency: &str) -> MoneyResult<Self> {
        Self::new(amount, currency)
    }

    /// Create from an exact decimal string in major units, e.g. "15.00".
    ///
    /// The string is converted exactly; no float round-trip occurs.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for unparseable strings and `UnknownCurrency`
    /// for unregistered codes.
    pub fn from_decimal(amount: &str, currency: &str) -> MoneyResult<Self> {
        let value: Rational = amount.parse()?;
        let currency = Currency::from_code(currency)?;
        let scale = currency.minor_digits();
        let rounding = RoundingMode::default();
        Ok(Self {
            amount: quantize_i64(&value, scale, rounding)?,
            scale,
            currency,
            rounding,
            tax: None,
        })
    }

    /// Materialize a rational money value at the given scale.
    ///
    /// This is the single terminal rounding for computations composed on
    /// [`RationalMoney`].
    pub fn from_rational(value: &RationalMoney, scale: u32) -> MoneyResult<Self> {
        Self::from_rational_rounded(value, scale, RoundingMode::default())
    }

    /// Like [`Money::from_rational`], quantizing under an explicit mode.
    pub fn from_rational_rounded(
        value: &RationalMoney,
        scale: u32,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        Ok(Self {
            amount: quantize_i64(value.amount(), scale, rounding)?,
            scale,
            currency: value.currency(),
            rounding,
            tax: None,
        })
    }

    /// Polymorphic ingestion of money-like values.
    ///
    /// See [`MoneyInput`] for the accepted shapes. A missing currency falls
    /// back to [`Currency::default_currency`]; an input that carries its own
    /// currency (a `Money` or a record) keeps it.
    pub fn parse(value: impl Into<MoneyInput>, currency: Option<&str>) -> MoneyResult<Self> {
        let fallback = match currency {
            Some(code) => Currency::from_code(code)?,
            None => Currency::default_currency(),
        };
        match value.into() {
            MoneyInput::Money(money) => Ok(money),
            MoneyInput::Minor(amount) => Self::new(amount, fallback.code()),
            MoneyInput::Text(text) => {
                let count: Rational = text.parse()?;
                let scale = fallback.minor_digits();
                let rounding = RoundingMode::default();
                Ok(Self {
                    amount: quantize_i64(&count, 0, rounding)?,
                    scale,
                    currency: fallback,
                    rounding,
                    tax: None,
                })
            },
            MoneyInput::Record(data) => Self::from_data(data),
            MoneyInput::Decimal(decimal) => {
                let value = Rational::from_decimal(decimal);
                let scale = fallback.minor_digits();
                let rounding = RoundingMode::default();
                Ok(Self {
                    amount: quantize_i64(&value, scale, rounding)?,
                    scale,
                    currency: fallback,
                    rounding,
                    tax: None,
                })
            },
        }
    }

    /// Rebuild from a plain-data projection, at the currency's standard scale.
    pub fn from_data(data: MoneyData) -> MoneyResult<Self> {
        Self::new(data.amount, &data.currency)
    }

    /// Return a copy using the given rounding mode for subsequent operations.
    ///
    /// Rounding is per-value configuration; changing it never reinterprets the
    /// already-materialized amount.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The integer count of `10^-scale` units.
    #[inline]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The number of fractional digits the value is accurate to.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The value's currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The rounding mode applied by this value's operations.
    #[inline]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The value as a decimal string with exactly `scale` fractional digits.
    pub fn decimal_amount(&self) -> String {
        format_scaled(self.amount, self.scale)
    }

    /// Check if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Lossless escape hatch into the exact rational domain.
    ///
    /// Use this to compose several operations with a single terminal rounding
    /// via [`Money::from_rational`] or [`RationalMoney::to_money`].
    pub fn to_rational(&self) -> RationalMoney {
        RationalMoney::from_parts(self.exact_value(), self.currency)
    }

    /// Plain-data projection for serialization to external stores.
    pub fn to_data(&self) -> MoneyData {
        MoneyData {
            amount: self.amount,
            currency: self.currency.code().to_string(),
        }
    }

    /// The exact value in major units.
    pub(crate) fn exact_value(&self) -> Rational {
        Rational::scaled(self.amount, self.scale)
    }

    /// The attached tax capability, if any.
    pub(crate) fn tax_capability(&self) -> Option<&Arc<dyn Tax>> {
        self.tax.as_ref()
    }

    pub(crate) fn attach_tax(mut self, tax: Arc<dyn Tax>) -> Self {
        self.tax = Some(tax);
        self
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition, quantized once to this value's scale.
    ///
    /// Raw scalar operands are minor-unit counts at this value's scale; Money
    /// operands combine on the exact major-unit values, so differing scales
    /// are handled without intermediate rounding.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the operand carries a different currency.
    pub fn add(&self, value: impl Into<MoneyInput>) -> MoneyResult<Self> {
        let rhs = self.operand(value.into())?;
        self.assert_same_currency(&rhs)?;
        self.materialize(&self.exact_value() + &rhs.exact_value())
    }

    /// Exact subtraction, quantized once to this value's scale.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the operand carries a different currency.
    pub fn subtract(&self, value: impl Into<MoneyInput>) -> MoneyResult<Self> {
        let rhs = self.operand(value.into())?;
        self.assert_same_currency(&rhs)?;
        self.materialize(&self.exact_value() - &rhs.exact_value())
    }

    /// Like [`Money::add`], but scalar operands are counts of the currency's
    /// standard minor unit, independent of this value's scale.
    pub fn add_cents(&self, value: impl Into<MoneyInput>) -> MoneyResult<Self> {
        let rhs = self.cents_operand(value.into())?;
        self.assert_same_currency(&rhs)?;
        self.materialize(&self.exact_value() + &rhs.exact_value())
    }

    /// Like [`Money::subtract`], but scalar operands are counts of the
    /// currency's standard minor unit.
    pub fn subtract_cents(&self, value: impl Into<MoneyInput>) -> MoneyResult<Self> {
        let rhs = self.cents_operand(value.into())?;
        self.assert_same_currency(&rhs)?;
        self.materialize(&self.exact_value() - &rhs.exact_value())
    }

    /// Multiply by a dimensionless exact scalar, quantized once.
    pub fn multiply(&self, value: impl IntoRational) -> MoneyResult<Self> {
        let factor = value.into_rational()?;
        self.materialize(&self.exact_value() * &factor)
    }

    /// Divide by a dimensionless exact scalar, quantized once.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the divisor is exactly zero.
    pub fn divide(&self, value: impl IntoRational) -> MoneyResult<Self> {
        let divisor = value.into_rational()?;
        let quotient = self.exact_value().checked_div(&divisor)?;
        self.materialize(quotient)
    }

    /// Re-express the value at a different scale, quantizing once.
    ///
    /// Increasing the scale multiplies the minor-unit count by `10^Δ`
    /// exactly; decreasing it divides and rounds under this value's mode.
    pub fn convert_to_scale(&self, new_scale: u32) -> MoneyResult<Self> {
        Ok(Self {
            amount: quantize_i64(&self.exact_value(), new_scale, self.rounding)?,
            scale: new_scale,
            currency: self.currency,
            rounding: self.rounding,
            tax: self.tax.clone(),
        })
    }

    // ========================================================================
    // Display helpers
    // ========================================================================

    /// Render with grouped thousands, e.g. `1,234.57` for two decimals.
    ///
    /// The value is re-quantized once to `decimals` digits under this value's
    /// rounding mode before grouping.
    pub fn to_number_format(
        &self,
        decimals: u32,
        decimal_separator: char,
        thousands_separator: char,
    ) -> MoneyResult<String> {
        let count = quantize_i64(&self.exact_value(), decimals, self.rounding)?;
        let plain = format_scaled(count, decimals);
        Ok(crate::interfaces::group_thousands(
            &plain,
            decimal_separator,
            thousands_separator,
        ))
    }

    /// Delegate display to a formatting collaborator.
    ///
    /// The core supplies only the exact decimal amount and the currency; all
    /// locale logic belongs to the formatter.
    pub fn format_with(&self, formatter: &dyn CurrencyFormatter) -> String {
        formatter.format(&self.decimal_amount(), &self.currency)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// New value with the given exact result, rounded once at this scale.
    ///
    /// The receiver's currency, scale, rounding mode, and tax capability all
    /// carry over to the result.
    pub(crate) fn materialize(&self, exact: Rational) -> MoneyResult<Self> {
        Ok(Self {
            amount: quantize_i64(&exact, self.scale, self.rounding)?,
            scale: self.scale,
            currency: self.currency,
            rounding: self.rounding,
            tax: self.tax.clone(),
        })
    }

    /// Zero with the receiver's currency, scale, and rounding mode.
    pub(crate) fn zero_like(&self) -> Self {
        Self {
            amount: 0,
            scale: self.scale,
            currency: self.currency,
            rounding: self.rounding,
            tax: self.tax.clone(),
        }
    }

    fn assert_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            });
        }
        Ok(())
    }

    /// Coerce a binary-operation operand; scalars become minor-unit counts at
    /// the receiver's scale.
    fn operand(&self, input: MoneyInput) -> MoneyResult<Self> {
        match input {
            MoneyInput::Money(money) => Ok(money),
            MoneyInput::Record(data) => Self::from_data(data),
            MoneyInput::Minor(amount) => Ok(self.sibling(amount)),
            MoneyInput::Text(text) => {
                let count: Rational = text.parse()?;
                Ok(self.sibling(quantize_i64(&count, 0, self.rounding)?))
            },
            MoneyInput::Decimal(decimal) => {
                let value = Rational::from_decimal(decimal);
                Ok(self.sibling(quantize_i64(&value, self.scale, self.rounding)?))
            },
        }
    }

    /// Coerce an operand for the cents variants; scalars are counts of the
    /// currency's standard minor unit.
    fn cents_operand(&self, input: MoneyInput) -> MoneyResult<Self> {
        match input {
            MoneyInput::Minor(amount) => Self::from_cents(amount, self.currency.code()),
            MoneyInput::Text(text) => {
                let count: Rational = text.parse()?;
                Self::from_cents(
                    quantize_i64(&count, 0, self.rounding)?,
                    self.currency.code(),
                )
            },
            other => self.operand(other),
        }
    }

    /// Same currency, scale, and rounding as the receiver; no tax capability.
    fn sibling(&self, amount: i64) -> Self {
        Self {
            amount,
            scale: self.scale,
            currency: self.currency,
            rounding: self.rounding,
            tax: None,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// Two values are equal iff their minor-unit counts and currencies match.
/// Scale participates only through its effect on the count; the rounding mode
/// and any attached tax capability are auxiliary, not identity.
impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency == other.currency
    }
}

impl Eq for Money {}

impl std::hash::Hash for Money {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("amount", &self.amount)
            .field("scale", &self.scale)
            .field("currency", &self.currency.code())
            .field("rounding", &self.rounding)
            .field("tax", &self.tax.is_some())
            .finish()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decimal_amount())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_data().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = MoneyData::deserialize(deserializer)?;
        Money::from_data(data).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_and_accessors() {
        let money = Money::of(12345, "EUR", 4).unwrap();
        assert_eq!(money.amount(), 12345);
        assert_eq!(money.scale(), 4);
        assert_eq!(money.currency().code(), "EUR");
        assert_eq!(money.decimal_amount(), "1.2345");
    }

    #[test]
    fn test_decimal_amount_at_large_scale() {
        let tiny = Money::of(1, "EUR", 19).unwrap();
        assert_eq!(tiny.decimal_amount(), "0.0000000000000000001");
        assert_eq!(tiny.to_string(), "0.0000000000000000001");

        let negative = Money::of(-1, "EUR", 19).unwrap();
        assert_eq!(negative.decimal_amount(), "-0.0000000000000000001");
    }

    #[test]
    fn test_unknown_currency() {
        assert_eq!(
            Money::of(100, "XYZ", 2),
            Err(MoneyError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1500, "EUR").unwrap();
        assert_eq!(money.amount(), 1500);
        assert_eq!(money.scale(), 2);
        assert_eq!(money.decimal_amount(), "15.00");
    }

    #[test]
    fn test_from_decimal_is_exact() {
        let money = Money::from_decimal("15.00", "EUR").unwrap();
        assert_eq!(money.amount(), 1500);

        // No float round-trip: 0.29 stays 29 cents
        let tricky = Money::from_decimal("0.29", "EUR").unwrap();
        assert_eq!(tricky.amount(), 29);

        assert!(Money::from_decimal("not money", "EUR").is_err());
    }

    #[test]
    fn test_parse_variants() {
        let source = Money::of(252, "USD", 2).unwrap();
        let copied = Money::parse(&source, None).unwrap();
        assert_eq!(copied.amount(), 252);
        assert_eq!(copied.currency().code(), "USD");

        let from_int = Money::parse(252, None).unwrap();
        assert_eq!(from_int.amount(), 252);
        assert_eq!(from_int.currency().code(), "EUR");

        let from_text = Money::parse("252", Some("GBP")).unwrap();
        assert_eq!(from_text.amount(), 252);
        assert_eq!(from_text.currency().code(), "GBP");

        let from_record = Money::parse(
            MoneyData {
                amount: 990,
                currency: "CHF".to_string(),
            },
            None,
        )
        .unwrap();
        assert_eq!(from_record.amount(), 990);
        assert_eq!(from_record.currency().code(), "CHF");

        let from_decimal = Money::parse(rust_decimal::Decimal::new(252, 2), None).unwrap();
        assert_eq!(from_decimal.amount(), 252);
    }

    #[test]
    fn test_add_identity() {
        let money = Money::of(1000, "EUR", 2).unwrap();
        assert_eq!(money.add(0).unwrap().amount(), 1000);
    }

    #[test]
    fn test_add_subtract_round_trip() {
        let x = Money::of(1000, "EUR", 2).unwrap();
        let y = Money::of(333, "EUR", 2).unwrap();
        let round_trip = x.add(&y).unwrap().subtract(&y).unwrap();
        assert_eq!(round_trip.amount(), x.amount());
    }

    #[test]
    fn test_add_cross_scale() {
        // 1.00 EUR + 0.1000 EUR = 1.10 EUR at the receiver's scale
        let coarse = Money::of(100, "EUR", 2).unwrap();
        let fine = Money::of(1000, "EUR", 4).unwrap();
        assert_eq!(coarse.add(&fine).unwrap().amount(), 110);
    }

    #[test]
    fn test_currency_mismatch() {
        let eur = Money::of(1000, "EUR", 2).unwrap();
        let usd = Money::of(500, "USD", 2).unwrap();
        let mismatch = Err(MoneyError::CurrencyMismatch {
            left: "EUR".to_string(),
            right: "USD".to_string(),
        });

        assert_eq!(eur.add(&usd), mismatch);
        assert_eq!(eur.subtract(&usd), mismatch);
        assert_eq!(eur.add_cents(&usd), mismatch);
        assert_eq!(eur.subtract_cents(&usd), mismatch);
    }

    #[test]
    fn test_multiply_half_up_at_scale_4() {
        let money = Money::of(12345, "EUR", 4).unwrap();
        assert_eq!(money.multiply("0.5").unwrap().amount(), 6173);
    }

    #[test]
    fn test_multiply_half_up_at_scale_2() {
        let money = Money::of(12345, "EUR", 2).unwrap();
        assert_eq!(money.multiply("0.5").unwrap().amount(), 6173);
    }

    #[test]
    fn test_divide() {
        let money = Money::of(100, "EUR", 2).unwrap();
        assert_eq!(money.divide(3).unwrap().amount(), 33);
        assert_eq!(money.divide(0), Err(MoneyError::DivisionByZero));
        assert_eq!(money.divide("0.0"), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_single_rounding_vs_chained_money_ops() {
        // Money rounds per operation; the rational view rounds once
        let money = Money::of(100, "EUR", 2).unwrap();
        let chained = money.divide(3).unwrap().multiply(3).unwrap();
        assert_eq!(chained.amount(), 99);

        let exact = money
            .to_rational()
            .divide(3)
            .unwrap()
            .multiply(3)
            .unwrap();
        assert_eq!(Money::from_rational(&exact, 2).unwrap().amount(), 100);
    }

    #[test]
    fn test_add_cents_on_finer_scale() {
        // 1.2345 EUR + 10 cents = 1.3345 EUR
        let money = Money::of(12345, "EUR", 4).unwrap();
        assert_eq!(money.add_cents(10).unwrap().amount(), 13345);
        assert_eq!(money.subtract_cents(10).unwrap().amount(), 11345);
    }

    #[test]
    fn test_convert_to_scale() {
        let fine = Money::of(120001, "EUR", 4).unwrap();
        let coarse = fine.convert_to_scale(2).unwrap();
        assert_eq!(coarse.amount(), 1200);
        assert_eq!(coarse.scale(), 2);

        let widened = Money::of(1201, "EUR", 2).unwrap().convert_to_scale(4).unwrap();
        assert_eq!(widened.amount(), 120100);
    }

    #[test]
    fn test_is_zero_after_netting() {
        let money = Money::of(777, "EUR", 2).unwrap();
        assert!(!money.is_zero());
        assert!(money.subtract(&money).unwrap().is_zero());
        assert!(Money::zero("EUR").unwrap().is_zero());
    }

    #[test]
    fn test_equality_ignores_scale_and_rounding() {
        let a = Money::of(100, "EUR", 2).unwrap();
        let b = Money::of(100, "EUR", 4).unwrap();
        let c = Money::of(100, "EUR", 2)
            .unwrap()
            .with_rounding(RoundingMode::HalfEven);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, Money::of(100, "USD", 2).unwrap());
        assert_ne!(a, Money::of(101, "EUR", 2).unwrap());
    }

    #[test]
    fn test_rounding_mode_is_per_value() {
        let half_even = Money::of(12345, "EUR", 4)
            .unwrap()
            .with_rounding(RoundingMode::HalfEven);
        // 6172.5 -> 6172 under banker's rounding
        assert_eq!(half_even.multiply("0.5").unwrap().amount(), 6172);

        // The default value is untouched
        let default = Money::of(12345, "EUR", 4).unwrap();
        assert_eq!(default.multiply("0.5").unwrap().amount(), 6173);
    }

    #[test]
    fn test_display_and_number_format() {
        let money = Money::of(123457, "EUR", 2).unwrap();
        assert_eq!(money.to_string(), "1234.57");
        assert_eq!(
            money.to_number_format(2, '.', ',').unwrap(),
            "1,234.57"
        );
        assert_eq!(
            money.to_number_format(0, '.', ',').unwrap(),
            "1,235"
        );
    }

    #[test]
    fn test_data_projection_round_trip() {
        let money = Money::of(252, "EUR", 2).unwrap();
        let data = money.to_data();
        assert_eq!(data.amount, 252);
        assert_eq!(data.currency, "EUR");
        assert_eq!(Money::from_data(data).unwrap(), money);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let money = Money::of(252, "EUR", 2).unwrap();
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, r#"{"amount":252,"currency":"EUR"}"#);
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }
}
