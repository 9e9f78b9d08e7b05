// ============================================================================
// Tax Extension
// Tax derivation on Money, composed exactly with one terminal rounding
// ============================================================================

use crate::domain::money::Money;
use crate::interfaces::Tax;
use crate::numeric::{pow10, quantize, IntoRational, MoneyResult, Rational};
use std::sync::Arc;

/// Tax methods on [`Money`].
///
/// All tax math runs in the exact rational domain and rounds exactly once at
/// the end of each public call. Without an attached capability the operations
/// degrade to documented identities: the rate is exact zero, the tax amount is
/// a zero value, and the gross/net conversions return the value unchanged.
impl Money {
    /// Attach a tax capability, builder-style.
    ///
    /// Returns a new value; the capability is auxiliary and takes no part in
    /// equality or serialization. Arithmetic results keep the receiver's
    /// capability, so derived values stay taxable.
    pub fn with_tax(self, tax: Arc<dyn Tax>) -> Self {
        self.attach_tax(tax)
    }

    /// The tax rate as an exact fraction.
    ///
    /// The capability's percentage string is divided by 100 exactly, then
    /// quantized to `scale + 2` fractional digits before use. The two extra
    /// digits keep the rate faithful when it later scales large quantities.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if the capability's rate string is not an
    /// exact decimal.
    pub fn tax_rate(&self) -> MoneyResult<Rational> {
        let Some(tax) = self.tax_capability() else {
            return Ok(Rational::zero());
        };
        let percentage: Rational = tax.rate().parse()?;
        let rate = percentage.checked_div(&Rational::from_integer(100))?;

        let digits = self.scale() + 2;
        let units = quantize(&rate, digits, self.rounding());
        Rational::new(units, pow10(digits))
    }

    /// The tax rate rendered with `scale + 2` fractional digits.
    pub fn tax_rate_decimal(&self) -> MoneyResult<String> {
        let digits = self.scale() + 2;
        let units = quantize(&self.tax_rate()?, digits, self.rounding());
        // The quantized rate has at most scale + 2 digits, so this is exact
        let mut text = units.to_string();
        let negative = text.starts_with('-');
        if negative {
            text.remove(0);
        }
        let width = digits as usize + 1;
        let padded = format!("{:0>width$}", text, width = width);
        let split = padded.len() - digits as usize;
        let sign = if negative { "-" } else { "" };
        Ok(format!("{}{}.{}", sign, &padded[..split], &padded[split..]))
    }

    /// Tax payable on this net value for the given quantity.
    ///
    /// `amount * rate * quantity`, quantized once to this value's scale.
    /// Without a capability, returns zero in this currency.
    pub fn tax_amount(&self, quantity: impl IntoRational) -> MoneyResult<Self> {
        if self.tax_capability().is_none() {
            return Ok(self.zero_like());
        }
        let rate = self.tax_rate()?;
        let quantity = quantity.into_rational()?;
        self.materialize(&(&self.exact_value() * &rate) * &quantity)
    }

    /// Gross value: `amount * (rate + 1) * quantity`, quantized once.
    /// Without a capability, returns the value unchanged.
    pub fn after_tax(&self, quantity: impl IntoRational) -> MoneyResult<Self> {
        if self.tax_capability().is_none() {
            return Ok(self.clone());
        }
        let factor = self.tax_rate()? + Rational::from_integer(1);
        let quantity = quantity.into_rational()?;
        self.materialize(&(&self.exact_value() * &factor) * &quantity)
    }

    /// Net value of this gross amount: `amount / (rate + 1)`, quantized once.
    /// Without a capability, returns the value unchanged.
    pub fn before_tax(&self) -> MoneyResult<Self> {
        if self.tax_capability().is_none() {
            return Ok(self.clone());
        }
        let divisor = self.tax_rate()? + Rational::from_integer(1);
        let net = self.exact_value().checked_div(&divisor)?;
        self.materialize(net)
    }

    /// Tax contained in this tax-inclusive value:
    /// `amount * rate / (rate + 1)`, quantized once.
    /// Without a capability, returns the value unchanged.
    pub fn tax_from_inclusive(&self) -> MoneyResult<Self> {
        if self.tax_capability().is_none() {
            return Ok(self.clone());
        }
        let rate = self.tax_rate()?;
        let divisor = &rate + &Rational::from_integer(1);
        let tax = (&self.exact_value() * &rate).checked_div(&divisor)?;
        self.materialize(tax)
    }
}

// ============================================================================
// Tests
// ============================================================================
