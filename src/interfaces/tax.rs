// ============================================================================
// Tax Capability Interface
// Defines the contract for tax collaborators attached to Money values
// ============================================================================

/// Tax capability contract.
///
/// The arithmetic core consumes only [`Tax::rate`]; the descriptive fields
/// exist for callers building invoices or diagnostics and are never parsed.
pub trait Tax: Send + Sync {
    /// The tax rate as an exact decimal percentage string, e.g. "9.21" for
    /// 9.21%.
    fn rate(&self) -> &str;

    /// Human-readable description of the tax
    fn description(&self) -> &str {
        ""
    }

    /// Country the tax applies in
    fn country(&self) -> &str {
        ""
    }

    /// Currency the tax is levied in
    fn currency(&self) -> &str {
        ""
    }
}

/// Simple flat-rate tax capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTax {
    rate: String,
    description: String,
    country: String,
    currency: String,
}

impl FlatTax {
    /// Create a flat tax from a decimal percentage string.
    pub fn new(rate: impl Into<String>) -> Self {
        Self {
            rate: rate.into(),
            description: String::new(),
            country: String::new(),
            currency: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the levy currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

impl Tax for FlatTax {
    fn rate(&self) -> &str {
        &self.rate
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_tax_builder() {
        let vat = FlatTax::new("9.21")
            .with_description("Reduced VAT")
            .with_country("The Netherlands")
            .with_currency("EUR");

        assert_eq!(vat.rate(), "9.21");
        assert_eq!(vat.description(), "Reduced VAT");
        assert_eq!(vat.country(), "The Netherlands");
        assert_eq!(vat.currency(), "EUR");
    }

    #[test]
    fn test_descriptive_fields_default_empty() {
        struct RateOnly;
        impl Tax for RateOnly {
            fn rate(&self) -> &str {
                "6"
            }
        }

        let tax = RateOnly;
        assert_eq!(tax.rate(), "6");
        assert_eq!(tax.description(), "");
        assert_eq!(tax.country(), "");
    }
}
