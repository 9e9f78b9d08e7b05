// ============================================================================
// Exact Money Library
// Immutable money values with exact rational arithmetic
// ============================================================================

//! # Exact Money
//!
//! An immutable monetary value type with exact decimal semantics, free of
//! floating-point drift and double-rounding artifacts across chained
//! operations.
//!
//! ## Features
//!
//! - **Exact rational intermediates** backed by arbitrary-precision integers
//! - **Single-point rounding**: every public operation quantizes exactly once
//! - **Per-value rounding modes** (half-up default), no global mutable state
//! - **Tax derivation**: tax amount, gross/net conversion, inclusive-tax split
//! - **Lossless escape hatch** via `RationalMoney` for multi-step compositions
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), exact_money::numeric::MoneyError> {
//! // 1.2345 EUR, four decimal digits
//! let price = Money::of(12345, "EUR", 4)?;
//!
//! // 6172.5 minor units round half-up to 6173
//! assert_eq!(price.multiply("0.5")?.amount(), 6173);
//!
//! // Tax math composes exactly and rounds once
//! let item = Money::of(252, "EUR", 2)?.with_tax(Arc::new(FlatTax::new("9.21")));
//! assert_eq!(item.after_tax(1)?.amount(), 275);
//! assert_eq!(item.tax_amount(80)?.to_string(), "18.57");
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Currency, Money, MoneyData, MoneyInput, RationalInput, RationalMoney};
    pub use crate::interfaces::{CurrencyFormatter, FlatTax, SimpleFormatter, Tax};
    pub use crate::numeric::{IntoRational, MoneyError, MoneyResult, Rational, RoundingMode};
}
