// ============================================================================
// Numeric Errors
// Error types for exact monetary arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during monetary arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Binary operation on two values with different currencies
    CurrencyMismatch {
        /// Currency code of the left-hand operand
        left: String,
        /// Currency code of the right-hand operand
        right: String,
    },
    /// Attempted division by an exactly-zero divisor
    DivisionByZero,
    /// Currency code not present in the registry
    UnknownCurrency(String),
    /// Materialized amount does not fit the minor-unit integer range
    Overflow,
    /// Input string or value could not be parsed as an exact amount
    InvalidAmount(String),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::CurrencyMismatch { left, right } => {
                write!(f, "currency mismatch: {} vs {}", left, right)
            },
            MoneyError::DivisionByZero => write!(f, "division by zero"),
            MoneyError::UnknownCurrency(code) => {
                write!(f, "unknown currency: {}", code)
            },
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: amount exceeded minor-unit range")
            },
            MoneyError::InvalidAmount(input) => {
                write!(f, "invalid amount: could not parse {:?}", input)
            },
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;
