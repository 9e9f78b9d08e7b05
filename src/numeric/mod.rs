// ============================================================================
// Numeric Module
// Exact rational arithmetic and single-point rounding
// ============================================================================
//
// This module provides:
// - Rational: exact fraction arithmetic (no rounding, no fixed-width overflow)
// - RoundingMode + quantize: the one place precision is allowed to be lost
// - MoneyError: error types for monetary operations
//
// Design principles:
// - No floating-point operations anywhere in the arithmetic path
// - All fallible operations return Result (no panics)
// - Every public Money operation quantizes exactly once, at the end

mod errors;
mod rational;
mod rounding;

pub use errors::{MoneyError, MoneyResult};
pub use rational::{IntoRational, Rational};
pub use rounding::{quantize, quantize_i64, RoundingMode};

pub(crate) use rational::pow10;
pub(crate) use rounding::format_scaled;
