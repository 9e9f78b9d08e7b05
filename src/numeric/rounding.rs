// ============================================================================
// Rounding Policy
// Quantization of exact fractions to a fixed decimal scale
// ============================================================================
//
// This is the only place a value can lose precision. Every public Money
// operation computes exactly in the rational domain and calls `quantize`
// exactly once on the final result; nothing else in the crate rounds.

use super::errors::{MoneyError, MoneyResult};
use super::rational::{pow10, Rational};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule for quantizing an exact fraction to an integer number of minor units.
///
/// The default, `HalfUp`, rounds exact halves away from zero: 6172.5 becomes
/// 6173 and -6172.5 becomes -6173.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// To nearest; exact halves away from zero
    #[default]
    HalfUp,
    /// To nearest; exact halves toward zero
    HalfDown,
    /// To nearest; exact halves to the even neighbor (banker's rounding)
    HalfEven,
}

/// Quantize an exact fraction to an integer count of `10^-scale` units.
///
/// Computes `value * 10^scale` exactly, then rounds the result to an integer
/// under `mode`. Exact results pass through untouched regardless of mode.
pub fn quantize(value: &Rational, scale: u32, mode: RoundingMode) -> BigInt {
    let ratio = value.as_ratio();
    let numer = ratio.numer() * pow10(scale);
    let denom = ratio.denom();

    // Truncating division; remainder carries the sign of the true result.
    let (quotient, remainder) = numer.div_rem(denom);
    if remainder.is_zero() {
        return quotient;
    }

    let negative = remainder.is_negative();
    let away = if negative {
        &quotient - 1
    } else {
        &quotient + 1
    };

    match mode {
        RoundingMode::Down => quotient,
        RoundingMode::Up => away,
        RoundingMode::Floor => {
            if negative {
                away
            } else {
                quotient
            }
        },
        RoundingMode::Ceiling => {
            if negative {
                quotient
            } else {
                away
            }
        },
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            let twice = remainder.abs() * BigInt::from(2);
            match twice.cmp(denom) {
                std::cmp::Ordering::Greater => away,
                std::cmp::Ordering::Less => quotient,
                std::cmp::Ordering::Equal => match mode {
                    RoundingMode::HalfUp => away,
                    RoundingMode::HalfDown => quotient,
                    _ => {
                        if quotient.is_even() {
                            quotient
                        } else {
                            away
                        }
                    },
                },
            }
        },
    }
}

/// Quantize into the i64 minor-unit range used by materialized Money values.
///
/// # Errors
/// Returns `Overflow` if the rounded count does not fit an i64.
pub fn quantize_i64(value: &Rational, scale: u32, mode: RoundingMode) -> MoneyResult<i64> {
    quantize(value, scale, mode)
        .to_i64()
        .ok_or(MoneyError::Overflow)
}

/// Render an integer minor-unit count as a decimal string with exactly
/// `scale` fractional digits.
///
/// Splits the digit string rather than dividing, so scales beyond the i64
/// power-of-ten range render fine.
pub(crate) fn format_scaled(amount: i64, scale: u32) -> String {
    if scale == 0 {
        return amount.to_string();
    }
    let digits = amount.unsigned_abs().to_string();
    // At least one integer digit, so 0.xx keeps its leading zero
    let width = scale as usize + 1;
    let padded = format!("{:0>width$}", digits, width = width);
    let split = padded.len() - scale as usize;
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}.{}", sign, &padded[..split], &padded[split..])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str, scale: u32, mode: RoundingMode) -> i64 {
        quantize_i64(&s.parse().unwrap(), scale, mode).unwrap()
    }

    #[test]
    fn test_exact_values_ignore_mode() {
        for mode in [
            RoundingMode::Up,
            RoundingMode::Down,
            RoundingMode::Ceiling,
            RoundingMode::Floor,
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
        ] {
            assert_eq!(q("12.34", 2, mode), 1234);
            assert_eq!(q("-12.34", 2, mode), -1234);
        }
    }

    #[test]
    fn test_half_up_rounds_halves_away_from_zero() {
        assert_eq!(q("6172.5", 0, RoundingMode::HalfUp), 6173);
        assert_eq!(q("-6172.5", 0, RoundingMode::HalfUp), -6173);
        assert_eq!(q("6172.4999", 0, RoundingMode::HalfUp), 6172);
        assert_eq!(q("6172.5001", 0, RoundingMode::HalfUp), 6173);
    }

    #[test]
    fn test_half_down() {
        assert_eq!(q("6172.5", 0, RoundingMode::HalfDown), 6172);
        assert_eq!(q("-6172.5", 0, RoundingMode::HalfDown), -6172);
        assert_eq!(q("6172.51", 0, RoundingMode::HalfDown), 6173);
    }

    #[test]
    fn test_half_even() {
        assert_eq!(q("2.5", 0, RoundingMode::HalfEven), 2);
        assert_eq!(q("3.5", 0, RoundingMode::HalfEven), 4);
        assert_eq!(q("-2.5", 0, RoundingMode::HalfEven), -2);
        assert_eq!(q("-3.5", 0, RoundingMode::HalfEven), -4);
    }

    #[test]
    fn test_directed_modes() {
        assert_eq!(q("1.01", 0, RoundingMode::Up), 2);
        assert_eq!(q("-1.01", 0, RoundingMode::Up), -2);
        assert_eq!(q("1.99", 0, RoundingMode::Down), 1);
        assert_eq!(q("-1.99", 0, RoundingMode::Down), -1);
        assert_eq!(q("1.01", 0, RoundingMode::Ceiling), 2);
        assert_eq!(q("-1.01", 0, RoundingMode::Ceiling), -1);
        assert_eq!(q("1.99", 0, RoundingMode::Floor), 1);
        assert_eq!(q("-1.01", 0, RoundingMode::Floor), -2);
    }

    #[test]
    fn test_scale_shifts_the_rounding_point() {
        // 1/3 at four digits
        let third = Rational::new(1, 3).unwrap();
        assert_eq!(
            quantize(&third, 4, RoundingMode::HalfUp),
            BigInt::from(3333)
        );
        // 2/3 rounds up on the last digit
        let two_thirds = Rational::new(2, 3).unwrap();
        assert_eq!(
            quantize(&two_thirds, 4, RoundingMode::HalfUp),
            BigInt::from(6667)
        );
    }

    #[test]
    fn test_quantize_i64_overflow() {
        let huge = Rational::from_integer(i64::MAX) * Rational::from_integer(10);
        assert_eq!(
            quantize_i64(&huge, 0, RoundingMode::HalfUp),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_format_scaled() {
        assert_eq!(format_scaled(1234, 2), "12.34");
        assert_eq!(format_scaled(-1234, 2), "-12.34");
        assert_eq!(format_scaled(5, 2), "0.05");
        assert_eq!(format_scaled(-5, 2), "-0.05");
        assert_eq!(format_scaled(42, 0), "42");
        assert_eq!(format_scaled(688023, 4), "68.8023");
    }

    #[test]
    fn test_format_scaled_beyond_i64_power_range() {
        // 10^19 overflows i64; rendering must not depend on computing it
        assert_eq!(format_scaled(1, 19), "0.0000000000000000001");
        assert_eq!(format_scaled(-1, 19), "-0.0000000000000000001");
        assert_eq!(
            format_scaled(i64::MAX, 20),
            "0.09223372036854775807"
        );
        assert_eq!(format_scaled(1234, 25), "0.0000000000000000000001234");
    }
}
