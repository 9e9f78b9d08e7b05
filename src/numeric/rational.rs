// ============================================================================
// Rational Engine
// Arbitrary-precision fraction arithmetic with no rounding
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Exact fraction backed by arbitrary-precision integers.
///
/// All arithmetic is exact: no rounding ever occurs inside this type, and there
/// is no overflow at a fixed width. The only fallible operation is division,
/// which fails on an exactly-zero divisor.
///
/// # Example
/// ```ignore
/// use exact_money::numeric::Rational;
///
/// let half: Rational = "0.5".parse()?;
/// let third = Rational::new(1, 3)?;
/// let exact = half.checked_div(third)?; // 3/2, no precision lost
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

/// Compute 10^n as a big integer.
pub(crate) fn pow10(n: u32) -> BigInt {
    num_traits::pow(BigInt::from(10), n as usize)
}

impl Rational {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Exact zero.
    #[inline]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// Create from a numerator/denominator pair.
    ///
    /// The fraction is reduced to lowest terms on construction.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> MoneyResult<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numer.into(), denom)))
    }

    /// Create from an integer value.
    #[inline]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Exact value of `amount` minor units at `scale` fractional digits.
    #[inline]
    pub(crate) fn scaled(amount: i64, scale: u32) -> Self {
        Self(BigRational::new(BigInt::from(amount), pow10(scale)))
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries (ingesting externally supplied
    /// decimal values). The conversion is exact: the decimal's unscaled
    /// mantissa becomes the numerator over `10^scale`.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let mantissa = BigInt::from(d.mantissa());
        Self(BigRational::new(mantissa, pow10(d.scale())))
    }

    /// Convert from an `f64`, losing whatever precision the float already lost.
    ///
    /// Binary floats cannot represent most decimal fractions; `0.1f64` is not
    /// one tenth. Callers who need exact semantics must pass decimal strings or
    /// integers instead. Returns `None` for NaN and infinities.
    pub fn from_f64_lossy(value: f64) -> Option<Self> {
        let exact = BigRational::from_float(value)?;
        tracing::debug!(value, "lossy float converted to rational");
        Some(Self(exact))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The numerator of the reduced fraction.
    #[inline]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// The denominator of the reduced fraction (always positive).
    #[inline]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Check if the fraction is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the fraction is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Check if the fraction is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Return the fraction in lowest terms.
    ///
    /// The representation is already kept reduced by every constructor and
    /// arithmetic operation, so this is a structural no-op; it exists so
    /// callers can state the normalization explicitly.
    #[inline]
    pub fn simplified(&self) -> Self {
        self.clone()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is exactly zero.
    pub fn checked_div(&self, rhs: &Self) -> MoneyResult<Self> {
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Exact reciprocal.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the fraction is exactly zero.
    pub fn checked_recip(&self) -> MoneyResult<Self> {
        if self.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    /// Access the underlying `BigRational`.
    #[inline]
    pub(crate) fn as_ratio(&self) -> &BigRational {
        &self.0
    }
}

// ============================================================================
// Operand Conversion
// ============================================================================

/// Conversion into an exact fraction, dispatched once at the API boundary.
///
/// Money and RationalMoney arithmetic accept any operand implementing this
/// trait: integers, exact decimal strings, `rust_decimal::Decimal`, or another
/// `Rational`. Floats are deliberately absent; use
/// [`Rational::from_f64_lossy`] when a lossy conversion is genuinely intended.
pub trait IntoRational {
    /// Convert into an exact fraction.
    fn into_rational(self) -> MoneyResult<Rational>;
}

impl IntoRational for Rational {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        Ok(self)
    }
}

impl IntoRational for &Rational {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        Ok(self.clone())
    }
}

impl IntoRational for i64 {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        Ok(Rational::from_integer(self))
    }
}

impl IntoRational for i32 {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        Ok(Rational::from_integer(self))
    }
}

impl IntoRational for u32 {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        Ok(Rational::from_integer(self))
    }
}

impl IntoRational for BigInt {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        Ok(Rational::from_integer(self))
    }
}

impl IntoRational for rust_decimal::Decimal {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        Ok(Rational::from_decimal(self))
    }
}

impl IntoRational for &str {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        self.parse()
    }
}

impl IntoRational for String {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        self.as_str().parse()
    }
}

impl IntoRational for (i64, i64) {
    #[inline]
    fn into_rational(self) -> MoneyResult<Rational> {
        Rational::new(self.0, self.1)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigRational> for Rational {
    #[inline]
    fn from(ratio: BigRational) -> Self {
        Self(ratio)
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Add for Rational {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Rational {
    type Err = MoneyError;

    /// Parse from an exact decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "123.456" -> 123456/1000
    /// - "-0.001" -> -1/1000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let original = s;
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::InvalidAmount(original.to_string()));
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = if let Some(pos) = s.find('.') {
            (&s[..pos], &s[pos + 1..])
        } else {
            (s, "")
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(MoneyError::InvalidAmount(original.to_string()));
        }
        let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !digits_only(int_str) || !digits_only(frac_str) {
            return Err(MoneyError::InvalidAmount(original.to_string()));
        }

        let int_val: BigInt = if int_str.is_empty() {
            BigInt::zero()
        } else {
            int_str
                .parse()
                .map_err(|_| MoneyError::InvalidAmount(original.to_string()))?
        };
        let frac_val: BigInt = if frac_str.is_empty() {
            BigInt::zero()
        } else {
            frac_str
                .parse()
                .map_err(|_| MoneyError::InvalidAmount(original.to_string()))?
        };

        let scale = pow10(frac_str.len() as u32);
        let mut numer = int_val * &scale + frac_val;
        if is_negative {
            numer = -numer;
        }

        Ok(Self(BigRational::new(numer, scale)))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        let x: Rational = "123".parse().unwrap();
        assert_eq!(x, Rational::from_integer(123));

        let y: Rational = "-42".parse().unwrap();
        assert_eq!(y, Rational::from_integer(-42));
    }

    #[test]
    fn test_parse_decimal() {
        let x: Rational = "0.5".parse().unwrap();
        assert_eq!(x, Rational::new(1, 2).unwrap());

        let y: Rational = "-0.001".parse().unwrap();
        assert_eq!(y, Rational::new(-1, 1000).unwrap());

        let z: Rational = "9.21".parse().unwrap();
        assert_eq!(z, Rational::new(921, 100).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Rational>().is_err());
        assert!("abc".parse::<Rational>().is_err());
        assert!("1.2.3".parse::<Rational>().is_err());
        assert!("1e5".parse::<Rational>().is_err());
        assert!(".".parse::<Rational>().is_err());
    }

    #[test]
    fn test_reduction() {
        let x = Rational::new(50, 100).unwrap();
        assert_eq!(x.numer(), &BigInt::from(1));
        assert_eq!(x.denom(), &BigInt::from(2));
        assert_eq!(x.simplified(), x);
    }

    #[test]
    fn test_exact_arithmetic() {
        let third = Rational::new(1, 3).unwrap();
        let three = Rational::from_integer(3);

        // (1/3) * 3 == 1, exactly
        let product = third.clone() * three;
        assert_eq!(product, Rational::from_integer(1));

        let sum = Rational::new(1, 6).unwrap() + third;
        assert_eq!(sum, Rational::new(1, 2).unwrap());
    }

    #[test]
    fn test_division_by_zero() {
        let x = Rational::from_integer(1);
        assert_eq!(
            x.checked_div(&Rational::zero()),
            Err(MoneyError::DivisionByZero)
        );
        assert_eq!(Rational::new(1, 0), Err(MoneyError::DivisionByZero));
        assert_eq!(Rational::zero().checked_recip(), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Rational::zero().is_zero());
        assert!(Rational::from_integer(5).is_positive());
        assert!(Rational::from_integer(-5).is_negative());

        let netted = Rational::new(1, 3).unwrap() - Rational::new(1, 3).unwrap();
        assert!(netted.is_zero());
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        let x = Rational::from_decimal(d);
        assert_eq!(x, Rational::new(12345, 100).unwrap());
    }

    #[test]
    fn test_from_f64_lossy() {
        // 0.5 is exactly representable in binary
        let half = Rational::from_f64_lossy(0.5).unwrap();
        assert_eq!(half, Rational::new(1, 2).unwrap());

        // 0.1 is not: the conversion surfaces the float's true value
        let tenth = Rational::from_f64_lossy(0.1).unwrap();
        assert_ne!(tenth, Rational::new(1, 10).unwrap());

        assert!(Rational::from_f64_lossy(f64::NAN).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_integer(42).to_string(), "42");
        assert_eq!(Rational::new(1, 2).unwrap().to_string(), "1/2");
        assert_eq!(Rational::new(-3, 4).unwrap().to_string(), "-3/4");
    }

    #[test]
    fn test_into_rational_operands() {
        assert_eq!(5i64.into_rational().unwrap(), Rational::from_integer(5));
        assert_eq!(
            "0.25".into_rational().unwrap(),
            Rational::new(1, 4).unwrap()
        );
        assert_eq!((2, 8).into_rational().unwrap(), Rational::new(1, 4).unwrap());
        assert!("bogus".into_rational().is_err());
    }
}
