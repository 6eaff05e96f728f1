// ============================================================================
// Scalar
// A single integer or floating-point element with checked arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single numeric element: either an integer or a float.
///
/// Integer operands stay integral for `+ - * // %` and for `**` with a
/// non-negative exponent; any float operand promotes the result to a float,
/// and true division always produces a float.
///
/// Equality is numeric (`Int(1) == Float(1.0)`) and hashing agrees with it:
/// integral floats hash like the matching integer. NaN compares equal to NaN
/// so that `Scalar` can serve as a set or map key.
///
/// # Example
/// ```ignore
/// use numeric_container::numeric::Scalar;
///
/// let a = Scalar::Int(7);
/// let b = Scalar::Float(0.5);
/// assert_eq!(a.checked_add(b)?, Scalar::Float(7.5));
/// assert_eq!(a.checked_div(Scalar::Int(2))?, Scalar::Float(3.5));
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

// 2^63 as f64; the first float above the i64 range
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

const CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;

/// Convert a float to i64 if it is integral and in range.
#[inline]
fn integral_in_range(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if let Some(fi) = integral_in_range(f) {
        return Some(i.cmp(&fi));
    }
    if f >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if f < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    (i as f64).partial_cmp(&f)
}

impl Scalar {
    /// Zero (integer)
    pub const ZERO: Self = Self::Int(0);

    /// One (integer)
    pub const ONE: Self = Self::Int(1);

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        matches!(self, Self::Float(f) if f.is_nan())
    }

    /// The value as a float.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// The value as an integer, if it is integral and fits in an i64.
    ///
    /// Floats with a zero fractional part qualify.
    #[inline]
    pub fn integral_value(self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(i),
            Self::Float(f) => integral_in_range(f),
        }
    }

    /// Whether the value is a whole number (`1.0` is, `1.1` and `inf` are not).
    #[inline]
    pub fn is_integer(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.is_finite() && f.fract() == 0.0,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        match self {
            Self::Int(i) => i > 0,
            Self::Float(f) => f > 0.0,
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(i) => i < 0,
            Self::Float(f) => f < 0.0,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if an integer sum leaves the i64 range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_add(b).map(Self::Int).ok_or(NumericError::Overflow)
            },
            (a, b) => Ok(Self::Float(a.as_f64() + b.as_f64())),
        }
    }

    /// Checked subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_sub(b).map(Self::Int).ok_or(NumericError::Overflow)
            },
            (a, b) => Ok(Self::Float(a.as_f64() - b.as_f64())),
        }
    }

    /// Checked multiplication.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_mul(b).map(Self::Int).ok_or(NumericError::Overflow)
            },
            (a, b) => Ok(Self::Float(a.as_f64() * b.as_f64())),
        }
    }

    /// True division; always produces a float.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Floor division (rounds toward negative infinity).
    pub fn checked_floor_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                let q = a.checked_div(b).ok_or(NumericError::Overflow)?;
                let r = a.checked_rem(b).ok_or(NumericError::Overflow)?;
                if r != 0 && ((r < 0) != (b < 0)) {
                    Ok(Self::Int(q - 1))
                } else {
                    Ok(Self::Int(q))
                }
            },
            (a, b) => Ok(Self::Float((a.as_f64() / b.as_f64()).floor())),
        }
    }

    /// Remainder whose sign follows the divisor.
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                let r = a.checked_rem(b).ok_or(NumericError::Overflow)?;
                if r != 0 && ((r < 0) != (b < 0)) {
                    Ok(Self::Int(r + b))
                } else {
                    Ok(Self::Int(r))
                }
            },
            (a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                let r = a % b;
                if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
                    Ok(Self::Float(r + b))
                } else {
                    Ok(Self::Float(r))
                }
            },
        }
    }

    /// Exponentiation.
    ///
    /// Integer base with a non-negative integer exponent stays integral.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power
    /// - `Domain` for a negative base with a fractional exponent
    /// - `Overflow` if an integer power leaves the i64 range, or finite
    ///   operands give an infinite float
    pub fn checked_pow(self, exp: Self) -> NumericResult<Self> {
        match (self, exp) {
            (Self::Int(base), Self::Int(e)) if e >= 0 => match base {
                0 => Ok(Self::Int(if e == 0 { 1 } else { 0 })),
                1 => Ok(Self::Int(1)),
                -1 => Ok(Self::Int(if e % 2 == 0 { 1 } else { -1 })),
                _ => {
                    let e = u32::try_from(e).map_err(|_| NumericError::Overflow)?;
                    base.checked_pow(e).map(Self::Int).ok_or(NumericError::Overflow)
                },
            },
            (base, exp) => {
                let (b, x) = (base.as_f64(), exp.as_f64());
                if b == 0.0 && x < 0.0 {
                    return Err(NumericError::DivisionByZero);
                }
                if b < 0.0 && x.is_finite() && x.fract() != 0.0 {
                    return Err(NumericError::Domain(
                        "negative base cannot be raised to a fractional power",
                    ));
                }
                let out = b.powf(x);
                if out.is_infinite() && b.is_finite() && x.is_finite() {
                    return Err(NumericError::Overflow);
                }
                Ok(Self::Float(out))
            },
        }
    }

    /// Checked negation.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        match self {
            Self::Int(i) => i.checked_neg().map(Self::Int).ok_or(NumericError::Overflow),
            Self::Float(f) => Ok(Self::Float(-f)),
        }
    }

    /// Checked absolute value.
    #[inline]
    pub fn checked_abs(self) -> NumericResult<Self> {
        match self {
            Self::Int(i) => i.checked_abs().map(Self::Int).ok_or(NumericError::Overflow),
            Self::Float(f) => Ok(Self::Float(f.abs())),
        }
    }

    // ========================================================================
    // Bitwise Operations (integers only)
    // ========================================================================

    fn int_operands(self, rhs: Self) -> NumericResult<(i64, i64)> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Ok((a, b)),
            _ => Err(NumericError::Domain(
                "bitwise operations require integer operands",
            )),
        }
    }

    pub fn checked_bitand(self, rhs: Self) -> NumericResult<Self> {
        let (a, b) = self.int_operands(rhs)?;
        Ok(Self::Int(a & b))
    }

    pub fn checked_bitor(self, rhs: Self) -> NumericResult<Self> {
        let (a, b) = self.int_operands(rhs)?;
        Ok(Self::Int(a | b))
    }

    pub fn checked_bitxor(self, rhs: Self) -> NumericResult<Self> {
        let (a, b) = self.int_operands(rhs)?;
        Ok(Self::Int(a ^ b))
    }

    /// Bitwise inversion (`!x == -x - 1`).
    pub fn checked_not(self) -> NumericResult<Self> {
        match self {
            Self::Int(a) => Ok(Self::Int(!a)),
            Self::Float(_) => Err(NumericError::Domain(
                "bitwise operations require integer operands",
            )),
        }
    }

    /// Left shift that reports lost bits as `Overflow`.
    pub fn checked_shl(self, rhs: Self) -> NumericResult<Self> {
        let (a, s) = self.int_operands(rhs)?;
        if s < 0 {
            return Err(NumericError::Domain("negative shift count"));
        }
        if a == 0 {
            return Ok(Self::Int(0));
        }
        if s >= 64 {
            return Err(NumericError::Overflow);
        }
        let shifted = a << s;
        if shifted >> s != a {
            return Err(NumericError::Overflow);
        }
        Ok(Self::Int(shifted))
    }

    /// Arithmetic right shift (rounds toward negative infinity).
    pub fn checked_shr(self, rhs: Self) -> NumericResult<Self> {
        let (a, s) = self.int_operands(rhs)?;
        if s < 0 {
            return Err(NumericError::Domain("negative shift count"));
        }
        if s >= 64 {
            return Ok(Self::Int(if a < 0 { -1 } else { 0 }));
        }
        Ok(Self::Int(a >> s))
    }

    // ========================================================================
    // Integer Functions
    // ========================================================================

    /// Truncate toward zero.
    ///
    /// # Errors
    /// - `Domain` for NaN or infinity
    /// - `Overflow` if the truncated value does not fit in an i64
    pub fn to_int_trunc(self) -> NumericResult<i64> {
        match self {
            Self::Int(i) => Ok(i),
            Self::Float(f) => {
                if !f.is_finite() {
                    return Err(NumericError::Domain(
                        "cannot convert a non-finite float to an integer",
                    ));
                }
                integral_in_range(f.trunc()).ok_or(NumericError::Overflow)
            },
        }
    }

    fn float_to_int(f: f64) -> NumericResult<Self> {
        Self::Float(f).to_int_trunc().map(Self::Int)
    }

    pub fn ceil(self) -> NumericResult<Self> {
        match self {
            Self::Int(_) => Ok(self),
            Self::Float(f) => Self::float_to_int(f.ceil()),
        }
    }

    pub fn floor(self) -> NumericResult<Self> {
        match self {
            Self::Int(_) => Ok(self),
            Self::Float(f) => Self::float_to_int(f.floor()),
        }
    }

    /// Round to the nearest integer, ties to even.
    pub fn round(self) -> NumericResult<Self> {
        match self {
            Self::Int(_) => Ok(self),
            Self::Float(f) => Self::float_to_int(f.round_ties_even()),
        }
    }

    /// Round to `ndigits` decimal places, ties to even.
    ///
    /// Integers are unchanged for non-negative `ndigits` and rounded exactly
    /// otherwise; digits beyond the value's magnitude give zero.
    ///
    /// # Errors
    /// Returns `Overflow` if an integer rounds beyond the i64 range.
    pub fn round_to(self, ndigits: i32) -> NumericResult<Self> {
        match self {
            Self::Int(_) if ndigits >= 0 => Ok(self),
            Self::Int(i) => {
                // 10^20 exceeds twice any i64 magnitude
                let digits = ndigits.unsigned_abs();
                if digits >= 20 {
                    return Ok(Self::Int(0));
                }
                let factor = 10i128.pow(digits);
                let (q, r) = (i128::from(i).div_euclid(factor), i128::from(i).rem_euclid(factor));
                let q = match (2 * r).cmp(&factor) {
                    Ordering::Less => q,
                    Ordering::Greater => q + 1,
                    Ordering::Equal if q % 2 == 0 => q,
                    Ordering::Equal => q + 1,
                };
                i64::try_from(q * factor)
                    .map(Self::Int)
                    .map_err(|_| NumericError::Overflow)
            },
            Self::Float(f) if !f.is_finite() => Ok(self),
            Self::Float(f) => {
                let factor = 10f64.powi(ndigits);
                if factor == 0.0 {
                    return Ok(Self::Float(0.0f64.copysign(f)));
                }
                let scaled = f * factor;
                if !scaled.is_finite() {
                    return Ok(self);
                }
                Ok(Self::Float(scaled.round_ties_even() / factor))
            },
        }
    }

    /// Factorial of a non-negative whole number.
    ///
    /// # Errors
    /// - `Domain` for negative or fractional input
    /// - `Overflow` above 20!
    pub fn factorial(self) -> NumericResult<Self> {
        let n = match self.integral_value() {
            Some(n) if n >= 0 => n,
            _ => {
                return Err(NumericError::Domain(
                    "factorial is only defined for non-negative integers",
                ))
            },
        };
        (2..=n)
            .try_fold(1i64, |acc, k| acc.checked_mul(k))
            .map(Self::Int)
            .ok_or(NumericError::Overflow)
    }

    fn integral_pair(self, rhs: Self, reason: &'static str) -> NumericResult<(i64, i64)> {
        match (self.integral_value(), rhs.integral_value()) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(NumericError::Domain(reason)),
        }
    }

    /// Greatest common divisor of two whole numbers (always non-negative).
    pub fn checked_gcd(self, rhs: Self) -> NumericResult<Self> {
        let (a, b) = self.integral_pair(rhs, "gcd requires integer operands")?;
        let g = gcd_u64(a.unsigned_abs(), b.unsigned_abs());
        i64::try_from(g).map(Self::Int).map_err(|_| NumericError::Overflow)
    }

    /// Least common multiple of two whole numbers.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if either operand is zero.
    pub fn checked_lcm(self, rhs: Self) -> NumericResult<Self> {
        let (a, b) = self.integral_pair(rhs, "lcm requires integer operands")?;
        if a == 0 || b == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
        let l = (a / gcd_u64(a, b))
            .checked_mul(b)
            .ok_or(NumericError::Overflow)?;
        i64::try_from(l).map(Self::Int).map_err(|_| NumericError::Overflow)
    }

    /// Primality of a whole number.
    ///
    /// # Errors
    /// Returns `Domain` for fractional input.
    pub fn is_prime(self) -> NumericResult<bool> {
        let n = self
            .integral_value()
            .ok_or(NumericError::Domain("primality requires integer values"))?;
        if n < 2 {
            return Ok(false);
        }
        let mut i: i64 = 2;
        while i.saturating_mul(i) <= n {
            if n % i == 0 {
                return Ok(false);
            }
            i += 1;
        }
        Ok(true)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Total order: numeric order with NaN sorted last.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other)
            .unwrap_or_else(|| self.is_nan().cmp(&other.is_nan()))
    }

    fn canonical(self) -> (bool, u64) {
        match self {
            Self::Int(i) => (false, i as u64),
            Self::Float(f) => match integral_in_range(f) {
                Some(i) => (false, i as u64),
                None if f.is_nan() => (true, CANONICAL_NAN),
                None => (true, f.to_bits()),
            },
        }
    }
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Scalar {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Scalar {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
        }
    }
}

impl Hash for Scalar {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::Int(*other)
    }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::Float(*other)
    }
}

impl From<i64> for Scalar {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Scalar {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<bool> for Scalar {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "Int({})", i),
            Self::Float(x) => write!(f, "Float({})", Self::Float(*x)),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) if x.is_nan() => write!(f, "nan"),
            Self::Float(x) if x.is_infinite() => {
                write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
            },
            Self::Float(x) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, x),
                // Debug keeps the trailing ".0" on whole floats
                None => write!(f, "{:?}", x),
            },
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Scalar {
    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Domain` for NaN, infinity, or floats outside decimal range.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;

        match self {
            Self::Int(i) => Ok(rust_decimal::Decimal::from(i)),
            Self::Float(f) => rust_decimal::Decimal::from_f64(f).ok_or(NumericError::Domain(
                "value is not representable as a decimal",
            )),
        }
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// Whole decimals that fit an i64 become `Int`, everything else `Float`.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        if d.fract().is_zero() {
            if let Some(i) = d.to_i64() {
                return Ok(Self::Int(i));
            }
        }
        d.to_f64().map(Self::Float).ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Scalar {
    type Err = NumericError;

    /// Parse a numeric literal.
    ///
    /// # Examples
    /// - "42" -> Int(42)
    /// - "-0.5" -> Float(-0.5)
    /// - "1e3" -> Float(1000.0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::NonNumeric(String::new()));
        }
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Self::Int(i));
        }
        s.parse::<f64>()
            .map(Self::Float)
            .map_err(|_| NumericError::NonNumeric(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_int_arithmetic_stays_integral() {
        let a = Scalar::Int(7);
        let b = Scalar::Int(3);
        assert!(a.checked_add(b).unwrap().is_int());
        assert_eq!(a.checked_sub(b).unwrap(), Scalar::Int(4));
        assert_eq!(a.checked_mul(b).unwrap(), Scalar::Int(21));
        assert_eq!(a.checked_floor_div(b).unwrap(), Scalar::Int(2));
        assert_eq!(a.checked_rem(b).unwrap(), Scalar::Int(1));
    }

    #[test]
    fn test_true_division_is_float() {
        let q = Scalar::Int(6).checked_div(Scalar::Int(3)).unwrap();
        assert!(q.is_float());
        assert_eq!(q, Scalar::Float(2.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Scalar::Int(1).checked_div(Scalar::Int(0)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            Scalar::Float(1.0).checked_floor_div(Scalar::Float(0.0)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            Scalar::Int(1).checked_rem(Scalar::Int(0)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_floor_div_and_rem_follow_divisor_sign() {
        assert_eq!(
            Scalar::Int(-7).checked_floor_div(Scalar::Int(2)).unwrap(),
            Scalar::Int(-4)
        );
        assert_eq!(
            Scalar::Int(-7).checked_rem(Scalar::Int(2)).unwrap(),
            Scalar::Int(1)
        );
        assert_eq!(
            Scalar::Int(7).checked_rem(Scalar::Int(-2)).unwrap(),
            Scalar::Int(-1)
        );
        assert_eq!(
            Scalar::Float(-7.5).checked_rem(Scalar::Int(2)).unwrap(),
            Scalar::Float(0.5)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Scalar::Int(i64::MAX).checked_add(Scalar::ONE),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Scalar::Int(i64::MIN).checked_neg(),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Scalar::Int(i64::MIN).checked_floor_div(Scalar::Int(-1)),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_pow() {
        assert_eq!(
            Scalar::Int(2).checked_pow(Scalar::Int(10)).unwrap(),
            Scalar::Int(1024)
        );
        assert_eq!(
            Scalar::Int(2).checked_pow(Scalar::Int(-1)).unwrap(),
            Scalar::Float(0.5)
        );
        assert_eq!(
            Scalar::Int(-1).checked_pow(Scalar::Int(i64::MAX)).unwrap(),
            Scalar::Int(-1)
        );
        assert_eq!(
            Scalar::Int(0).checked_pow(Scalar::Int(-2)),
            Err(NumericError::DivisionByZero)
        );
        assert!(matches!(
            Scalar::Float(-8.0).checked_pow(Scalar::Float(0.5)),
            Err(NumericError::Domain(_))
        ));
        assert_eq!(
            Scalar::Int(10).checked_pow(Scalar::Int(19)),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_float_pow_overflow() {
        assert_eq!(
            Scalar::Float(10.0).checked_pow(Scalar::Int(400)),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Scalar::Int(10).checked_pow(Scalar::Float(400.0)),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Scalar::Float(f64::INFINITY).checked_pow(Scalar::Int(2)).unwrap(),
            Scalar::Float(f64::INFINITY)
        );
        assert_eq!(
            Scalar::Int(2).checked_pow(Scalar::Int(-2000)).unwrap(),
            Scalar::Float(0.0)
        );
    }

    #[test]
    fn test_bitwise() {
        let a = Scalar::Int(0b1100);
        let b = Scalar::Int(0b1010);
        assert_eq!(a.checked_bitand(b).unwrap(), Scalar::Int(0b1000));
        assert_eq!(a.checked_bitor(b).unwrap(), Scalar::Int(0b1110));
        assert_eq!(a.checked_bitxor(b).unwrap(), Scalar::Int(0b0110));
        assert_eq!(Scalar::Int(5).checked_not().unwrap(), Scalar::Int(-6));
        assert_eq!(
            Scalar::Int(1).checked_shl(Scalar::Int(4)).unwrap(),
            Scalar::Int(16)
        );
        assert_eq!(
            Scalar::Int(-9).checked_shr(Scalar::Int(1)).unwrap(),
            Scalar::Int(-5)
        );
        assert!(matches!(
            Scalar::Float(1.0).checked_bitor(b),
            Err(NumericError::Domain(_))
        ));
        assert!(matches!(
            a.checked_shl(Scalar::Int(-1)),
            Err(NumericError::Domain(_))
        ));
        assert_eq!(
            Scalar::Int(1).checked_shl(Scalar::Int(63)),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_mixed_equality_and_hash() {
        assert_eq!(Scalar::Int(1), Scalar::Float(1.0));
        assert_eq!(Scalar::Float(-0.0), Scalar::Int(0));
        assert_ne!(Scalar::Int(1), Scalar::Float(1.5));

        let set: HashSet<Scalar> = [Scalar::Int(2), Scalar::Float(2.0), Scalar::Float(2.5)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);

        let nans: HashSet<Scalar> = [Scalar::Float(f64::NAN), Scalar::Float(-f64::NAN)]
            .into_iter()
            .collect();
        assert_eq!(nans.len(), 1);
    }

    #[test]
    fn test_ordering() {
        assert!(Scalar::Int(1) < Scalar::Float(1.5));
        assert!(Scalar::Float(2.5) > Scalar::Int(2));
        assert!(Scalar::Int(i64::MAX) < Scalar::Float(9.3e18));
        assert_eq!(
            Scalar::Float(f64::NAN).total_cmp(&Scalar::Int(0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Scalar::Float(2.5).round().unwrap(), Scalar::Int(2));
        assert_eq!(Scalar::Float(3.5).round().unwrap(), Scalar::Int(4));
        assert_eq!(Scalar::Float(-1.2).ceil().unwrap(), Scalar::Int(-1));
        assert_eq!(Scalar::Float(-1.2).floor().unwrap(), Scalar::Int(-2));
        assert_eq!(Scalar::Float(1.256).round_to(2).unwrap(), Scalar::Float(1.26));
        assert_eq!(Scalar::Int(1250).round_to(-2).unwrap(), Scalar::Int(1200));
        assert_eq!(Scalar::Int(-15).round_to(-1).unwrap(), Scalar::Int(-20));
        assert_eq!(Scalar::Int(-25).round_to(-1).unwrap(), Scalar::Int(-20));
        assert_eq!(Scalar::Int(1251).round_to(-2).unwrap(), Scalar::Int(1300));
        assert!(matches!(
            Scalar::Float(f64::INFINITY).round(),
            Err(NumericError::Domain(_))
        ));
    }

    #[test]
    fn test_round_to_far_digits() {
        assert_eq!(Scalar::Float(1.5).round_to(-400).unwrap(), Scalar::Float(0.0));
        assert!(Scalar::Float(1.5).round_to(-400).unwrap().is_float());
        assert_eq!(Scalar::Float(1.5).round_to(400).unwrap(), Scalar::Float(1.5));
        assert_eq!(Scalar::Float(1234.5).round_to(-300).unwrap(), Scalar::Float(0.0));
        assert_eq!(Scalar::Int(1234).round_to(-400).unwrap(), Scalar::Int(0));
        assert_eq!(Scalar::Int(i64::MAX).round_to(-20).unwrap(), Scalar::Int(0));
        assert_eq!(Scalar::Int(4_000_000_000_000_000_000).round_to(-19).unwrap(), Scalar::Int(0));
        assert_eq!(
            Scalar::Int(i64::MAX).round_to(-19),
            Err(NumericError::Overflow)
        );
        let nan = Scalar::Float(f64::NAN).round_to(-400).unwrap();
        assert!(nan.as_f64().is_nan());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(Scalar::Int(5).factorial().unwrap(), Scalar::Int(120));
        assert_eq!(Scalar::Float(4.0).factorial().unwrap(), Scalar::Int(24));
        assert_eq!(Scalar::Int(0).factorial().unwrap(), Scalar::Int(1));
        assert!(matches!(
            Scalar::Int(-1).factorial(),
            Err(NumericError::Domain(_))
        ));
        assert!(matches!(
            Scalar::Float(2.5).factorial(),
            Err(NumericError::Domain(_))
        ));
        assert_eq!(Scalar::Int(21).factorial(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(
            Scalar::Int(12).checked_gcd(Scalar::Int(-18)).unwrap(),
            Scalar::Int(6)
        );
        assert_eq!(
            Scalar::Float(4.0).checked_lcm(Scalar::Int(6)).unwrap(),
            Scalar::Int(12)
        );
        assert_eq!(
            Scalar::Int(0).checked_lcm(Scalar::Int(6)),
            Err(NumericError::DivisionByZero)
        );
        assert!(matches!(
            Scalar::Float(1.5).checked_gcd(Scalar::Int(6)),
            Err(NumericError::Domain(_))
        ));
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<bool> = (0..12)
            .map(|n| Scalar::Int(n).is_prime().unwrap())
            .collect();
        assert_eq!(
            primes,
            vec![false, false, true, true, false, true, false, true, false, false, false, true]
        );
        assert!(Scalar::Float(2.5).is_prime().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::Int(5).to_string(), "5");
        assert_eq!(Scalar::Float(2.0).to_string(), "2.0");
        assert_eq!(Scalar::Float(0.25).to_string(), "0.25");
        assert_eq!(Scalar::Float(f64::NAN).to_string(), "nan");
        assert_eq!(format!("{:.2}", Scalar::Float(1.0 / 3.0)), "0.33");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("42".parse::<Scalar>().unwrap(), Scalar::Int(42));
        assert!("42".parse::<Scalar>().unwrap().is_int());
        assert_eq!("-0.5".parse::<Scalar>().unwrap(), Scalar::Float(-0.5));
        assert_eq!(
            "abc".parse::<Scalar>(),
            Err(NumericError::NonNumeric("abc".to_string()))
        );
    }

    #[test]
    fn test_decimal_round_trip() {
        use rust_decimal::Decimal;

        let d = Scalar::Float(123.45).to_decimal().unwrap();
        assert_eq!(d, Decimal::new(12345, 2));
        assert_eq!(Scalar::from_decimal(Decimal::new(700, 2)).unwrap(), Scalar::Int(7));
        assert!(Scalar::from_decimal(Decimal::new(705, 2)).unwrap().is_float());
        assert!(Scalar::Float(f64::NAN).to_decimal().is_err());
    }
}
