// ============================================================================
// Container Math
// Elementwise transcendental, rounding and integer functions
// ============================================================================

use super::number::Number;
use super::operand::Operand;
use crate::numeric::{NumericError, NumericResult, Scalar};

impl Number {
    /// Fail with `Domain(reason)` unless every element passes `valid`.
    ///
    /// Runs before any element is transformed, so a bad element anywhere
    /// leaves no partial result.
    fn require_all(&self, valid: impl FnMut(Scalar) -> bool, reason: &'static str) -> NumericResult<()> {
        if self.all(valid) {
            Ok(())
        } else {
            Err(NumericError::Domain(reason))
        }
    }

    /// Float map that reports a finite input producing an infinite output.
    fn map_finite(&self, f: impl Fn(f64) -> f64) -> NumericResult<Self> {
        self.try_map(|x| {
            let v = x.as_f64();
            let out = f(v);
            if out.is_infinite() && v.is_finite() {
                Err(NumericError::Overflow)
            } else {
                Ok(Scalar::Float(out))
            }
        })
    }

    // ========================================================================
    // Transcendental
    // ========================================================================

    /// Square root of every element.
    ///
    /// # Errors
    /// Returns `Domain` if any element is negative.
    pub fn sqrt(&self) -> NumericResult<Self> {
        self.require_all(|x| !x.is_negative(), "square root of a negative value")?;
        Ok(self.map(|x| x.as_f64().sqrt()))
    }

    /// `e` raised to every element.
    pub fn exp(&self) -> NumericResult<Self> {
        self.map_finite(f64::exp)
    }

    /// Logarithm of every element in the given base.
    ///
    /// # Errors
    /// Returns `Domain` for a base that is not positive or equals 1, or for
    /// any non-positive element.
    pub fn log(&self, base: f64) -> NumericResult<Self> {
        if base.is_nan() || base <= 0.0 || base == 1.0 {
            return Err(NumericError::Domain("logarithm base must be positive and not 1"));
        }
        self.require_all(|x| x.is_positive() || x.is_nan(), "logarithm of a non-positive value")?;
        let ln_base = base.ln();
        Ok(self.map(|x| x.as_f64().ln() / ln_base))
    }

    /// Natural logarithm.
    pub fn ln(&self) -> NumericResult<Self> {
        self.log(std::f64::consts::E)
    }

    pub fn sin(&self) -> NumericResult<Self> {
        self.require_all(|x| !x.as_f64().is_infinite(), "sine of an infinite value")?;
        Ok(self.map(|x| x.as_f64().sin()))
    }

    pub fn cos(&self) -> NumericResult<Self> {
        self.require_all(|x| !x.as_f64().is_infinite(), "cosine of an infinite value")?;
        Ok(self.map(|x| x.as_f64().cos()))
    }

    pub fn tan(&self) -> NumericResult<Self> {
        self.require_all(|x| !x.as_f64().is_infinite(), "tangent of an infinite value")?;
        Ok(self.map(|x| x.as_f64().tan()))
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    pub fn ceil(&self) -> NumericResult<Self> {
        self.try_map(Scalar::ceil)
    }

    pub fn floor(&self) -> NumericResult<Self> {
        self.try_map(Scalar::floor)
    }

    /// Round every element to an integer, ties to even.
    pub fn round(&self) -> NumericResult<Self> {
        self.try_map(Scalar::round)
    }

    /// Round every element to `ndigits` decimal places, ties to even.
    pub fn round_to(&self, ndigits: i32) -> NumericResult<Self> {
        self.try_map(|x| x.round_to(ndigits))
    }

    // ========================================================================
    // Integer Functions
    // ========================================================================

    /// Factorial of every element.
    ///
    /// # Errors
    /// - `Domain` if any element is negative or fractional (`3.0` is fine)
    /// - `Overflow` if a result exceeds the i64 range
    pub fn factorial(&self) -> NumericResult<Self> {
        self.require_all(
            |x| x.integral_value().is_some_and(|n| n >= 0),
            "factorial is only defined for non-negative integers",
        )?;
        self.try_map(Scalar::factorial)
    }

    fn integral_operands(&self, rhs: &Operand<'_>, reason: &'static str) -> NumericResult<()> {
        let integral = |x: &Scalar| x.integral_value().is_some();
        if self.as_slice().iter().all(integral) && rhs.values().iter().all(integral) {
            Ok(())
        } else {
            Err(NumericError::Domain(reason))
        }
    }

    /// Pairwise greatest common divisor.
    pub fn gcd<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        let rhs = rhs.into();
        self.integral_operands(&rhs, "gcd requires integer operands")?;
        self.try_combine(rhs, "take the gcd of", Scalar::checked_gcd)
    }

    /// Pairwise least common multiple.
    ///
    /// # Errors
    /// `DivisionByZero` if any operand element is zero.
    pub fn lcm<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        let rhs = rhs.into();
        self.integral_operands(&rhs, "lcm requires integer operands")?;
        self.try_combine(rhs, "take the lcm of", Scalar::checked_lcm)
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Whether every element is a whole number.
    pub fn is_integer(&self) -> bool {
        self.all(Scalar::is_integer)
    }

    pub fn is_positive(&self) -> bool {
        self.all(Scalar::is_positive)
    }

    pub fn is_negative(&self) -> bool {
        self.all(Scalar::is_negative)
    }

    pub fn is_zero(&self) -> bool {
        self.all(Scalar::is_zero)
    }

    /// Whether any element is non-zero.
    pub fn is_nonzero(&self) -> bool {
        self.any(|x| !x.is_zero())
    }

    /// Per-element parity after truncation toward zero.
    pub fn is_even(&self) -> NumericResult<Vec<bool>> {
        self.iter()
            .map(|x| -> NumericResult<bool> { Ok(x.to_int_trunc()?.rem_euclid(2) == 0) })
            .collect()
    }

    pub fn is_odd(&self) -> NumericResult<Vec<bool>> {
        self.iter()
            .map(|x| -> NumericResult<bool> { Ok(x.to_int_trunc()?.rem_euclid(2) == 1) })
            .collect()
    }

    /// Per-element primality.
    ///
    /// # Errors
    /// Returns `Domain` if any element is fractional.
    pub fn is_prime(&self) -> NumericResult<Vec<bool>> {
        self.require_all(Scalar::is_integer, "primality requires integer values")?;
        self.iter().map(Scalar::is_prime).collect()
    }

    /// Per element, whether its square equals `target`.
    pub fn squares_equal(&self, target: impl Into<Scalar>) -> NumericResult<Vec<bool>> {
        let target = target.into();
        self.iter()
            .map(|x| -> NumericResult<bool> { Ok(x.checked_mul(x)? == target) })
            .collect()
    }
}
