// ============================================================================
// Container Operators
// Arithmetic, comparison and bitwise families built on the pairwise primitive
// ============================================================================

use super::number::{Number, Repr};
use super::operand::Operand;
use crate::numeric::{NumericError, NumericResult, Scalar};

impl Number {
    /// Shape/length validation shared by division and ordering, which must
    /// report a shape problem before looking at element values.
    fn check_compatible(&self, rhs: &Operand<'_>, operation: &'static str) -> NumericResult<()> {
        match (&self.repr, rhs) {
            (Repr::Scalar(_), Operand::Raw(_)) => Ok(()),
            (Repr::Multi(_), Operand::Raw(_)) => Ok(()),
            (Repr::Scalar(_), Operand::Number(other)) if other.is_scalar() => Ok(()),
            (Repr::Multi(a), Operand::Number(other)) if other.is_multi() => {
                if a.len() == other.len() {
                    Ok(())
                } else {
                    Err(NumericError::LengthMismatch {
                        left: a.len(),
                        right: other.len(),
                    })
                }
            },
            _ => Err(NumericError::ShapeMismatch { operation }),
        }
    }

    fn checked_divide<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        operation: &'static str,
        f: fn(Scalar, Scalar) -> NumericResult<Scalar>,
    ) -> NumericResult<Self> {
        let rhs = rhs.into();
        self.check_compatible(&rhs, operation)?;
        if rhs.values().iter().any(|x| x.is_zero()) {
            return Err(NumericError::DivisionByZero);
        }
        self.try_combine(rhs, operation, f)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn checked_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "add", Scalar::checked_add)
    }

    pub fn checked_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "subtract", Scalar::checked_sub)
    }

    pub fn checked_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "multiply", Scalar::checked_mul)
    }

    /// True division.
    ///
    /// # Errors
    /// `DivisionByZero` if any divisor element is zero; checked before any
    /// element is divided.
    pub fn checked_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.checked_divide(rhs, "divide", Scalar::checked_div)
    }

    pub fn checked_floor_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.checked_divide(rhs, "floor-divide", Scalar::checked_floor_div)
    }

    pub fn checked_rem<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.checked_divide(rhs, "take the remainder of", Scalar::checked_rem)
    }

    pub fn checked_pow<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "exponentiate", Scalar::checked_pow)
    }

    /// Raise every element to the integer power `n`.
    pub fn power(&self, n: i64) -> NumericResult<Self> {
        self.checked_pow(n)
    }

    /// `lhs - self`, broadcasting `lhs`.
    pub fn rsub(&self, lhs: impl Into<Scalar>) -> NumericResult<Self> {
        let lhs = lhs.into();
        self.try_map(|x| lhs.checked_sub(x))
    }

    /// `lhs / self`, broadcasting `lhs`.
    pub fn rdiv(&self, lhs: impl Into<Scalar>) -> NumericResult<Self> {
        if self.any(Scalar::is_zero) {
            return Err(NumericError::DivisionByZero);
        }
        let lhs = lhs.into();
        self.try_map(|x| lhs.checked_div(x))
    }

    /// `lhs ** self`, broadcasting `lhs`.
    pub fn rpow(&self, lhs: impl Into<Scalar>) -> NumericResult<Self> {
        let lhs = lhs.into();
        self.try_map(|x| lhs.checked_pow(x))
    }

    pub fn checked_neg(&self) -> NumericResult<Self> {
        self.try_map(Scalar::checked_neg)
    }

    pub fn checked_abs(&self) -> NumericResult<Self> {
        self.try_map(Scalar::checked_abs)
    }

    /// Unary plus: a copy.
    pub fn positive(&self) -> Self {
        self.clone()
    }

    // ========================================================================
    // Bitwise
    // ========================================================================

    pub fn checked_bitand<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "bitwise-and", Scalar::checked_bitand)
    }

    pub fn checked_bitor<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "bitwise-or", Scalar::checked_bitor)
    }

    pub fn checked_bitxor<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "bitwise-xor", Scalar::checked_bitxor)
    }

    pub fn checked_shl<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "shift", Scalar::checked_shl)
    }

    pub fn checked_shr<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<Self> {
        self.try_combine(rhs, "shift", Scalar::checked_shr)
    }

    /// Bitwise inversion of every element.
    pub fn invert(&self) -> NumericResult<Self> {
        self.try_map(Scalar::checked_not)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Equality against a container or raw number.
    ///
    /// Never fails: scalar against multi, or multi against a raw number, is
    /// simply unequal.
    pub fn eq_operand<'a>(&self, rhs: impl Into<Operand<'a>>) -> bool {
        match rhs.into() {
            Operand::Number(other) => self == other,
            Operand::Raw(x) => matches!(self.repr, Repr::Scalar(v) if v == x),
        }
    }

    fn lexicographic_lt(a: &[Scalar], b: &[Scalar]) -> bool {
        a.iter()
            .zip(b)
            .find(|(x, y)| x != y)
            .is_some_and(|(x, y)| x < y)
    }

    /// `self < rhs`; multi operands compare lexicographically.
    ///
    /// # Errors
    /// - `ShapeMismatch` across shapes (including multi against a raw number)
    /// - `LengthMismatch` for multi operands of different lengths
    pub fn lt<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<bool> {
        let rhs = rhs.into();
        if let (Repr::Multi(_), Operand::Raw(_)) = (&self.repr, &rhs) {
            return Err(NumericError::ShapeMismatch { operation: "compare" });
        }
        self.check_compatible(&rhs, "compare")?;
        Ok(Self::lexicographic_lt(self.as_slice(), rhs.values()))
    }

    /// `self > rhs`, with the same failure conditions as [`Number::lt`].
    pub fn gt<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<bool> {
        let rhs = rhs.into();
        if let (Repr::Multi(_), Operand::Raw(_)) = (&self.repr, &rhs) {
            return Err(NumericError::ShapeMismatch { operation: "compare" });
        }
        self.check_compatible(&rhs, "compare")?;
        Ok(Self::lexicographic_lt(rhs.values(), self.as_slice()))
    }

    /// `lt || eq`.
    pub fn le<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<bool> {
        let rhs = rhs.into();
        Ok(self.lt(rhs)? || self.eq_operand(rhs))
    }

    /// `gt || eq`.
    pub fn ge<'a>(&self, rhs: impl Into<Operand<'a>>) -> NumericResult<bool> {
        let rhs = rhs.into();
        Ok(self.gt(rhs)? || self.eq_operand(rhs))
    }
}

// ============================================================================
// Compound Assignment
// ============================================================================

macro_rules! compound_assign {
    ($($name:ident => $op:ident),* $(,)?) => {
        impl Number {
            $(
                /// In-place variant; `self` is unchanged on error.
                pub fn $name<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> NumericResult<()> {
                    *self = self.$op(rhs)?;
                    Ok(())
                }
            )*
        }
    };
}

compound_assign! {
    add_assign => checked_add,
    sub_assign => checked_sub,
    mul_assign => checked_mul,
    div_assign => checked_div,
    floor_div_assign => checked_floor_div,
    rem_assign => checked_rem,
    pow_assign => checked_pow,
    bitand_assign => checked_bitand,
    bitor_assign => checked_bitor,
    bitxor_assign => checked_bitxor,
    shl_assign => checked_shl,
    shr_assign => checked_shr,
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Scalar(a), Repr::Scalar(b)) => a == b,
            (Repr::Multi(a), Repr::Multi(b)) => a.as_slice() == b.as_slice(),
            _ => false,
        }
    }
}

impl PartialEq<Scalar> for Number {
    fn eq(&self, other: &Scalar) -> bool {
        self.eq_operand(*other)
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        self.eq_operand(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.eq_operand(*other)
    }
}

// Operators on references yield NumericResult so `(&a + &b)?` reads naturally.
macro_rules! binary_ops {
    ($($trait:ident :: $method:ident => $checked:ident),* $(,)?) => {
        $(
            impl<'a> std::ops::$trait<&'a Number> for &Number {
                type Output = NumericResult<Number>;

                #[inline]
                fn $method(self, rhs: &'a Number) -> Self::Output {
                    self.$checked(rhs)
                }
            }

            impl std::ops::$trait<Scalar> for &Number {
                type Output = NumericResult<Number>;

                #[inline]
                fn $method(self, rhs: Scalar) -> Self::Output {
                    self.$checked(rhs)
                }
            }

            impl std::ops::$trait<i64> for &Number {
                type Output = NumericResult<Number>;

                #[inline]
                fn $method(self, rhs: i64) -> Self::Output {
                    self.$checked(rhs)
                }
            }

            impl std::ops::$trait<f64> for &Number {
                type Output = NumericResult<Number>;

                #[inline]
                fn $method(self, rhs: f64) -> Self::Output {
                    self.$checked(rhs)
                }
            }
        )*
    };
}

binary_ops! {
    Add::add => checked_add,
    Sub::sub => checked_sub,
    Mul::mul => checked_mul,
    Div::div => checked_div,
    Rem::rem => checked_rem,
    BitAnd::bitand => checked_bitand,
    BitOr::bitor => checked_bitor,
    BitXor::bitxor => checked_bitxor,
    Shl::shl => checked_shl,
    Shr::shr => checked_shr,
}

// Raw number on the left-hand side
macro_rules! reverse_ops {
    ($($raw:ty),*) => {
        $(
            impl std::ops::Add<&Number> for $raw {
                type Output = NumericResult<Number>;

                fn add(self, rhs: &Number) -> Self::Output {
                    rhs.checked_add(self)
                }
            }

            impl std::ops::Sub<&Number> for $raw {
                type Output = NumericResult<Number>;

                fn sub(self, rhs: &Number) -> Self::Output {
                    rhs.rsub(self)
                }
            }

            impl std::ops::Mul<&Number> for $raw {
                type Output = NumericResult<Number>;

                fn mul(self, rhs: &Number) -> Self::Output {
                    rhs.checked_mul(self)
                }
            }

            impl std::ops::Div<&Number> for $raw {
                type Output = NumericResult<Number>;

                fn div(self, rhs: &Number) -> Self::Output {
                    rhs.rdiv(self)
                }
            }
        )*
    };
}

reverse_ops!(i64, f64);

impl std::ops::Neg for &Number {
    type Output = NumericResult<Number>;

    fn neg(self) -> Self::Output {
        self.checked_neg()
    }
}

impl std::ops::Not for &Number {
    type Output = NumericResult<Number>;

    fn not(self) -> Self::Output {
        self.invert()
    }
}

// ============================================================================
// Tests
// ============================================================================
