// ============================================================================
// Operand
// Right-hand side of a binary container operation
// ============================================================================

use super::number::Number;
use crate::numeric::Scalar;

/// Right-hand side of a binary operation: another container, or a raw
/// number to broadcast across every element.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Number(&'a Number),
    Raw(Scalar),
}

impl Operand<'_> {
    /// Elements that will act as divisors.
    pub(crate) fn values(&self) -> &[Scalar] {
        match self {
            Operand::Number(n) => n.as_slice(),
            Operand::Raw(x) => std::slice::from_ref(x),
        }
    }
}

impl<'a> From<&'a Number> for Operand<'a> {
    #[inline]
    fn from(number: &'a Number) -> Self {
        Operand::Number(number)
    }
}

impl From<Scalar> for Operand<'_> {
    #[inline]
    fn from(value: Scalar) -> Self {
        Operand::Raw(value)
    }
}

impl From<i64> for Operand<'_> {
    #[inline]
    fn from(value: i64) -> Self {
        Operand::Raw(Scalar::Int(value))
    }
}

impl From<i32> for Operand<'_> {
    #[inline]
    fn from(value: i32) -> Self {
        Operand::Raw(Scalar::from(value))
    }
}

impl From<f64> for Operand<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Raw(Scalar::Float(value))
    }
}
