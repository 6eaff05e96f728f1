// ============================================================================
// Container Module
// The scalar-or-sequence numeric container and its operation families
// ============================================================================

mod convert;
mod display;
mod math;
mod number;
mod operand;
mod ops;
mod stats;

pub use display::NumberDisplay;
pub use number::{Number, Shape, Values};
pub use operand::Operand;
pub use stats::CumulativeStats;

use crate::numeric::Scalar;
use number::Repr;

impl Number {
    /// Multi-shape constructor behind [`number!`](crate::number) for two or
    /// more literals.
    #[doc(hidden)]
    pub fn __from_literals(values: &[Scalar]) -> Self {
        Self::from_repr(Repr::Multi(values.iter().copied().collect()))
    }
}

/// Build a [`Number`] from literal values.
///
/// One value gives the scalar shape, two or more the multi shape. Integer
/// and float literals may be mixed.
///
/// ```ignore
/// use numeric_container::number;
///
/// let a = number![5];
/// let b = number![1, 2.5, -3];
/// assert!(a.is_scalar() && b.is_multi());
/// ```
#[macro_export]
macro_rules! number {
    ($value:expr $(,)?) => {
        $crate::container::Number::scalar($crate::numeric::Scalar::from($value))
    };
    ($($value:expr),+ $(,)?) => {
        $crate::container::Number::__from_literals(&[$($crate::numeric::Scalar::from($value)),+])
    };
}
