// ============================================================================
// Number
// Scalar-or-sequence numeric container with shape-dispatched primitives
// ============================================================================

use super::operand::Operand;
use crate::numeric::{NumericError, NumericResult, Scalar};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// Backing storage for multi-value containers.
pub type Values = SmallVec<[Scalar; 4]>;

#[derive(Clone, Debug)]
pub(crate) enum Repr {
    Scalar(Scalar),
    Multi(Values),
}

/// Borrowed view of a container's shape, for pattern matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    Scalar(Scalar),
    Multi(&'a [Scalar]),
}

/// A numeric container holding either one scalar or an ordered sequence.
///
/// Every binary operation dispatches on the shapes of both operands:
/// scalar with scalar, multi with multi of equal length, or either shape
/// with a raw number (broadcast). Scalar mixed with multi is an error.
///
/// Construction with one value yields the scalar shape; two or more yield
/// the multi shape. In-place mutation never changes the shape on its own:
/// a multi container whittled down to one element stays multi until
/// [`Number::to_scalar`] is called.
///
/// # Example
/// ```ignore
/// use numeric_container::{number, Number};
///
/// let a = number![1, 2, 3];
/// let b = number![4, 5, 6];
/// let sum = a.checked_add(&b)?;          // (5, 7, 9)
/// let scaled = sum.checked_mul(2.0)?;    // (10.0, 14.0, 18.0)
/// assert!(a.checked_add(&number![1]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Number {
    pub(crate) repr: Repr,
}

impl Number {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a container from one or more values.
    ///
    /// # Errors
    /// Returns `Empty` when `values` yields nothing.
    pub fn new<I, T>(values: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self::from_values(values.into_iter().map(Into::into).collect())
    }

    /// Build a scalar-shaped container.
    #[inline]
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Self {
            repr: Repr::Scalar(value.into()),
        }
    }

    /// Build a container from already-collected values.
    pub fn from_values(values: Values) -> NumericResult<Self> {
        match values.len() {
            0 => Err(NumericError::Empty),
            1 => Ok(Self::scalar(values[0])),
            _ => Ok(Self {
                repr: Repr::Multi(values),
            }),
        }
    }

    /// Build a container by parsing numeric literals such as `"3"` or `"-2.5"`.
    ///
    /// # Errors
    /// - `Empty` for an empty slice
    /// - `NonNumeric` for the first literal that is not a number
    pub fn parse_literals<S: AsRef<str>>(literals: &[S]) -> NumericResult<Self> {
        let values = literals
            .iter()
            .map(|s| s.as_ref().parse::<Scalar>())
            .collect::<NumericResult<Values>>()?;
        Self::from_values(values)
    }

    /// `num` evenly spaced floats over `[start, stop]`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `num` is zero.
    pub fn linspace(start: f64, stop: f64, num: usize) -> NumericResult<Self> {
        if num == 0 {
            return Err(NumericError::InvalidArgument(
                "number of points must be at least 1".to_string(),
            ));
        }
        if num == 1 {
            return Ok(Self::scalar(start));
        }
        let step = (stop - start) / (num - 1) as f64;
        Self::new((0..num).map(|i| start + i as f64 * step))
    }

    #[inline]
    pub(crate) fn from_repr(repr: Repr) -> Self {
        Self { repr }
    }

    // ========================================================================
    // Shape
    // ========================================================================

    #[inline]
    pub fn shape(&self) -> Shape<'_> {
        match &self.repr {
            Repr::Scalar(x) => Shape::Scalar(*x),
            Repr::Multi(v) => Shape::Multi(v),
        }
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self.repr, Repr::Scalar(_))
    }

    #[inline]
    pub fn is_multi(&self) -> bool {
        matches!(self.repr, Repr::Multi(_))
    }

    /// Number of elements (1 for a scalar).
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always false; a container is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Elements as a slice, regardless of shape.
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        match &self.repr {
            Repr::Scalar(x) => std::slice::from_ref(x),
            Repr::Multi(v) => v,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.as_slice().iter().copied()
    }

    /// Collapse to a single scalar.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if more than one element is held.
    pub fn to_scalar(&self) -> NumericResult<Scalar> {
        match self.as_slice() {
            [x] => Ok(*x),
            values => Err(NumericError::LengthMismatch {
                left: values.len(),
                right: 1,
            }),
        }
    }

    /// Copy into the multi shape (a scalar becomes a one-element sequence).
    pub fn to_multi(&self) -> Self {
        Self::from_repr(Repr::Multi(self.as_slice().iter().copied().collect()))
    }

    fn multi_mut(&mut self, operation: &'static str) -> NumericResult<&mut Values> {
        match &mut self.repr {
            Repr::Scalar(_) => Err(NumericError::ScalarShape { operation }),
            Repr::Multi(v) => Ok(v),
        }
    }

    /// Promote a scalar to the multi shape in place and return its storage.
    fn promote(&mut self) -> &mut Values {
        if let Repr::Scalar(x) = self.repr {
            self.repr = Repr::Multi(SmallVec::from_elem(x, 1));
        }
        match &mut self.repr {
            Repr::Multi(v) => v,
            Repr::Scalar(_) => unreachable!("promoted above"),
        }
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// Apply `f` to every element, keeping the shape.
    pub fn map<F, T>(&self, mut f: F) -> Self
    where
        F: FnMut(Scalar) -> T,
        T: Into<Scalar>,
    {
        let repr = match &self.repr {
            Repr::Scalar(x) => Repr::Scalar(f(*x).into()),
            Repr::Multi(v) => Repr::Multi(v.iter().map(|x| f(*x).into()).collect()),
        };
        Self::from_repr(repr)
    }

    /// Fallible [`Number::map`]; the first error is returned unchanged.
    pub fn try_map<F, E>(&self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(Scalar) -> Result<Scalar, E>,
    {
        let repr = match &self.repr {
            Repr::Scalar(x) => Repr::Scalar(f(*x)?),
            Repr::Multi(v) => Repr::Multi(v.iter().map(|x| f(*x)).collect::<Result<_, E>>()?),
        };
        Ok(Self::from_repr(repr))
    }

    /// Whether every element satisfies `pred`.
    #[inline]
    pub fn all(&self, pred: impl FnMut(Scalar) -> bool) -> bool {
        self.iter().all(pred)
    }

    /// Whether any element satisfies `pred`.
    #[inline]
    pub fn any(&self, pred: impl FnMut(Scalar) -> bool) -> bool {
        self.iter().any(pred)
    }

    /// Pairwise combination with a container or a broadcast raw number.
    ///
    /// This is the primitive beneath every binary operator family.
    ///
    /// # Errors
    /// - `ShapeMismatch` for scalar against multi
    /// - `LengthMismatch` for multi operands of different lengths
    /// - any error returned by `f`
    pub fn try_combine<'a, F, E>(
        &self,
        rhs: impl Into<Operand<'a>>,
        operation: &'static str,
        mut f: F,
    ) -> Result<Self, E>
    where
        F: FnMut(Scalar, Scalar) -> Result<Scalar, E>,
        E: From<NumericError>,
    {
        let other = match rhs.into() {
            Operand::Raw(b) => return self.try_map(|a| f(a, b)),
            Operand::Number(other) => other,
        };
        let repr = match (&self.repr, &other.repr) {
            (Repr::Scalar(a), Repr::Scalar(b)) => Repr::Scalar(f(*a, *b)?),
            (Repr::Multi(a), Repr::Multi(b)) => {
                if a.len() != b.len() {
                    return Err(NumericError::LengthMismatch {
                        left: a.len(),
                        right: b.len(),
                    }
                    .into());
                }
                Repr::Multi(
                    a.iter()
                        .zip(b.iter())
                        .map(|(x, y)| f(*x, *y))
                        .collect::<Result<_, E>>()?,
                )
            },
            _ => {
                tracing::trace!(operation, "rejected scalar/multi combination");
                return Err(NumericError::ShapeMismatch { operation }.into());
            },
        };
        Ok(Self::from_repr(repr))
    }

    /// [`Number::try_combine`] with an infallible function.
    pub fn combine<'a, F, T>(&self, rhs: impl Into<Operand<'a>>, mut f: F) -> NumericResult<Self>
    where
        F: FnMut(Scalar, Scalar) -> T,
        T: Into<Scalar>,
    {
        self.try_combine(rhs, "combine", |a, b| Ok(f(a, b).into()))
    }

    /// Pairwise-combine two same-shape containers.
    pub fn zip_with<F, T>(&self, other: &Number, f: F) -> NumericResult<Self>
    where
        F: FnMut(Scalar, Scalar) -> T,
        T: Into<Scalar>,
    {
        self.combine(other, f)
    }

    /// Fallible [`Number::zip_with`]; errors from `f` propagate unchanged.
    pub fn try_zip_with<F, E>(&self, other: &Number, f: F) -> Result<Self, E>
    where
        F: FnMut(Scalar, Scalar) -> Result<Scalar, E>,
        E: From<NumericError>,
    {
        self.try_combine(other, "zip", f)
    }

    // ========================================================================
    // Indexing
    // ========================================================================

    fn resolve_index(index: isize, len: usize) -> NumericResult<usize> {
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize).filter(|&i| i < len)
        };
        resolved.ok_or(NumericError::IndexOutOfRange { index, len })
    }

    /// Element at `index`; negative indices count from the end.
    ///
    /// # Errors
    /// - `ScalarShape` on a scalar container
    /// - `IndexOutOfRange` beyond bounds
    pub fn get(&self, index: isize) -> NumericResult<Scalar> {
        match &self.repr {
            Repr::Scalar(_) => Err(NumericError::ScalarShape { operation: "index" }),
            Repr::Multi(v) => Ok(v[Self::resolve_index(index, v.len())?]),
        }
    }

    /// Replace the element at `index`.
    pub fn set(&mut self, index: isize, value: impl Into<Scalar>) -> NumericResult<()> {
        let values = self.multi_mut("index")?;
        let i = Self::resolve_index(index, values.len())?;
        values[i] = value.into();
        tracing::trace!(index, "set element");
        Ok(())
    }

    /// Delete the element at `index`.
    ///
    /// # Errors
    /// Returns `Empty` if it is the last remaining element.
    pub fn delete(&mut self, index: isize) -> NumericResult<()> {
        let values = self.multi_mut("index")?;
        let i = Self::resolve_index(index, values.len())?;
        if values.len() == 1 {
            return Err(NumericError::Empty);
        }
        values.remove(i);
        tracing::trace!(index, remaining = values.len(), "deleted element");
        Ok(())
    }

    /// Remove every element whose (possibly negative) index is listed.
    ///
    /// Indices are validated before anything is removed; duplicates are
    /// ignored. Returns `self` for chaining.
    pub fn remove(&mut self, indices: &[isize]) -> NumericResult<&mut Self> {
        let values = self.multi_mut("remove values from")?;
        let len = values.len();
        let positions = indices
            .iter()
            .map(|&i| Self::resolve_index(i, len))
            .collect::<NumericResult<BTreeSet<usize>>>()?;
        if positions.len() == len {
            return Err(NumericError::Empty);
        }
        for &pos in positions.iter().rev() {
            values.remove(pos);
        }
        tracing::trace!(removed = positions.len(), remaining = values.len(), "removed elements");
        Ok(self)
    }

    /// [`Number::remove`] without the chaining return.
    pub fn delete_many(&mut self, indices: &[isize]) -> NumericResult<()> {
        self.remove(indices).map(|_| ())
    }

    /// Range bound in `0..=len`; negative bounds count from the end.
    fn resolve_bound(bound: isize, len: usize) -> NumericResult<usize> {
        let resolved = if bound < 0 {
            len.checked_sub(bound.unsigned_abs())
        } else {
            Some(bound as usize).filter(|&b| b <= len)
        };
        resolved.ok_or(NumericError::IndexOutOfRange { index: bound, len })
    }

    /// Delete the half-open range `start..end` (negative bounds count from
    /// the end). An empty range, including `len..len`, is a no-op.
    pub fn delete_range(&mut self, start: isize, end: isize) -> NumericResult<()> {
        let values = self.multi_mut("delete items from")?;
        let len = values.len();
        let start_pos = Self::resolve_bound(start, len)?;
        let end_pos = Self::resolve_bound(end, len)?;
        if end_pos <= start_pos {
            return Ok(());
        }
        if end_pos - start_pos == len {
            return Err(NumericError::Empty);
        }
        values.drain(start_pos..end_pos);
        Ok(())
    }

    /// Append one value; a scalar container becomes multi.
    pub fn append(&mut self, value: impl Into<Scalar>) {
        self.promote().push(value.into());
    }

    /// Append several values; a scalar container becomes multi if any are
    /// supplied.
    pub fn extend<I, T>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        let mut values = values.into_iter().map(Into::into).peekable();
        if values.peek().is_some() {
            self.promote().extend(values);
        }
    }

    /// Append every element of another container.
    pub fn extend_from(&mut self, other: &Number) {
        self.promote().extend_from_slice(other.as_slice());
    }

    /// Insert every element of `values` starting at `index` (`0..=len`).
    pub fn insert(&mut self, index: usize, values: &Number) -> NumericResult<()> {
        let len = self.len();
        if index > len {
            return Err(NumericError::IndexOutOfRange {
                index: index as isize,
                len,
            });
        }
        self.promote().insert_from_slice(index, values.as_slice());
        Ok(())
    }

    /// Elements selected by a Python-style slice, or `None` if none are.
    ///
    /// # Errors
    /// - `ScalarShape` on a scalar container
    /// - `InvalidArgument` for a zero step
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> NumericResult<Option<Self>> {
        let values = match &self.repr {
            Repr::Scalar(_) => return Err(NumericError::ScalarShape { operation: "slice" }),
            Repr::Multi(v) => v,
        };
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(NumericError::InvalidArgument(
                "slice step cannot be zero".to_string(),
            ));
        }
        let len = values.len() as isize;
        let clamp = |bound: isize, lo: isize, hi: isize| {
            let b = if bound < 0 { bound + len } else { bound };
            b.clamp(lo, hi)
        };
        let stride = step.unsigned_abs();
        let picked: Values = if step > 0 {
            let from = start.map_or(0, |s| clamp(s, 0, len)) as usize;
            let to = stop.map_or(len, |s| clamp(s, 0, len)) as usize;
            (from..to).step_by(stride).map(|i| values[i]).collect()
        } else {
            // Bounds lie in -1..len, so `to + 1` is never negative
            let from = start.map_or(len - 1, |s| clamp(s, -1, len - 1));
            let to = stop.map_or(-1, |s| clamp(s, -1, len - 1));
            ((to + 1)..=from)
                .rev()
                .step_by(stride)
                .map(|i| values[i as usize])
                .collect()
        };
        if picked.is_empty() {
            return Ok(None);
        }
        Self::from_values(picked).map(Some)
    }

    // ========================================================================
    // Hashing
    // ========================================================================

    /// The scalar to hash by; multi containers are unhashable.
    ///
    /// # Errors
    /// Returns `Unhashable` for the multi shape.
    pub fn hash_key(&self) -> NumericResult<Scalar> {
        match self.repr {
            Repr::Scalar(x) => Ok(x),
            Repr::Multi(_) => Err(NumericError::Unhashable),
        }
    }

    /// Feed a scalar container into `state`.
    pub fn try_hash<H: Hasher>(&self, state: &mut H) -> NumericResult<()> {
        self.hash_key()?.hash(state);
        Ok(())
    }
}

impl TryFrom<&Number> for Scalar {
    type Error = NumericError;

    fn try_from(number: &Number) -> Result<Self, Self::Error> {
        number.to_scalar()
    }
}

impl From<Scalar> for Number {
    fn from(value: Scalar) -> Self {
        Self::scalar(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::scalar(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl<'a> IntoIterator for &'a Number {
    type Item = Scalar;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Scalar>>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter().copied()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number;
    use crate::numeric::ErrorKind;
    use std::collections::hash_map::DefaultHasher;

    #[test]
    fn test_construction_shapes() {
        assert!(Number::new([5]).unwrap().is_scalar());
        let multi = Number::new([1, 2, 3]).unwrap();
        assert!(multi.is_multi());
        assert_eq!(multi.len(), 3);
        assert_eq!(
            Number::new(Vec::<i64>::new()).unwrap_err(),
            NumericError::Empty
        );
    }

    #[test]
    fn test_parse_literals() {
        let n = Number::parse_literals(&["1", "2.5", "-3"]).unwrap();
        assert_eq!(n, number![1, 2.5, -3]);

        let err = Number::parse_literals(&["1", "two"]).unwrap_err();
        assert_eq!(err, NumericError::NonNumeric("two".to_string()));
        assert_eq!(err.kind(), ErrorKind::Construction);
    }

    #[test]
    fn test_linspace() {
        let n = Number::linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(n, number![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(Number::linspace(3.0, 9.0, 1).unwrap(), number![3.0]);
        assert!(Number::linspace(0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_indexing() {
        let mut n = number![10, 20, 30];
        assert_eq!(n.get(0).unwrap(), Scalar::Int(10));
        assert_eq!(n.get(-1).unwrap(), Scalar::Int(30));
        assert_eq!(
            n.get(3).unwrap_err(),
            NumericError::IndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(
            n.get(-4).unwrap_err(),
            NumericError::IndexOutOfRange { index: -4, len: 3 }
        );

        n.set(-1, 99.5).unwrap();
        assert_eq!(n, number![10, 20, 99.5]);

        n.delete(0).unwrap();
        assert_eq!(n, number![20, 99.5]);
    }

    #[test]
    fn test_scalar_rejects_indexing() {
        let mut n = number![5];
        assert_eq!(n.get(0).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(n.set(0, 1).unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(n.delete(0).unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn test_delete_keeps_multi_shape() {
        let mut n = number![1, 2];
        n.delete(0).unwrap();
        assert!(n.is_multi());
        assert_eq!(n.len(), 1);
        assert_eq!(n.to_scalar().unwrap(), Scalar::Int(2));
        assert_eq!(n.delete(0).unwrap_err(), NumericError::Empty);
    }

    #[test]
    fn test_remove_chained() {
        let mut n = number![1, 2, 3, 4, 5];
        n.remove(&[0, 1]).unwrap().remove(&[-1]).unwrap();
        assert_eq!(n, number![3, 4]);

        let mut m = number![1, 2, 3, 4];
        m.remove(&[-1, 0, 0]).unwrap();
        assert_eq!(m, number![2, 3]);

        let mut bad = number![1, 2, 3];
        assert!(bad.remove(&[0, 7]).is_err());
        assert_eq!(bad, number![1, 2, 3]);
        assert_eq!(bad.remove(&[0, 1, 2]).unwrap_err(), NumericError::Empty);
    }

    #[test]
    fn test_delete_range() {
        let mut n = number![1, 2, 3, 4];
        n.delete_range(1, 3).unwrap();
        assert_eq!(n, number![1, 4]);

        let mut m = number![1, 2, 3, 4];
        m.delete_range(-2, 4).unwrap();
        assert_eq!(m, number![1, 2]);
        assert!(m.delete_range(0, 9).is_err());
        assert!(m.delete_range(3, 3).is_err());

        let mut full = number![1, 2, 3];
        full.delete_range(3, 3).unwrap();
        full.delete_range(0, 0).unwrap();
        assert_eq!(full, number![1, 2, 3]);
        assert!(full.delete_range(4, 4).is_err());
    }

    #[test]
    fn test_append_extend_insert() {
        let mut n = number![1];
        n.append(2);
        assert!(n.is_multi());
        assert_eq!(n, number![1, 2]);

        n.extend([3.5, 4.5]);
        assert_eq!(n, number![1, 2, 3.5, 4.5]);

        let mut a = number![1, 2, 3, 4];
        a.insert(0, &number![5, 6, 7, 8]).unwrap();
        assert_eq!(a, number![5, 6, 7, 8, 1, 2, 3, 4]);
        assert!(a.insert(99, &number![1]).is_err());

        let mut s = number![7];
        s.extend(Vec::<i64>::new());
        assert!(s.is_scalar());
    }

    #[test]
    fn test_slice() {
        let n = number![0, 1, 2, 3, 4, 5];
        assert_eq!(
            n.slice(Some(1), Some(4), None).unwrap(),
            Some(number![1, 2, 3])
        );
        assert_eq!(
            n.slice(None, None, Some(-2)).unwrap(),
            Some(number![5, 3, 1])
        );
        assert_eq!(n.slice(Some(2), Some(3), None).unwrap(), Some(number![2]));
        assert_eq!(n.slice(Some(4), Some(1), None).unwrap(), None);
        assert!(number![1].slice(None, None, None).is_err());
    }

    #[test]
    fn test_slice_extreme_steps() {
        let n = number![0, 1, 2, 3, 4, 5];
        assert_eq!(n.slice(Some(1), None, Some(isize::MAX)).unwrap(), Some(number![1]));
        assert_eq!(n.slice(None, None, Some(isize::MIN)).unwrap(), Some(number![5]));
        assert_eq!(n.slice(Some(2), None, Some(isize::MIN)).unwrap(), Some(number![2]));
        assert_eq!(
            n.slice(Some(isize::MIN), Some(isize::MAX), Some(4)).unwrap(),
            Some(number![0, 4])
        );
        assert_eq!(n.slice(Some(isize::MAX), None, Some(1)).unwrap(), None);
        assert_eq!(n.slice(Some(-1), Some(isize::MIN), Some(-5)).unwrap(), Some(number![5, 0]));
    }

    #[test]
    fn test_combine_dispatch() {
        let add = |a: Scalar, b: Scalar| a.checked_add(b);
        let x = number![1, 2, 3];
        assert_eq!(
            x.try_combine(&number![1, 1, 1], "add", add).unwrap(),
            number![2, 3, 4]
        );
        assert_eq!(x.try_combine(10, "add", add).unwrap(), number![11, 12, 13]);
        assert_eq!(
            x.try_combine(&number![1, 1], "add", add).unwrap_err(),
            NumericError::LengthMismatch { left: 3, right: 2 }
        );
        assert_eq!(
            x.try_combine(&number![1], "add", add).unwrap_err(),
            NumericError::ShapeMismatch { operation: "add" }
        );
    }

    #[test]
    fn test_try_zip_with_propagates_caller_error() {
        #[derive(Debug, PartialEq)]
        enum MyError {
            Numeric(NumericError),
            Rejected(i64),
        }
        impl From<NumericError> for MyError {
            fn from(e: NumericError) -> Self {
                MyError::Numeric(e)
            }
        }

        let result = number![1, 2, 3].try_zip_with(&number![1, 0, 1], |a, b| {
            if b.is_zero() {
                Err(MyError::Rejected(a.integral_value().unwrap_or_default()))
            } else {
                Ok(a)
            }
        });
        assert_eq!(result.unwrap_err(), MyError::Rejected(2));

        let shape = number![1].try_zip_with(&number![1, 2], |a, _| Ok::<_, MyError>(a));
        assert!(matches!(shape, Err(MyError::Numeric(_))));
    }

    #[test]
    fn test_hashing_policy() {
        let mut hasher = DefaultHasher::new();
        assert!(number![5].try_hash(&mut hasher).is_ok());
        assert_eq!(
            number![1, 2].try_hash(&mut hasher).unwrap_err(),
            NumericError::Unhashable
        );
        assert_eq!(number![5].hash_key().unwrap(), Scalar::Int(5));
    }

    #[test]
    fn test_to_scalar_and_multi() {
        assert_eq!(Scalar::try_from(&number![4]).unwrap(), Scalar::Int(4));
        assert!(number![1, 2].to_scalar().is_err());
        let m = number![4].to_multi();
        assert!(m.is_multi());
        assert_eq!(m.len(), 1);
    }
}
