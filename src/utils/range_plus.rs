// ============================================================================
// Range Plus Plus
// Integer ranges with custom step, direction, mapping and rendering
// ============================================================================

use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A step of zero never reaches the end
    ZeroStep,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::ZeroStep => write!(f, "range step cannot be zero"),
        }
    }
}

impl std::error::Error for RangeError {}

/// How the generated values are collected and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeKind {
    /// `[a, b, c]`
    #[default]
    List,
    /// `{a, b, c}`, duplicates dropped keeping first occurrence
    Set,
    /// `(a, b, c)`
    Tuple,
}

/// `start, start + step, ...` up to (excluding) `end`, each passed through a
/// mapping function.
///
/// # Example
/// ```ignore
/// let r = RangePlusPlus::new(1, 10).step(2)?.map(|x| x * 2);
/// assert_eq!(r.to_string(), "[2, 6, 10, 14, 18]");
/// ```
#[derive(Clone)]
pub struct RangePlusPlus<F = fn(i64) -> i64> {
    start: i64,
    end: i64,
    step: i64,
    ascending: bool,
    kind: RangeKind,
    mapping: F,
}

fn identity(x: i64) -> i64 {
    x
}

impl RangePlusPlus {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            step: 1,
            ascending: true,
            kind: RangeKind::List,
            mapping: identity,
        }
    }
}

impl<F: Fn(i64) -> i64> RangePlusPlus<F> {
    /// Builder method: Set the step (may be negative)
    ///
    /// # Errors
    /// Returns `ZeroStep` for a zero step.
    pub fn step(mut self, step: i64) -> Result<Self, RangeError> {
        if step == 0 {
            return Err(RangeError::ZeroStep);
        }
        self.step = step;
        Ok(self)
    }

    /// Builder method: Emit the mapped values in reverse order
    pub fn descending(mut self) -> Self {
        self.ascending = false;
        self
    }

    /// Builder method: Set the collection kind
    pub fn kind(mut self, kind: RangeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder method: Replace the mapping function
    pub fn map<G: Fn(i64) -> i64>(self, mapping: G) -> RangePlusPlus<G> {
        RangePlusPlus {
            start: self.start,
            end: self.end,
            step: self.step,
            ascending: self.ascending,
            kind: self.kind,
            mapping,
        }
    }

    fn raw_values(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut x = self.start;
        while (self.step > 0 && x < self.end) || (self.step < 0 && x > self.end) {
            out.push(x);
            match x.checked_add(self.step) {
                Some(next) => x = next,
                None => break,
            }
        }
        out
    }

    /// The generated values, mapped, ordered and de-duplicated per kind.
    pub fn to_vec(&self) -> Vec<i64> {
        let mut values: Vec<i64> = self.raw_values().into_iter().map(&self.mapping).collect();
        if !self.ascending {
            values.reverse();
        }
        if self.kind == RangeKind::Set {
            let mut seen = HashSet::new();
            values.retain(|x| seen.insert(*x));
        }
        values
    }
}

impl<F: Fn(i64) -> i64> fmt::Display for RangePlusPlus<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.kind {
            RangeKind::List => ("[", "]"),
            RangeKind::Set => ("{", "}"),
            RangeKind::Tuple => ("(", ")"),
        };
        let body = self
            .to_vec()
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}{}{}", open, body, close)
    }
}

impl<F: Fn(i64) -> i64> fmt::Debug for RangePlusPlus<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangePlusPlus")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .field("ascending", &self.ascending)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<F: Fn(i64) -> i64> IntoIterator for &RangePlusPlus<F> {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_list() {
        let r = RangePlusPlus::new(1, 10).step(2).unwrap().map(|x| x * 2);
        assert_eq!(r.to_string(), "[2, 6, 10, 14, 18]");
    }

    #[test]
    fn test_descending_and_kinds() {
        let r = RangePlusPlus::new(0, 4).descending().kind(RangeKind::Tuple);
        assert_eq!(r.to_string(), "(3, 2, 1, 0)");

        let set = RangePlusPlus::new(-3, 4).map(|x| x * x).kind(RangeKind::Set);
        assert_eq!(set.to_string(), "{9, 4, 1, 0}");
        assert_eq!(set.to_vec(), vec![9, 4, 1, 0]);
    }

    #[test]
    fn test_negative_step_and_empty() {
        let r = RangePlusPlus::new(5, 0).step(-2).unwrap();
        assert_eq!(r.to_vec(), vec![5, 3, 1]);
        assert_eq!(RangePlusPlus::new(3, 3).to_string(), "[]");
        assert_eq!(RangePlusPlus::new(0, 3).step(0).unwrap_err(), RangeError::ZeroStep);
    }

    #[test]
    fn test_into_iterator() {
        let r = RangePlusPlus::new(0, 3);
        let total: i64 = (&r).into_iter().sum();
        assert_eq!(total, 3);
        let mut seen = Vec::new();
        for x in &r {
            seen.push(x);
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_saturating_end() {
        let r = RangePlusPlus::new(i64::MAX - 2, i64::MAX).step(5).unwrap();
        assert_eq!(r.to_vec(), vec![i64::MAX - 2]);
    }
}
