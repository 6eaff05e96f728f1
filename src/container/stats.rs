// ============================================================================
// Container Statistics
// Aggregates, order statistics and cumulative series
// ============================================================================

use super::number::{Number, Repr, Values};
use crate::numeric::{NumericError, NumericResult, Scalar};
use std::collections::{HashMap, HashSet};

/// Running statistics over a multi-value container.
///
/// Element `i` of each series summarizes the first `i + 1` input values.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeStats {
    pub sum: Number,
    pub mean: Number,
    pub max: Number,
    pub min: Number,
}

impl Number {
    fn multi_values(&self, operation: &'static str) -> NumericResult<&[Scalar]> {
        match &self.repr {
            Repr::Scalar(_) => Err(NumericError::ScalarShape { operation }),
            Repr::Multi(v) => Ok(v.as_slice()),
        }
    }

    /// Same-length series: keeps the multi shape even for one element.
    fn same_shape(&self, values: Values) -> Self {
        match self.repr {
            Repr::Scalar(_) if values.len() == 1 => Self::scalar(values[0]),
            _ => Self::from_repr(Repr::Multi(values)),
        }
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Sum of all elements.
    ///
    /// # Errors
    /// Returns `Overflow` if an integer sum leaves the i64 range.
    pub fn sum(&self) -> NumericResult<Scalar> {
        self.iter().try_fold(Scalar::ZERO, Scalar::checked_add)
    }

    /// Product of all elements.
    pub fn product(&self) -> NumericResult<Scalar> {
        self.iter().try_fold(Scalar::ONE, Scalar::checked_mul)
    }

    /// Arithmetic mean as a float.
    pub fn mean(&self) -> NumericResult<f64> {
        Ok(self.sum()?.as_f64() / self.len() as f64)
    }

    /// Alias of [`Number::mean`].
    #[inline]
    pub fn average(&self) -> NumericResult<f64> {
        self.mean()
    }

    /// Smallest element; NaN only if every element is NaN.
    pub fn min(&self) -> Scalar {
        self.iter()
            .reduce(|a, b| if b.total_cmp(&a).is_lt() { b } else { a })
            .unwrap_or_default()
    }

    /// Largest element; NaN sorts above every number.
    pub fn max(&self) -> Scalar {
        self.iter()
            .reduce(|a, b| if b.total_cmp(&a).is_gt() { b } else { a })
            .unwrap_or_default()
    }

    /// How many elements equal `value`.
    pub fn count(&self, value: impl Into<Scalar>) -> usize {
        let value = value.into();
        self.iter().filter(|x| *x == value).count()
    }

    /// Number of distinct values.
    pub fn distinct_count(&self) -> usize {
        self.iter().collect::<HashSet<_>>().len()
    }

    // ========================================================================
    // Order Statistics
    // ========================================================================

    fn sorted_values(&self) -> Values {
        let mut values: Values = self.as_slice().iter().copied().collect();
        values.sort_by(Scalar::total_cmp);
        values
    }

    /// Median; the mean of the two middle values for even lengths.
    ///
    /// # Errors
    /// Returns `ScalarShape` on a scalar container.
    pub fn median(&self) -> NumericResult<f64> {
        self.multi_values("take the median of")?;
        let sorted = self.sorted_values();
        let n = sorted.len();
        if n % 2 == 0 {
            Ok((sorted[n / 2 - 1].as_f64() + sorted[n / 2].as_f64()) / 2.0)
        } else {
            Ok(sorted[n / 2].as_f64())
        }
    }

    /// All values sharing the highest frequency, in first-occurrence order.
    pub fn mode(&self) -> Self {
        let mut order: Vec<Scalar> = Vec::new();
        let mut counts: HashMap<Scalar, usize> = HashMap::new();
        for x in self.iter() {
            let count = counts.entry(x).or_insert(0);
            if *count == 0 {
                order.push(x);
            }
            *count += 1;
        }
        let top = counts.values().copied().max().unwrap_or(0);
        let modes: Values = order.into_iter().filter(|x| counts[x] == top).collect();
        Self::from_values(modes).unwrap_or_else(|_| self.clone())
    }

    /// Population variance.
    ///
    /// # Errors
    /// Returns `ScalarShape` on a scalar container.
    pub fn variance(&self) -> NumericResult<f64> {
        let values = self.multi_values("take the variance of")?;
        let mean = self.mean()?;
        let squares: f64 = values.iter().map(|x| (x.as_f64() - mean).powi(2)).sum();
        Ok(squares / values.len() as f64)
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> NumericResult<f64> {
        self.variance().map(f64::sqrt)
    }

    // ========================================================================
    // Derived Sequences
    // ========================================================================

    /// Distinct values in first-occurrence order.
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::new();
        let values: Values = self.iter().filter(|x| seen.insert(*x)).collect();
        Self::from_values(values).unwrap_or_else(|_| self.clone())
    }

    /// Rescale to `[0, 1]` as floats; all-equal input gives all zeros.
    pub fn normalize(&self) -> Self {
        let (lo, hi) = (self.min().as_f64(), self.max().as_f64());
        let range = hi - lo;
        if range == 0.0 {
            return self.map(|_| 0.0);
        }
        self.map(|x| (x.as_f64() - lo) / range)
    }

    /// Means of every window of `window` consecutive elements.
    ///
    /// # Errors
    /// - `ScalarShape` on a scalar container
    /// - `InvalidWindow` unless `1 <= window <= len`
    pub fn moving_average(&self, window: usize) -> NumericResult<Self> {
        let values = self.multi_values("take the moving average of")?;
        if window == 0 || window > values.len() {
            return Err(NumericError::InvalidWindow {
                window,
                len: values.len(),
            });
        }
        let averages = values
            .windows(window)
            .map(|w| {
                let total = w.iter().map(|x| x.as_f64()).sum::<f64>();
                Scalar::Float(total / window as f64)
            })
            .collect();
        Self::from_values(averages)
    }

    /// Running sum, same length as the input.
    pub fn cumsum(&self) -> NumericResult<Self> {
        let mut total = Scalar::ZERO;
        let values = self
            .iter()
            .map(|x| -> NumericResult<Scalar> {
                total = total.checked_add(x)?;
                Ok(total)
            })
            .collect::<NumericResult<Values>>()?;
        Ok(self.same_shape(values))
    }

    /// Running product, same length as the input.
    pub fn cumulative_product(&self) -> NumericResult<Self> {
        let mut total = Scalar::ONE;
        let values = self
            .iter()
            .map(|x| -> NumericResult<Scalar> {
                total = total.checked_mul(x)?;
                Ok(total)
            })
            .collect::<NumericResult<Values>>()?;
        Ok(self.same_shape(values))
    }

    /// Running sum, mean, maximum and minimum.
    ///
    /// # Errors
    /// Returns `ScalarShape` on a scalar container.
    pub fn cumulative_stats(&self) -> NumericResult<CumulativeStats> {
        let values = self.multi_values("take cumulative statistics of")?;
        let first = values[0];
        let (mut total, mut hi, mut lo) = (Scalar::ZERO, first, first);
        let (mut sums, mut means, mut maxes, mut mins) =
            (Values::new(), Values::new(), Values::new(), Values::new());
        for (i, &x) in values.iter().enumerate() {
            total = total.checked_add(x)?;
            if x.total_cmp(&hi).is_gt() {
                hi = x;
            }
            if x.total_cmp(&lo).is_lt() {
                lo = x;
            }
            sums.push(total);
            means.push(Scalar::Float(total.as_f64() / (i + 1) as f64));
            maxes.push(hi);
            mins.push(lo);
        }
        Ok(CumulativeStats {
            sum: self.same_shape(sums),
            mean: self.same_shape(means),
            max: self.same_shape(maxes),
            min: self.same_shape(mins),
        })
    }

    /// Differences between adjacent elements.
    ///
    /// # Errors
    /// - `ScalarShape` on a scalar container
    /// - `Empty` for a one-element multi container
    pub fn diff(&self) -> NumericResult<Self> {
        let values = self.multi_values("take differences of")?;
        let diffs = values
            .windows(2)
            .map(|w| w[1].checked_sub(w[0]))
            .collect::<NumericResult<Values>>()?;
        Self::from_values(diffs)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Whether elements are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.as_slice()
            .windows(2)
            .all(|w| !w[0].total_cmp(&w[1]).is_gt())
    }

    /// Stable sort, ascending unless `reverse`.
    pub fn sort(&self, reverse: bool) -> Self {
        let mut values: Values = self.as_slice().iter().copied().collect();
        if reverse {
            values.sort_by(|a, b| b.total_cmp(a));
        } else {
            values.sort_by(Scalar::total_cmp);
        }
        self.same_shape(values)
    }

    /// Elements in reverse order.
    pub fn reversed(&self) -> Self {
        self.same_shape(self.as_slice().iter().rev().copied().collect())
    }
}
