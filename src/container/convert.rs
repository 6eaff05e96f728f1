// ============================================================================
// Container Conversions
// Casts, collection views, reduction, filtering and radix rendering
// ============================================================================

use super::number::{Number, Values};
use crate::numeric::{NumericError, NumericResult, Scalar};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

impl Number {
    // ========================================================================
    // Casts
    // ========================================================================

    /// Truncate every element toward zero.
    pub fn to_int(&self) -> NumericResult<Self> {
        self.try_map(|x| x.to_int_trunc().map(Scalar::Int))
    }

    pub fn to_float(&self) -> Self {
        self.map(Scalar::as_f64)
    }

    /// Every element as a `Decimal`.
    ///
    /// # Errors
    /// Returns `Domain` for NaN or infinite elements.
    pub fn to_decimal(&self) -> NumericResult<Vec<Decimal>> {
        self.iter().map(Scalar::to_decimal).collect()
    }

    // ========================================================================
    // Collections
    // ========================================================================

    pub fn to_vec(&self) -> Vec<Scalar> {
        self.as_slice().to_vec()
    }

    pub fn to_set(&self) -> HashSet<Scalar> {
        self.iter().collect()
    }

    /// Map from position to element.
    pub fn to_index_map(&self) -> BTreeMap<usize, Scalar> {
        self.iter().enumerate().collect()
    }

    /// Map from caller-supplied keys to elements, in order.
    ///
    /// # Errors
    /// Returns `LengthMismatch` unless there is exactly one key per element.
    pub fn to_map_with_keys<K, I>(&self, keys: I) -> NumericResult<BTreeMap<K, Scalar>>
    where
        K: Ord,
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        if keys.len() != self.len() {
            return Err(NumericError::LengthMismatch {
                left: self.len(),
                right: keys.len(),
            });
        }
        Ok(keys.into_iter().zip(self.iter()).collect())
    }

    // ========================================================================
    // Reduction & Filtering
    // ========================================================================

    /// Fold every element with `f`, starting from `seed` or else the first
    /// element.
    pub fn reduce<F>(&self, seed: Option<Scalar>, mut f: F) -> Scalar
    where
        F: FnMut(Scalar, Scalar) -> Scalar,
    {
        let mut values = self.iter();
        let init = match seed {
            Some(s) => s,
            None => match values.next() {
                Some(first) => first,
                None => return Scalar::default(),
            },
        };
        values.fold(init, |acc, x| f(acc, x))
    }

    /// Fallible [`Number::reduce`]; errors from `f` propagate unchanged.
    pub fn try_reduce<F, E>(&self, seed: Option<Scalar>, mut f: F) -> Result<Scalar, E>
    where
        F: FnMut(Scalar, Scalar) -> Result<Scalar, E>,
    {
        let mut values = self.iter();
        let init = match seed {
            Some(s) => s,
            None => match values.next() {
                Some(first) => first,
                None => return Ok(Scalar::default()),
            },
        };
        values.try_fold(init, |acc, x| f(acc, x))
    }

    /// Elements satisfying `pred`, or `None` if none do.
    ///
    /// One survivor yields a scalar container.
    pub fn filter<P>(&self, mut pred: P) -> Option<Self>
    where
        P: FnMut(Scalar) -> bool,
    {
        let kept: Values = self.iter().filter(|x| pred(*x)).collect();
        Self::from_values(kept).ok()
    }

    /// Fallible [`Number::filter`].
    pub fn try_filter<P, E>(&self, mut pred: P) -> Result<Option<Self>, E>
    where
        P: FnMut(Scalar) -> Result<bool, E>,
    {
        let mut kept = Values::new();
        for x in self.iter() {
            if pred(x)? {
                kept.push(x);
            }
        }
        Ok(Self::from_values(kept).ok())
    }

    // ========================================================================
    // Radix Rendering
    // ========================================================================

    fn radix_strings(&self, render: fn(u64) -> String) -> NumericResult<Vec<String>> {
        self.iter()
            .map(|x| -> NumericResult<String> {
                let i = x.to_int_trunc()?;
                let sign = if i < 0 { "-" } else { "" };
                Ok(format!("{}{}", sign, render(i.unsigned_abs())))
            })
            .collect()
    }

    /// Binary renderings such as `0b101` and `-0b11`, after truncation.
    pub fn bin(&self) -> NumericResult<Vec<String>> {
        self.radix_strings(|u| format!("0b{:b}", u))
    }

    pub fn hex(&self) -> NumericResult<Vec<String>> {
        self.radix_strings(|u| format!("0x{:x}", u))
    }

    pub fn oct(&self) -> NumericResult<Vec<String>> {
        self.radix_strings(|u| format!("0o{:o}", u))
    }
}
