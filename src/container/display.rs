// ============================================================================
// Container Display
// Text rendering and optional serde support
// ============================================================================

use super::number::{Number, Repr};
use crate::config::{DisplayConfig, DisplayMode};
use crate::numeric::Scalar;
use std::fmt;

/// Borrowed renderer returned by [`Number::display_with`].
pub struct NumberDisplay<'a> {
    number: &'a Number,
    config: &'a DisplayConfig,
}

impl Number {
    /// Render with a custom [`DisplayConfig`].
    ///
    /// # Example
    /// ```ignore
    /// let config = DisplayConfig::value_only().with_precision(2);
    /// assert_eq!(number![1.0, 2.5].display_with(&config).to_string(), "(1.00, 2.50)");
    /// ```
    pub fn display_with<'a>(&'a self, config: &'a DisplayConfig) -> NumberDisplay<'a> {
        NumberDisplay {
            number: self,
            config,
        }
    }

    fn write_body(&self, f: &mut fmt::Formatter<'_>, precision: Option<usize>) -> fmt::Result {
        match &self.repr {
            Repr::Scalar(x) => write_one(f, x, precision),
            Repr::Multi(values) => {
                f.write_str("(")?;
                for (i, x) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_one(f, x, precision)?;
                }
                if values.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            },
        }
    }
}

fn write_one(f: &mut fmt::Formatter<'_>, x: &Scalar, precision: Option<usize>) -> fmt::Result {
    match precision {
        Some(p) => write!(f, "{:.*}", p, x),
        None => write!(f, "{}", x),
    }
}

impl fmt::Display for Number {
    /// `value:5`, `value:(1, 2.5, 3)`; a one-element sequence renders as
    /// `value:(1,)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value:")?;
        self.write_body(f, None)
    }
}

impl fmt::Display for NumberDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.mode == DisplayMode::Visual {
            write!(f, "{}:", self.config.label)?;
        }
        self.number.write_body(f, self.config.precision)
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::super::number::{Number, Repr};
    use crate::numeric::Scalar;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Number {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match &self.repr {
                Repr::Scalar(x) => x.serialize(serializer),
                Repr::Multi(values) => values.serialize(serializer),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        One(Scalar),
        Many(Vec<Scalar>),
    }

    impl<'de> Deserialize<'de> for Number {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match Wire::deserialize(deserializer)? {
                Wire::One(x) => Ok(Number::scalar(x)),
                Wire::Many(values) if values.is_empty() => {
                    Err(D::Error::custom("a number must hold at least one value"))
                },
                Wire::Many(values) => Ok(Number::from_repr(Repr::Multi(values.into_iter().collect()))),
            }
        }
    }
}
