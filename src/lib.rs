// ============================================================================
// Numeric Container Library
// Scalar-or-sequence numbers with a uniform arithmetic and statistics surface
// ============================================================================

//! # Numeric Container
//!
//! A value type holding either one number or an ordered sequence of numbers,
//! with one operation surface that branches on shape.
//!
//! ## Features
//!
//! - **Shape-dispatched arithmetic**: scalar with scalar, sequence with
//!   equal-length sequence, or either with a broadcast raw number
//! - **Checked integer arithmetic** with float promotion where needed
//! - **Statistics** (median, mode, variance, moving averages, cumulative series)
//! - **Restricted expression evaluation** for building numbers from strings
//! - **Optional serde** support behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use numeric_container::prelude::*;
//!
//! let a = number![1, 2, 3];
//! let b = number![4, 5, 6];
//!
//! let sum = a.checked_add(&b).unwrap();
//! assert_eq!(sum, number![5, 7, 9]);
//! assert_eq!(sum.to_string(), "value:(5, 7, 9)");
//!
//! // Scalar mixed with multi never broadcasts implicitly
//! assert!(a.checked_add(&number![1]).is_err());
//!
//! // Raw numbers do
//! assert_eq!(a.checked_mul(2).unwrap(), number![2, 4, 6]);
//!
//! let parsed = Number::create(&["2 ** 3", "1 / 4"]).unwrap();
//! assert_eq!(parsed, number![8.0, 0.25]);
//! ```

pub mod config;
pub mod container;
pub mod expr;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{DisplayConfig, DisplayMode};
    pub use crate::container::{CumulativeStats, Number, Operand, Shape};
    pub use crate::number;
    pub use crate::numeric::{ErrorKind, NumericError, NumericResult, Scalar};
    pub use crate::utils::{KeyValueString, RangeKind, RangePlusPlus};
}
