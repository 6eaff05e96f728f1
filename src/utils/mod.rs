// ============================================================================
// Utilities Module
// Small standalone helpers that sit beside the numeric container
// ============================================================================

mod key_value;
mod range_plus;

pub use key_value::{KeyValueError, KeyValueString};
pub use range_plus::{RangeError, RangeKind, RangePlusPlus};
