// ============================================================================
// Numeric Module
// Scalar element type and the error taxonomy shared by the whole crate
// ============================================================================
//
// This module provides:
// - Scalar: an integer-or-float element with checked arithmetic
// - NumericError / ErrorKind: error types for every numeric operation
// - NumericResult: result alias used across the crate
//
// Design principles:
// - Integer arithmetic never wraps; overflow is an error
// - All fallible arithmetic returns Result (no panics)
// - Mixed int/float equality and hashing agree with each other

mod errors;
mod scalar;

pub use errors::{ErrorKind, NumericError, NumericResult};
pub use scalar::Scalar;
