// ============================================================================
// Numeric Errors
// Error types for scalar and container operations
// ============================================================================

use std::fmt;

/// Broad classification of a [`NumericError`].
///
/// Callers that only care about *what went wrong* (rather than the exact
/// operands) can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No values supplied, or a supplied value is not numeric
    Construction,
    /// Scalar and multi operands mixed where broadcasting is not defined
    ShapeMismatch,
    /// Two multi operands of different lengths
    LengthMismatch,
    /// Input outside the domain of the operation
    Domain,
    /// A divisor element is zero
    DivisionByZero,
    /// Positional access beyond bounds
    IndexOutOfRange,
    /// Operation not supported for the container's shape
    Type,
    /// Integer result does not fit in an i64
    Overflow,
    /// Expression string could not be parsed
    Expression,
}

/// Errors that can occur while building or operating on numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericError {
    /// Construction without any value
    Empty,
    /// A supplied literal is not a number
    NonNumeric(String),
    /// Scalar operand combined with a multi operand
    ShapeMismatch { operation: &'static str },
    /// Multi operands with different lengths
    LengthMismatch { left: usize, right: usize },
    /// Value outside the domain of the operation
    Domain(&'static str),
    /// Attempted division by zero
    DivisionByZero,
    /// Index outside `[-len, len)`
    IndexOutOfRange { index: isize, len: usize },
    /// Operation only defined for multi-value containers
    ScalarShape { operation: &'static str },
    /// Hash requested for a multi-value container
    Unhashable,
    /// Integer arithmetic exceeded the i64 range
    Overflow,
    /// Moving-average window outside `[1, len]`
    InvalidWindow { window: usize, len: usize },
    /// Argument rejected by validation
    InvalidArgument(String),
    /// Expression string rejected by the parser
    Expression { position: usize, message: String },
}

impl NumericError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumericError::Empty | NumericError::NonNumeric(_) => ErrorKind::Construction,
            NumericError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            NumericError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            NumericError::Domain(_)
            | NumericError::InvalidWindow { .. }
            | NumericError::InvalidArgument(_) => ErrorKind::Domain,
            NumericError::DivisionByZero => ErrorKind::DivisionByZero,
            NumericError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            NumericError::ScalarShape { .. } | NumericError::Unhashable => ErrorKind::Type,
            NumericError::Overflow => ErrorKind::Overflow,
            NumericError::Expression { .. } => ErrorKind::Expression,
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Empty => write!(f, "a number must hold at least one value"),
            NumericError::NonNumeric(found) => {
                write!(f, "all values must be int or float, found {:?}", found)
            },
            NumericError::ShapeMismatch { operation } => {
                write!(f, "cannot {} a single value with multiple values", operation)
            },
            NumericError::LengthMismatch { left, right } => write!(
                f,
                "length mismatch: left has {} values, right has {}",
                left, right
            ),
            NumericError::Domain(reason) => write!(f, "domain error: {}", reason),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for length {}", index, len)
            },
            NumericError::ScalarShape { operation } => {
                write!(f, "cannot {} a single value", operation)
            },
            NumericError::Unhashable => {
                write!(f, "unhashable type: number with multiple values")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: integer result exceeded i64 range")
            },
            NumericError::InvalidWindow { window, len } => write!(
                f,
                "window size {} must lie within [1, {}]",
                window, len
            ),
            NumericError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            NumericError::Expression { position, message } => {
                write!(f, "invalid expression at {}: {}", position, message)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::ShapeMismatch { operation: "add" }.to_string(),
            "cannot add a single value with multiple values"
        );
        assert_eq!(
            NumericError::IndexOutOfRange { index: -4, len: 3 }.to_string(),
            "index -4 is out of range for length 3"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(NumericError::Empty.kind(), ErrorKind::Construction);
        assert_eq!(
            NumericError::NonNumeric("abc".into()).kind(),
            ErrorKind::Construction
        );
        assert_eq!(
            NumericError::InvalidWindow { window: 0, len: 5 }.kind(),
            ErrorKind::Domain
        );
        assert_eq!(NumericError::Unhashable.kind(), ErrorKind::Type);
        assert_eq!(
            NumericError::ScalarShape { operation: "index" }.kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::DivisionByZero);
    }
}
