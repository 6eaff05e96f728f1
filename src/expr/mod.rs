// ============================================================================
// Expression Module
// Restricted arithmetic expressions for building numbers from strings
// ============================================================================

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use lexer::{LexError, Token};
pub use parser::{evaluate, expr_parser, parse, ParseError, MAX_DEPTH};

use crate::container::{Number, Values};
use crate::numeric::{NumericResult, Scalar};

impl Number {
    /// Evaluate each arithmetic expression and collect the results as
    /// floats.
    ///
    /// Only numeric literals, `+ - * / // % **` and parentheses are
    /// accepted; nothing else in the string is ever executed.
    ///
    /// # Errors
    /// - `Empty` for an empty slice
    /// - `Expression` for input outside the grammar
    /// - arithmetic errors raised while evaluating
    ///
    /// # Example
    /// ```ignore
    /// let n = Number::create(&["1 + 1", "2 ** 3", "7 / 2"])?;
    /// assert_eq!(n, number![2.0, 8.0, 3.5]);
    /// ```
    pub fn create<S: AsRef<str>>(expressions: &[S]) -> NumericResult<Self> {
        let values = expressions
            .iter()
            .enumerate()
            .map(|(index, source)| {
                evaluate(source.as_ref())
                    .map(|x| Scalar::Float(x.as_f64()))
                    .inspect_err(|e| tracing::debug!(index, error = %e, "rejected expression"))
            })
            .collect::<NumericResult<Values>>()?;
        tracing::debug!(count = values.len(), "created number from expressions");
        Self::from_values(values)
    }
}
