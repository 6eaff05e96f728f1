// ============================================================================
// Expression Parser
// Combinator parser over the restricted arithmetic grammar
// ============================================================================
//
//   expr  := term (('+' | '-') term)*
//   term  := unary (('*' | '/' | '//' | '%') unary)*
//   unary := ('+' | '-')* power
//   power := atom ('**' unary)?
//   atom  := INT | FLOAT | '(' expr ')'

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::lexer::Token;
use crate::numeric::{NumericError, NumericResult, Scalar};
use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::Stream;
use logos::Logos;
use std::ops::Range;

/// Deepest nesting accepted before parsing is refused.
pub const MAX_DEPTH: usize = 64;

/// Type alias for parser errors; spans are byte ranges of the source.
pub type ParseError = Simple<Token>;

fn error(position: usize, message: impl Into<String>) -> NumericError {
    NumericError::Expression {
        position,
        message: message.into(),
    }
}

fn describe(e: &ParseError) -> String {
    match e.reason() {
        SimpleReason::Unclosed { delimiter, .. } => format!("unclosed `{}`", delimiter),
        SimpleReason::Custom(message) => message.clone(),
        SimpleReason::Unexpected => match e.found() {
            Some(token) => format!("unexpected `{}`", token),
            None => "unexpected end of expression".to_string(),
        },
    }
}

pub fn expr_parser() -> impl Parser<Token, Expr, Error = ParseError> {
    recursive(|expr| {
        let literal = select! {
            Token::Int(i) => Expr::Literal(Scalar::Int(i)),
            Token::Float(x) => Expr::Literal(Scalar::Float(x)),
        };

        let atom = literal.or(expr.delimited_by(just(Token::LParen), just(Token::RParen)));

        // `**` binds tighter than a sign on its left and accepts a signed
        // exponent on its right: -2**2 == -4, 2**-1 == 0.5, 2**3**2 == 512
        let unary = recursive(|unary| {
            let power = atom
                .then(just(Token::StarStar).ignore_then(unary).or_not())
                .map(|(base, exponent)| match exponent {
                    Some(exponent) => Expr::binary(BinaryOp::Pow, base, exponent),
                    None => base,
                });

            just(Token::Minus)
                .to(UnaryOp::Neg)
                .or(just(Token::Plus).to(UnaryOp::Pos))
                .repeated()
                .then(power)
                .foldr(Expr::unary)
        });

        let term = unary
            .clone()
            .then(
                choice((
                    just(Token::Star).to(BinaryOp::Mul),
                    just(Token::Slash).to(BinaryOp::Div),
                    just(Token::SlashSlash).to(BinaryOp::FloorDiv),
                    just(Token::Percent).to(BinaryOp::Rem),
                ))
                .then(unary)
                .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
            .boxed();

        term.clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(term)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
    })
}

/// Reject token streams whose parse tree would nest deeper than
/// [`MAX_DEPTH`]: open parentheses plus the pending signs and `**`
/// operators at each level.
fn check_depth(tokens: &[(Token, Range<usize>)]) -> NumericResult<()> {
    let mut chains: Vec<usize> = vec![0];
    let mut expect_operand = true;
    for (token, span) in tokens {
        match token {
            Token::LParen => {
                chains.push(0);
                expect_operand = true;
            },
            Token::RParen => {
                if chains.len() > 1 {
                    chains.pop();
                }
                expect_operand = false;
            },
            Token::Plus | Token::Minus if expect_operand => {
                if let Some(chain) = chains.last_mut() {
                    *chain += 1;
                }
            },
            Token::StarStar => {
                if let Some(chain) = chains.last_mut() {
                    *chain += 1;
                }
                expect_operand = true;
            },
            Token::Int(_) | Token::Float(_) => expect_operand = false,
            _ => {
                if let Some(chain) = chains.last_mut() {
                    *chain = 0;
                }
                expect_operand = true;
            },
        }
        let depth = chains.len() - 1 + chains.iter().sum::<usize>();
        if depth > MAX_DEPTH {
            return Err(error(span.start, "expression nested too deeply"));
        }
    }
    Ok(())
}

/// Parse one expression string into a tree.
///
/// # Errors
/// `Expression` for anything outside the grammar, carrying the byte offset.
pub fn parse(source: &str) -> NumericResult<Expr> {
    let tokens = Token::lexer(source)
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok((token, span)),
            Err(e) => Err(error(
                span.start,
                format!("{} `{}`", e, &source[span.clone()]),
            )),
        })
        .collect::<NumericResult<Vec<_>>>()?;

    if tokens.is_empty() {
        return Err(error(0, "empty expression"));
    }
    check_depth(&tokens)?;

    let eoi = source.len();
    expr_parser()
        .then_ignore(end())
        .parse(Stream::from_iter(eoi..eoi + 1, tokens.into_iter()))
        .map_err(|errors| match errors.first() {
            Some(e) => error(e.span().start, describe(e)),
            None => error(eoi, "invalid expression"),
        })
}

/// Evaluate one expression string.
///
/// # Errors
/// - `Expression` for anything outside the grammar, carrying the byte offset
/// - arithmetic errors (`DivisionByZero`, `Overflow`, `Domain`) unchanged
///
/// # Example
/// ```ignore
/// assert_eq!(evaluate("-2**2")?, Scalar::Int(-4));
/// assert_eq!(evaluate("(1 + 2) / 4")?, Scalar::Float(0.75));
/// ```
pub fn evaluate(source: &str) -> NumericResult<Scalar> {
    parse(source)?.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    fn eval(source: &str) -> Scalar {
        evaluate(source).unwrap()
    }

    fn position(source: &str) -> usize {
        match evaluate(source).unwrap_err() {
            NumericError::Expression { position, .. } => position,
            other => panic!("expected an expression error, got {:?}", other),
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(eval("42"), Scalar::Int(42));
        assert_eq!(eval("  2.5 "), Scalar::Float(2.5));
        assert_eq!(eval("(7)"), Scalar::Int(7));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1 + 2 * 3"), Scalar::Int(7));
        assert_eq!(eval("(1 + 2) * 3"), Scalar::Int(9));
        assert_eq!(eval("10 - 4 - 3"), Scalar::Int(3));
        assert_eq!(eval("7 // 2 + 7 % 2"), Scalar::Int(4));
        assert_eq!(eval("1 / 4"), Scalar::Float(0.25));
    }

    #[test]
    fn test_power_binding() {
        assert_eq!(eval("-2**2"), Scalar::Int(-4));
        assert_eq!(eval("(-2)**2"), Scalar::Int(4));
        assert_eq!(eval("2**-1"), Scalar::Float(0.5));
        assert_eq!(eval("2**3**2"), Scalar::Int(512));
        assert_eq!(eval("--3"), Scalar::Int(3));
        assert_eq!(eval("+4"), Scalar::Int(4));
        assert_eq!(eval("2 * -3"), Scalar::Int(-6));
    }

    #[test]
    fn test_parse_tree_shape() {
        let tree = parse("-2**2").unwrap();
        assert_eq!(
            tree,
            Expr::unary(
                UnaryOp::Neg,
                Expr::binary(
                    BinaryOp::Pow,
                    Expr::Literal(Scalar::Int(2)),
                    Expr::Literal(Scalar::Int(2))
                )
            )
        );
    }

    #[test]
    fn test_arithmetic_errors_propagate() {
        assert_eq!(evaluate("1/0").unwrap_err(), NumericError::DivisionByZero);
        assert_eq!(evaluate("5 % 0").unwrap_err(), NumericError::DivisionByZero);
        assert_eq!(
            evaluate("9223372036854775807 + 1").unwrap_err(),
            NumericError::Overflow
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(position(""), 0);
        assert_eq!(position("   "), 0);
        assert_eq!(position("1 +"), 3);
        assert_eq!(position("(1 + 2"), 6);
        assert_eq!(position("__import__('os')"), 0);
        assert_eq!(position("1 + x"), 4);
        assert_eq!(evaluate("1 2").unwrap_err().kind(), ErrorKind::Expression);
        assert_eq!(evaluate("2 * )").unwrap_err().kind(), ErrorKind::Expression);
        assert_eq!(
            evaluate("99999999999999999999").unwrap_err().kind(),
            ErrorKind::Expression
        );
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(position(&deep), MAX_DEPTH);

        let at_limit = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(eval(&at_limit), Scalar::Int(1));

        let negations = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        assert_eq!(evaluate(&negations).unwrap_err().kind(), ErrorKind::Expression);

        let powers = format!("1{}", "**1".repeat(MAX_DEPTH + 1));
        assert_eq!(evaluate(&powers).unwrap_err().kind(), ErrorKind::Expression);

        let flat = vec!["-1"; MAX_DEPTH * 2].join(" + ");
        assert_eq!(eval(&flat), Scalar::Int(-(MAX_DEPTH as i64) * 2));
    }
}
