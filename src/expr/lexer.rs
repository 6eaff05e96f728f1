// ============================================================================
// Expression Lexer
// Tokens of the restricted arithmetic grammar
// ============================================================================

use logos::Logos;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

/// Lexing failure, reported with the offending span by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    #[default]
    UnexpectedCharacter,
    IntegerOutOfRange,
    InvalidFloat,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter => write!(f, "unexpected character"),
            LexError::IntegerOutOfRange => write!(f, "integer literal out of range"),
            LexError::InvalidFloat => write!(f, "invalid float literal"),
        }
    }
}

fn parse_int(lex: &mut logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::IntegerOutOfRange)
}

fn parse_float(lex: &mut logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::InvalidFloat)
}

#[derive(Logos, Debug, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // --- Literals ---
    #[regex(r"[0-9]+", parse_int)]
    Int(i64),

    // 1.5, 1., .5, 1e3, 2.5E-2
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Float(f64),

    // --- Operators ---
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("**")]
    StarStar,

    #[token("/")]
    Slash,

    #[token("//")]
    SlashSlash,

    #[token("%")]
    Percent,

    // --- Grouping ---
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

// Float literals compare by bit pattern so tokens can key parser errors.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Int(a), Token::Int(b)) => a == b,
            (Token::Float(a), Token::Float(b)) => a.to_bits() == b.to_bits(),
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Token::Int(i) => i.hash(state),
            Token::Float(x) => x.to_bits().hash(state),
            _ => {},
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(i) => write!(f, "{}", i),
            Token::Float(x) => write!(f, "{:?}", x),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::StarStar => write!(f, "**"),
            Token::Slash => write!(f, "/"),
            Token::SlashSlash => write!(f, "//"),
            Token::Percent => write!(f, "%"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_single_token(input: &str, expected: Token) {
        let mut lexer = Token::lexer(input);
        assert_eq!(
            lexer.next(),
            Some(Ok(expected)),
            "Failed to match token for input: {}",
            input
        );
        assert_eq!(lexer.next(), None, "Expected single token, found more");
    }

    #[test]
    fn test_number_literals() {
        assert_single_token("42", Token::Int(42));
        assert_single_token("3.25", Token::Float(3.25));
        assert_single_token("1.", Token::Float(1.0));
        assert_single_token(".5", Token::Float(0.5));
        assert_single_token("1e3", Token::Float(1000.0));
        assert_single_token("2.5E-1", Token::Float(0.25));
    }

    #[test]
    fn test_operators() {
        let tokens: Vec<_> = Token::lexer("( 1 + 2 ) ** 3 // 4 % 5 * 6 / 7 - 8")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Int(1),
                Token::Plus,
                Token::Int(2),
                Token::RParen,
                Token::StarStar,
                Token::Int(3),
                Token::SlashSlash,
                Token::Int(4),
                Token::Percent,
                Token::Int(5),
                Token::Star,
                Token::Int(6),
                Token::Slash,
                Token::Int(7),
                Token::Minus,
                Token::Int(8),
            ]
        );
    }

    #[test]
    fn test_token_equality() {
        assert_eq!(Token::Float(0.5), Token::Float(0.5));
        assert_ne!(Token::Float(1.0), Token::Int(1));
        assert_ne!(Token::Plus, Token::Minus);
        assert_eq!(Token::LParen, Token::LParen);

        let distinct: std::collections::HashSet<Token> =
            [Token::Int(1), Token::Int(1), Token::Float(1.0), Token::Star].into_iter().collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn test_lex_errors() {
        let mut lexer = Token::lexer("99999999999999999999");
        assert_eq!(lexer.next(), Some(Err(LexError::IntegerOutOfRange)));

        let mut lexer = Token::lexer("__import__");
        assert_eq!(lexer.next(), Some(Err(LexError::UnexpectedCharacter)));
    }
}
