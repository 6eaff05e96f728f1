// ============================================================================
// Expression Tree
// Parsed form of an arithmetic expression and its checked evaluation
// ============================================================================

use crate::numeric::{NumericResult, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Pos,
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Rem,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Scalar),

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluate left operand first, then right, with checked arithmetic.
    ///
    /// # Errors
    /// `DivisionByZero`, `Overflow` and `Domain` from the scalar operations.
    pub fn evaluate(&self) -> NumericResult<Scalar> {
        match self {
            Expr::Literal(x) => Ok(*x),
            Expr::Unary { op, expr } => {
                let value = expr.evaluate()?;
                match op {
                    UnaryOp::Pos => Ok(value),
                    UnaryOp::Neg => value.checked_neg(),
                }
            },
            Expr::Binary { op, lhs, rhs } => {
                let (lhs, rhs) = (lhs.evaluate()?, rhs.evaluate()?);
                match op {
                    BinaryOp::Add => lhs.checked_add(rhs),
                    BinaryOp::Sub => lhs.checked_sub(rhs),
                    BinaryOp::Mul => lhs.checked_mul(rhs),
                    BinaryOp::Div => lhs.checked_div(rhs),
                    BinaryOp::FloorDiv => lhs.checked_floor_div(rhs),
                    BinaryOp::Rem => lhs.checked_rem(rhs),
                    BinaryOp::Pow => lhs.checked_pow(rhs),
                }
            },
        }
    }
}
