//! A small calculator over fractions: one expression per line, with operands written in any form
//! the string constructor accepts.

use std::cmp::Ordering;

use thiserror::Error;

use crate::convert::IntoFraction;
use crate::fraction::{Fraction, FractionError};
use crate::markup::{Block, RenderBlocks};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Cannot parse expression {0:?}")]
    Syntax(String),
    #[error(transparent)]
    Fraction(#[from] FractionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arithmetic {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Arithmetic {
    fn apply(self, lhs: Fraction, rhs: &str) -> Result<Fraction, FractionError> {
        match self {
            Arithmetic::Add => lhs.checked_add(rhs),
            Arithmetic::Sub => lhs.checked_sub(rhs),
            Arithmetic::Mul => lhs.checked_mul(rhs),
            Arithmetic::Div => lhs.checked_div(rhs),
            Arithmetic::Rem => lhs.checked_rem(rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl Comparison {
    /// Whether `lhs` and `rhs` satisfy this comparison, given `ord = lhs.cmp(rhs)`.
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            Comparison::Lt => ord.is_lt(),
            Comparison::Le => ord.is_le(),
            Comparison::Gt => ord.is_gt(),
            Comparison::Ge => ord.is_ge(),
            Comparison::Eq => ord.is_eq(),
            Comparison::Ne => ord.is_ne(),
        }
    }
}

/// A binary operator: arithmetic gives a fraction, and a comparison gives a truth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Arithmetic(Arithmetic),
    Comparison(Comparison),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Inverse,
    Increment,
    Decrement,
}

/// A parsed calculator line. Operands are kept as text and only become fractions on evaluation, so
/// a malformed operand is reported as a fraction format error rather than a syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression<'a> {
    Value(&'a str),
    Binary {
        lhs: &'a str,
        op: Operator,
        rhs: &'a str,
    },
    Power {
        base: &'a str,
        exp: i32,
    },
    Unary {
        op: UnaryOperator,
        operand: &'a str,
    },
}

/// The result of evaluating an [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Value(Fraction),
    Truth(bool),
}

impl Expression<'_> {
    pub fn evaluate(&self) -> Result<Outcome, CalcError> {
        let outcome = match *self {
            Expression::Value(operand) => Outcome::Value(operand.into_fraction()?),
            Expression::Binary { lhs, op, rhs } => {
                let lhs = lhs.into_fraction()?;
                match op {
                    Operator::Arithmetic(op) => Outcome::Value(op.apply(lhs, rhs)?),
                    Operator::Comparison(cmp) => Outcome::Truth(cmp.holds(lhs.try_cmp(rhs)?)),
                }
            }
            Expression::Power { base, exp } => {
                Outcome::Value(base.into_fraction()?.checked_pow(exp)?)
            }
            Expression::Unary { op, operand } => {
                let mut f = operand.into_fraction()?;
                match op {
                    UnaryOperator::Inverse => f = f.inverse()?,
                    UnaryOperator::Increment => f.increment()?,
                    UnaryOperator::Decrement => f.decrement()?,
                }
                Outcome::Value(f)
            }
        };

        Ok(outcome)
    }
}

impl RenderBlocks for Outcome {
    fn components(&self) -> Vec<Block> {
        match self {
            Outcome::Value(f) => f.components(),
            Outcome::Truth(b) => vec![Block::new_text(b.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::frac;
    use crate::markup::{RenderMode, ASCII, UNICODE};

    fn arithmetic<'a>(lhs: &'a str, op: Arithmetic, rhs: &'a str) -> Result<Outcome, CalcError> {
        let op = Operator::Arithmetic(op);
        Expression::Binary { lhs, op, rhs }.evaluate()
    }

    fn compare<'a>(lhs: &'a str, op: Comparison, rhs: &'a str) -> Result<Outcome, CalcError> {
        let op = Operator::Comparison(op);
        Expression::Binary { lhs, op, rhs }.evaluate()
    }

    #[test]
    fn test_value() {
        assert_eq!(
            Expression::Value("6/-4").evaluate(),
            Ok(Outcome::Value(frac!(-3 / 2)))
        );
        assert_eq!(
            Expression::Value("1/2/3").evaluate(),
            Err(CalcError::Fraction(FractionError::Format("1/2/3".to_owned())))
        );
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            arithmetic("1/2", Arithmetic::Add, "1/3"),
            Ok(Outcome::Value(frac!(5 / 6)))
        );
        assert_eq!(
            arithmetic("1/2", Arithmetic::Sub, "0.75"),
            Ok(Outcome::Value(frac!(-1 / 4)))
        );
        assert_eq!(
            arithmetic("2/3", Arithmetic::Mul, "-3"),
            Ok(Outcome::Value(frac!(-2)))
        );
        assert_eq!(
            arithmetic("1/2", Arithmetic::Div, "1/4"),
            Ok(Outcome::Value(frac!(2)))
        );
        assert_eq!(
            arithmetic("7/2", Arithmetic::Rem, "1"),
            Ok(Outcome::Value(frac!(1 / 2)))
        );
        assert_eq!(
            arithmetic("1", Arithmetic::Div, "0"),
            Err(CalcError::Fraction(FractionError::DivisionByZero))
        );
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(compare("1/3", Comparison::Lt, "1/2"), Ok(Outcome::Truth(true)));
        assert_eq!(compare("1/2", Comparison::Le, "0.5"), Ok(Outcome::Truth(true)));
        assert_eq!(compare("1/2", Comparison::Gt, "0.5"), Ok(Outcome::Truth(false)));
        assert_eq!(compare("-1/2", Comparison::Ge, "-1"), Ok(Outcome::Truth(true)));
        assert_eq!(compare("2/4", Comparison::Eq, "1/2"), Ok(Outcome::Truth(true)));
        assert_eq!(compare("2/4", Comparison::Ne, "1/2"), Ok(Outcome::Truth(false)));
        assert_eq!(
            compare("1/2", Comparison::Eq, "x"),
            Err(CalcError::Fraction(FractionError::Format("x".to_owned())))
        );
        assert!(Comparison::Ne.holds(Ordering::Less));
        assert!(!Comparison::Ne.holds(Ordering::Equal));
    }

    #[test]
    fn test_power_and_unary() {
        let eval = |e: Expression| e.evaluate();
        assert_eq!(
            eval(Expression::Power { base: "-2/3", exp: 3 }),
            Ok(Outcome::Value(frac!(-8 / 27)))
        );
        assert_eq!(
            eval(Expression::Power { base: "2", exp: -2 }),
            Ok(Outcome::Value(frac!(1 / 4)))
        );
        assert_eq!(
            eval(Expression::Power { base: "0", exp: 0 }),
            Ok(Outcome::Value(frac!(1)))
        );
        assert_eq!(
            eval(Expression::Unary {
                op: UnaryOperator::Inverse,
                operand: "-2/3"
            }),
            Ok(Outcome::Value(frac!(-3 / 2)))
        );
        assert_eq!(
            eval(Expression::Unary {
                op: UnaryOperator::Inverse,
                operand: "0"
            }),
            Err(CalcError::Fraction(FractionError::DivisionByZero))
        );
        assert_eq!(
            eval(Expression::Unary {
                op: UnaryOperator::Increment,
                operand: "1/2"
            }),
            Ok(Outcome::Value(frac!(3 / 2)))
        );
        assert_eq!(
            eval(Expression::Unary {
                op: UnaryOperator::Decrement,
                operand: "1/2"
            }),
            Ok(Outcome::Value(frac!(-1 / 2)))
        );
    }

    #[test]
    fn test_render_outcome() {
        assert_eq!(ASCII.render_to_string(&Outcome::Value(frac!(-1 / 2))), "-1/2");
        assert_eq!(
            UNICODE.render_to_string(&Outcome::Value(frac!(-1 / 2))),
            "\u{2212}\u{00BD}"
        );
        assert_eq!(UNICODE.render_to_string(&Outcome::Truth(false)), "false");
    }
}
