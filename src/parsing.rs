//! Utilities for parsing calculator expressions from a plain ASCII syntax that is easy to type.
//!
//! Operands are runs of non-whitespace characters, so operators must be surrounded by spaces:
//! `1/2 + 0.25`, `-2/3 ^ -2`, `inv 3/4`.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{i32 as exponent, multispace0, multispace1};
use nom::combinator::{all_consuming, map, value};
use nom::error::ParseError;
use nom::sequence::{delimited, separated_pair, terminated, tuple};
use nom::IResult;

use crate::calc::{Arithmetic, CalcError, Comparison, Expression, Operator, UnaryOperator};

/// Parses a full calculator line. Surrounding whitespace is ignored, and nothing else may follow
/// the expression.
pub fn parse_expression(line: &str) -> Result<Expression<'_>, CalcError> {
    all_consuming(ws(expression))(line)
        .map(|(_o, expr)| expr)
        .map_err(|_e| CalcError::Syntax(line.to_string()))
}

/// Parses any of the expression forms. Order matters: each alternative is tried in turn, and the
/// lone value has to come last because it matches the start of every other form.
pub fn expression(input: &str) -> IResult<&str, Expression<'_>> {
    alt((unary, power, binary, map(operand, Expression::Value)))(input)
}

/// Parses a single operand. Whether it is actually a valid fraction is decided on evaluation.
pub fn operand(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

/// Parses a binary operator.
pub fn operator(input: &str) -> IResult<&str, Operator> {
    alt((
        map(comparison, Operator::Comparison),
        map(arithmetic, Operator::Arithmetic),
    ))(input)
}

/// Parses a comparison. Two-character forms go first so `<=` isn't read as `<`.
pub fn comparison(input: &str) -> IResult<&str, Comparison> {
    alt((
        value(Comparison::Le, tag("<=")),
        value(Comparison::Ge, tag(">=")),
        value(Comparison::Eq, tag("==")),
        value(Comparison::Ne, tag("!=")),
        value(Comparison::Lt, tag("<")),
        value(Comparison::Gt, tag(">")),
    ))(input)
}

pub fn arithmetic(input: &str) -> IResult<&str, Arithmetic> {
    alt((
        value(Arithmetic::Add, tag("+")),
        value(Arithmetic::Sub, tag("-")),
        value(Arithmetic::Mul, tag("*")),
        value(Arithmetic::Div, tag("/")),
        value(Arithmetic::Rem, tag("%")),
    ))(input)
}

/// Parses a prefix keyword: `inv`, `inc`, or `dec`.
pub fn unary_operator(input: &str) -> IResult<&str, UnaryOperator> {
    alt((
        value(UnaryOperator::Inverse, tag("inv")),
        value(UnaryOperator::Increment, tag("inc")),
        value(UnaryOperator::Decrement, tag("dec")),
    ))(input)
}

fn binary(input: &str) -> IResult<&str, Expression<'_>> {
    map(
        tuple((operand, delimited(multispace1, operator, multispace1), operand)),
        |(lhs, op, rhs)| Expression::Binary { lhs, op, rhs },
    )(input)
}

fn power(input: &str) -> IResult<&str, Expression<'_>> {
    map(
        separated_pair(operand, ws(tag("^")), exponent),
        |(base, exp)| Expression::Power { base, exp },
    )(input)
}

fn unary(input: &str) -> IResult<&str, Expression<'_>> {
    map(
        tuple((terminated(unary_operator, multispace1), operand)),
        |(op, operand)| Expression::Unary { op, operand },
    )(input)
}

/// Wraps a parser to consume whitespace on either side.
fn ws<'a, F: 'a, O, E: ParseError<&'a str>>(
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}
