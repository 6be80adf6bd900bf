//! Turns classified strings and native numbers into exact, not yet reduced, `(numerator,
//! denominator)` pairs. Reduction is the job of [`Fraction::new`](crate::fraction::Fraction::new).

use nom::character::complete::i64 as base_int;
use nom::combinator::all_consuming;

use crate::classify::{classify, NumberShape};
use crate::fraction::{BaseInt, FractionError};

/// Each decimal place multiplies the denominator by this.
pub const DECIMAL_RADIX: BaseInt = 10;

/// The most decimal places that can be represented: 10^18 is the largest power of ten in an `i64`.
pub const MAX_DECIMAL_PLACES: u32 = 18;

/// Parses an optionally signed run of ASCII digits. The classifier has already vouched for the
/// shape, so any failure here means the value doesn't fit.
fn parse_digits(digits: &str) -> Result<BaseInt, FractionError> {
    all_consuming(base_int::<&str, nom::error::Error<&str>>)(digits)
        .map(|(_rest, n)| n)
        .map_err(|_e| FractionError::Overflow)
}

/// Reads a decimal string with its dot at `separator`. The digits are read exactly: `-1.25` is
/// `-125 / 100`, never an approximation via floating point.
fn decimal_parts(input: &str, separator: usize) -> Result<(BaseInt, BaseInt), FractionError> {
    let (whole, places) = (&input[..separator], &input[separator + 1..]);
    // trailing zeros only inflate the denominator
    let places = places.trim_end_matches('0');
    if places.is_empty() {
        return Ok((parse_digits(whole)?, 1));
    }

    let k = u32::try_from(places.len()).map_err(|_e| FractionError::Overflow)?;
    if k > MAX_DECIMAL_PLACES {
        return Err(FractionError::Overflow);
    }

    let numerator = parse_digits(&format!("{}{}", whole, places))?;
    Ok((numerator, DECIMAL_RADIX.pow(k)))
}

/// Classifies `input` and extracts its raw numerator and denominator.
///
/// The denominator may be zero (for input like `3/0`); rejecting it is left to the normalizer.
pub fn parts_from_str(input: &str) -> Result<(BaseInt, BaseInt), FractionError> {
    match classify(input) {
        NumberShape::Integer => Ok((parse_digits(input)?, 1)),
        NumberShape::Decimal { separator } => decimal_parts(input, separator),
        NumberShape::Fraction { separator } => Ok((
            parse_digits(&input[..separator])?,
            parse_digits(&input[separator + 1..])?,
        )),
        NumberShape::Invalid => Err(FractionError::Format(input.to_owned())),
    }
}

/// Extracts the raw numerator and denominator of a float. The number of decimal places is that of
/// the shortest decimal rendering that round-trips to the same float, so `0.1` becomes `1 / 10`
/// and not the exact binary value `3602879701896397 / 36028797018963968`.
pub fn parts_from_f64(x: f64) -> Result<(BaseInt, BaseInt), FractionError> {
    if !x.is_finite() {
        return Err(FractionError::NonFinite(x));
    }

    // Display for f64 never uses exponent notation, so the result is always an integer or decimal.
    let rendered = x.to_string();
    match classify(&rendered) {
        NumberShape::Integer => Ok((parse_digits(&rendered)?, 1)),
        NumberShape::Decimal { separator } => decimal_parts(&rendered, separator),
        NumberShape::Fraction { .. } | NumberShape::Invalid => {
            Err(FractionError::Format(rendered))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_parts() {
        assert_eq!(parts_from_str("3").unwrap(), (3, 1));
        assert_eq!(parts_from_str("-3").unwrap(), (-3, 1));
        assert_eq!(parts_from_str("+3").unwrap(), (3, 1));
        assert_eq!(parts_from_str("0042").unwrap(), (42, 1));
    }

    #[test]
    fn test_fraction_parts() {
        assert_eq!(parts_from_str("1/4").unwrap(), (1, 4));
        assert_eq!(parts_from_str("-6/-5").unwrap(), (-6, -5));
        assert_eq!(parts_from_str("12/-10").unwrap(), (12, -10));
        assert_eq!(parts_from_str("1/0").unwrap(), (1, 0));
    }

    #[test]
    fn test_decimal_parts() {
        assert_eq!(parts_from_str("1.5").unwrap(), (15, 10));
        assert_eq!(parts_from_str("-1.25").unwrap(), (-125, 100));
        assert_eq!(parts_from_str("-0.05").unwrap(), (-5, 100));
        assert_eq!(parts_from_str("2.0").unwrap(), (2, 1));
        assert_eq!(parts_from_str("1.500").unwrap(), (15, 10));
        // 1.15 * 100 is 114.99999999999999 in floating point
        assert_eq!(parts_from_str("1.15").unwrap(), (115, 100));
    }

    #[test]
    fn test_invalid_parts() {
        assert_eq!(
            parts_from_str(".15"),
            Err(FractionError::Format(".15".to_owned()))
        );
        assert_eq!(
            parts_from_str("1/5/6"),
            Err(FractionError::Format("1/5/6".to_owned()))
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            parts_from_str("99999999999999999999"),
            Err(FractionError::Overflow)
        );
        assert_eq!(
            parts_from_str("1/99999999999999999999"),
            Err(FractionError::Overflow)
        );
        assert_eq!(
            parts_from_str("0.1234567890123456789"),
            Err(FractionError::Overflow)
        );
        assert_eq!(
            parts_from_str("0.123456789012345678").unwrap(),
            (123456789012345678, 1_000_000_000_000_000_000)
        );
        assert_eq!(
            parts_from_str("-9223372036854775808").unwrap(),
            (BaseInt::MIN, 1)
        );
    }

    #[test]
    fn test_f64_parts() {
        assert_eq!(parts_from_f64(1.5).unwrap(), (15, 10));
        assert_eq!(parts_from_f64(-1.5).unwrap(), (-15, 10));
        assert_eq!(parts_from_f64(0.1).unwrap(), (1, 10));
        assert_eq!(parts_from_f64(2.0).unwrap(), (2, 1));
        assert_eq!(parts_from_f64(-0.0).unwrap(), (0, 1));
        assert_eq!(parts_from_f64(1e-7).unwrap(), (1, 10_000_000));
        assert_eq!(parts_from_f64(1e300), Err(FractionError::Overflow));
        assert!(matches!(
            parts_from_f64(f64::NAN),
            Err(FractionError::NonFinite(_))
        ));
        assert_eq!(
            parts_from_f64(f64::INFINITY),
            Err(FractionError::NonFinite(f64::INFINITY))
        );
    }
}
