//! Classification of numeric strings as integers, decimals, or fractions. This is a single
//! left-to-right pass of a small state machine, and it decides *shape* only: the digits themselves
//! are read later by [`crate::construct`].

/// The character separating numerator from denominator.
pub const FRACTION_SEPARATOR: char = '/';
/// The character separating the integer part of a decimal from its decimal places.
pub const DECIMAL_SEPARATOR: char = '.';

/// The kind of separator seen during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Fraction,
    Decimal,
}

/// The shape of a numeric string. Separator positions are zero-based byte indices, which coincide
/// with character indices because only ASCII input can classify as anything but
/// [`NumberShape::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberShape {
    /// An optionally signed run of digits, e.g., `-12`.
    Integer,
    /// An optionally signed decimal with digits on both sides of the dot, e.g., `-1.25`.
    Decimal { separator: usize },
    /// Two optionally signed digit runs around a slash, e.g., `-6/-5`.
    Fraction { separator: usize },
    /// Anything else.
    Invalid,
}

/// The states of the scanner. Separator-carrying states remember where the separator was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    NoChars,
    FirstSign,
    DigitsBeforeSeparator,
    FractionSeparator(usize),
    DecimalSeparator(usize),
    SecondSign(usize),
    DigitsAfterSeparator(Separator, usize),
    Invalid,
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

impl ScanState {
    /// Advances the machine by one character found at byte index `i`.
    fn next(self, i: usize, c: char) -> Self {
        use ScanState::*;

        match (self, c) {
            (NoChars, c) if is_sign(c) => FirstSign,
            (NoChars | FirstSign | DigitsBeforeSeparator, c) if c.is_ascii_digit() => {
                DigitsBeforeSeparator
            }
            (DigitsBeforeSeparator, FRACTION_SEPARATOR) => FractionSeparator(i),
            (DigitsBeforeSeparator, DECIMAL_SEPARATOR) => DecimalSeparator(i),
            // only fractions may sign their second half
            (FractionSeparator(sep), c) if is_sign(c) => SecondSign(sep),
            (FractionSeparator(sep) | SecondSign(sep), c) if c.is_ascii_digit() => {
                DigitsAfterSeparator(Separator::Fraction, sep)
            }
            (DecimalSeparator(sep), c) if c.is_ascii_digit() => {
                DigitsAfterSeparator(Separator::Decimal, sep)
            }
            (DigitsAfterSeparator(kind, sep), c) if c.is_ascii_digit() => {
                DigitsAfterSeparator(kind, sep)
            }
            _ => Invalid,
        }
    }

    /// Interprets the state the scan ended in.
    fn finish(self) -> NumberShape {
        match self {
            ScanState::DigitsBeforeSeparator => NumberShape::Integer,
            ScanState::DigitsAfterSeparator(Separator::Fraction, separator) => {
                NumberShape::Fraction { separator }
            }
            ScanState::DigitsAfterSeparator(Separator::Decimal, separator) => {
                NumberShape::Decimal { separator }
            }
            _ => NumberShape::Invalid,
        }
    }
}

/// Classifies `input` as an integer, decimal, fraction, or invalid string. See [`NumberShape`].
pub fn classify(input: &str) -> NumberShape {
    let mut state = ScanState::NoChars;
    for (i, c) in input.char_indices() {
        state = state.next(i, c);
        if state == ScanState::Invalid {
            break;
        }
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_integers() {
        for s in ["1", "-1", "+1", "0", "007", "-1234567890"] {
            assert_eq!(classify(s), NumberShape::Integer, "{}", s);
        }
    }

    #[test]
    fn test_decimals() {
        assert_eq!(classify("1.5"), NumberShape::Decimal { separator: 1 });
        assert_eq!(classify("-1.5"), NumberShape::Decimal { separator: 2 });
        assert_eq!(classify("+10.25"), NumberShape::Decimal { separator: 3 });
        assert_eq!(classify("0.0"), NumberShape::Decimal { separator: 1 });
    }

    #[test]
    fn test_fractions() {
        assert_eq!(classify("1/5"), NumberShape::Fraction { separator: 1 });
        assert_eq!(classify("-1/5"), NumberShape::Fraction { separator: 2 });
        assert_eq!(classify("-1/-5"), NumberShape::Fraction { separator: 2 });
        assert_eq!(classify("1/-5"), NumberShape::Fraction { separator: 1 });
        assert_eq!(classify("-6/-5"), NumberShape::Fraction { separator: 2 });
        assert_eq!(classify("12/+10"), NumberShape::Fraction { separator: 2 });
        assert_eq!(classify("1/0"), NumberShape::Fraction { separator: 1 });
    }

    #[test]
    fn test_invalid() {
        for s in [
            "", ".15", "15.", "-.15", ".-15", "-15.", "-1.5.6", "1.5 -", "-1-6.5", "1a.5",
            "1 / 1.5", "1-/5", "1/5-", "-/15", "/15", "15/", "1/--5", "1/-", "1/1.5", "1/5/6",
            "1.5/2", "1.-5", "1+1/2", "-", "+", "--1", "abc", " 1", "1 ", "½", "1/½",
        ] {
            assert_eq!(classify(s), NumberShape::Invalid, "{:?}", s);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]
        #[test]
        fn test_classify_rendered_numbers(n in any::<i64>(), d in any::<i64>(), k in 1u32..9) {
            prop_assert_eq!(classify(&n.to_string()), NumberShape::Integer);

            let fraction = format!("{}/{}", n, d);
            let sep = n.to_string().len();
            prop_assert_eq!(classify(&fraction), NumberShape::Fraction { separator: sep });

            let decimal = format!("{}.{:0width$}", n, d.unsigned_abs() % 10u64.pow(k), width = k as usize);
            prop_assert_eq!(classify(&decimal), NumberShape::Decimal { separator: sep });
        }
    }
}
