//! A rational number type that is always kept in lowest terms with a positive denominator.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::construct::{parts_from_f64, parts_from_str};
use crate::gcd::{gcd_magnitude, GcdError};
use crate::markup::{Block, RenderBlocks, RenderMode, ASCII};

/// The base type used for numerators and denominators.
pub type BaseInt = i64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractionError {
    #[error("Wrong fraction format: {0:?}")]
    Format(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Cannot convert {0} to a fraction")]
    NonFinite(f64),
    #[error("Value does not fit in a {} fraction", std::any::type_name::<BaseInt>())]
    Overflow,
    #[error(transparent)]
    Gcd(#[from] GcdError),
}

/// A fraction `numerator / denominator`.
///
/// Every public constructor and operation leaves the value normalized: the denominator is
/// positive, and the numerator and denominator share no common factor. Zero is always `0/1`. This
/// means derived equality and hashing agree with numeric equality.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct Fraction {
    numerator: BaseInt,
    denominator: BaseInt,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a new fraction, reducing it to lowest terms and moving the sign to the numerator.
    /// Errors if the denominator is zero, or if the reduced value still doesn't fit: `1/MIN` would
    /// need a denominator of `2^63`.
    pub fn new(numerator: BaseInt, denominator: BaseInt) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }
        if numerator == 0 {
            return Ok(Self::ZERO);
        }

        // Reduce magnitudes in u64, where 2^63 is a valid common factor.
        let negative = (numerator < 0) != (denominator < 0);
        let (n, d) = (numerator.unsigned_abs(), denominator.unsigned_abs());
        let g = gcd_magnitude(n, d)?;
        let (n, d) = (i128::from(n / g), i128::from(d / g));

        let numerator = BaseInt::try_from(if negative { -n } else { n })
            .map_err(|_e| FractionError::Overflow)?;
        let denominator = BaseInt::try_from(d).map_err(|_e| FractionError::Overflow)?;

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a fraction from a pair that is already in lowest terms with a positive denominator.
    pub(crate) const fn new_reduced(numerator: BaseInt, denominator: BaseInt) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Reads a float as the fraction with the same shortest decimal rendering, so `0.1` is `1/10`.
    /// Errors on NaN and infinities, or if the decimal has too many digits.
    pub fn from_decimal(x: f64) -> Result<Self, FractionError> {
        let (n, d) = parts_from_f64(x)?;
        Self::new(n, d)
    }

    pub fn numerator(&self) -> BaseInt {
        self.numerator
    }

    pub fn denominator(&self) -> BaseInt {
        self.denominator
    }

    /// The closest float to this value: `numerator / denominator` in floating point.
    pub fn decimal_value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Replaces the numerator, keeping the denominator, and reduces the result: setting the
    /// numerator of `1/4` to `2` gives `1/2`.
    pub fn set_numerator(&mut self, numerator: BaseInt) -> Result<(), FractionError> {
        *self = Self::new(numerator, self.denominator)?;
        Ok(())
    }

    /// Replaces the denominator, keeping the numerator, and reduces the result. Errors without
    /// modifying `self` if `denominator` is zero.
    pub fn set_denominator(&mut self, denominator: BaseInt) -> Result<(), FractionError> {
        *self = Self::new(self.numerator, denominator)?;
        Ok(())
    }

    /// Replaces the value with that of the float, as in [`Fraction::from_decimal`].
    pub fn set_decimal_value(&mut self, x: f64) -> Result<(), FractionError> {
        *self = Self::from_decimal(x)?;
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Whether this is exactly 1.
    pub fn is_unit(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Whether this is strictly greater than 1.
    pub fn is_larger_than_unit(&self) -> bool {
        self.numerator > self.denominator
    }

    /// Whether this is strictly less than 1.
    pub fn is_smaller_than_unit(&self) -> bool {
        self.numerator < self.denominator
    }

    /// The integer part, rounding toward zero.
    pub fn trunc(&self) -> Self {
        Self::new_reduced(self.numerator / self.denominator, 1)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses an integer (`-3`), a decimal (`-1.25`), or a fraction (`6/-5`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (n, d) = parts_from_str(s)?;
        Self::new(n, d)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.decimal_value()
    }
}

impl RenderBlocks for Fraction {
    fn components(&self) -> Vec<Block> {
        vec![Block::Ratio(self.numerator, self.denominator)]
    }
}

impl std::fmt::Debug for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frac!({} / {})", self.numerator, self.denominator)
    }
}

/// Writes the canonical `numerator/denominator` form, which [`FromStr`] reads back.
impl Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ASCII.render_to_string(self))
    }
}

/// Builds a [`Fraction`]: `frac!(3 / 4)` or `frac!(2)`. Panics if the denominator is zero.
#[macro_export]
macro_rules! frac {
    ($num:literal / $denom:expr) => {{
        let n = $num;
        let d = $denom;

        match $crate::fraction::Fraction::new(n, d) {
            Ok(f) => f,
            Err(e) => panic!("Invalid fraction {}/{}: {}", n, d, e),
        }
    }};
    ($num:expr) => {
        $crate::fraction::Fraction::from($num as $crate::fraction::BaseInt)
    };
}
