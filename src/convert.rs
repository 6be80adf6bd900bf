//! Conversions between [`Fraction`] and other representations of numbers.
//!
//! [`IntoFraction`] is the single entry point used by the arithmetic and comparison methods, so
//! that `f.checked_add("1/3")`, `f.checked_add(2)`, and `f.checked_add(other)` all share one
//! implementation.

use std::cmp::Ordering;

use num_traits::{FromPrimitive, ToPrimitive};

use crate::fraction::{BaseInt, Fraction, FractionError};

/// Anything that can be turned into a [`Fraction`], possibly failing. Strings are parsed, floats
/// are read through their decimal rendering, and integers always succeed.
pub trait IntoFraction {
    fn into_fraction(self) -> Result<Fraction, FractionError>;
}

impl IntoFraction for Fraction {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Ok(self)
    }
}

impl IntoFraction for &Fraction {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Ok(*self)
    }
}

impl IntoFraction for &str {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        self.parse()
    }
}

impl IntoFraction for &String {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        self.parse()
    }
}

impl IntoFraction for String {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        self.parse()
    }
}

impl IntoFraction for f64 {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::from_decimal(self)
    }
}

macro_rules! impl_int_conversions {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(n: $t) -> Self {
                    Fraction::new_reduced(BaseInt::from(n), 1)
                }
            }

            impl IntoFraction for $t {
                fn into_fraction(self) -> Result<Fraction, FractionError> {
                    Ok(Fraction::from(self))
                }
            }
        )*
    };
}

impl_int_conversions!(i8, i16, i32, i64, u8, u16, u32);

impl PartialEq<&str> for Fraction {
    /// A string that doesn't parse is not equal to anything.
    fn eq(&self, other: &&str) -> bool {
        other.parse::<Fraction>().is_ok_and(|o| *self == o)
    }
}

impl PartialEq<Fraction> for &str {
    fn eq(&self, other: &Fraction) -> bool {
        other == self
    }
}

impl PartialOrd<&str> for Fraction {
    /// A string that doesn't parse is unordered with respect to everything.
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        other.parse::<Fraction>().ok().map(|o| self.cmp(&o))
    }
}

impl PartialOrd<Fraction> for &str {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        BaseInt::try_from(n).ok().map(Self::from)
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_decimal(n).ok()
    }
}

impl ToPrimitive for Fraction {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        Some(self.trunc().numerator())
    }

    /// Truncates toward zero, so values in (-1, 0) give 0.
    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.trunc().numerator()).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.decimal_value())
    }
}
