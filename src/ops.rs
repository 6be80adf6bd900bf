//! Arithmetic and ordering on [`Fraction`].
//!
//! Every operation has a `checked_*` form that reports failure as a [`FractionError`] and accepts
//! anything [`IntoFraction`]. The operator traits (`+`, `-`, `*`, `/`, `%`) are thin wrappers around
//! those and panic on failure, the way integer division by zero does.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{Inv, Num, One, Pow, Signed, Zero};

use crate::convert::IntoFraction;
use crate::fraction::{BaseInt, Fraction, FractionError};
use crate::gcd::gcd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
}

fn mul_or_overflow(a: BaseInt, b: BaseInt) -> Result<BaseInt, FractionError> {
    a.checked_mul(b).ok_or(FractionError::Overflow)
}

impl Fraction {
    /// Adds or subtracts over the least common denominator, which keeps intermediate values as
    /// small as possible.
    fn add_signed(self, rhs: Fraction, sign: Sign) -> Result<Fraction, FractionError> {
        let g = gcd(self.denominator(), rhs.denominator())?;
        let f1 = rhs.denominator() / g;
        let f2 = match sign {
            Sign::Plus => self.denominator() / g,
            Sign::Minus => -(self.denominator() / g),
        };

        let numerator = mul_or_overflow(self.numerator(), f1)?
            .checked_add(mul_or_overflow(rhs.numerator(), f2)?)
            .ok_or(FractionError::Overflow)?;
        let denominator = mul_or_overflow(f1, self.denominator())?;

        Fraction::new(numerator, denominator)
    }

    pub fn checked_add<T: IntoFraction>(self, rhs: T) -> Result<Fraction, FractionError> {
        self.add_signed(rhs.into_fraction()?, Sign::Plus)
    }

    pub fn checked_sub<T: IntoFraction>(self, rhs: T) -> Result<Fraction, FractionError> {
        self.add_signed(rhs.into_fraction()?, Sign::Minus)
    }

    pub fn checked_mul<T: IntoFraction>(self, rhs: T) -> Result<Fraction, FractionError> {
        let rhs = rhs.into_fraction()?;
        Fraction::new(
            mul_or_overflow(self.numerator(), rhs.numerator())?,
            mul_or_overflow(self.denominator(), rhs.denominator())?,
        )
    }

    /// Divides, erroring with [`FractionError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div<T: IntoFraction>(self, rhs: T) -> Result<Fraction, FractionError> {
        let rhs = rhs.into_fraction()?;
        Fraction::new(
            mul_or_overflow(self.numerator(), rhs.denominator())?,
            mul_or_overflow(self.denominator(), rhs.numerator())?,
        )
    }

    /// The remainder of truncated division: `self - rhs * trunc(self / rhs)`. The result has the
    /// sign of `self`, like `%` on integers.
    pub fn checked_rem<T: IntoFraction>(self, rhs: T) -> Result<Fraction, FractionError> {
        let rhs = rhs.into_fraction()?;
        let quotient = self.checked_div(rhs)?.trunc();
        self.checked_sub(rhs.checked_mul(quotient)?)
    }

    /// Raises to an integer power. Negative powers invert first, so raising zero to a negative
    /// power is a division by zero. Anything to the power 0 is 1, including zero.
    pub fn checked_pow(self, exp: i32) -> Result<Fraction, FractionError> {
        let (base_num, base_den) = if exp < 0 {
            (self.denominator(), self.numerator())
        } else {
            (self.numerator(), self.denominator())
        };
        let exp = exp.unsigned_abs();

        let numerator = base_num.checked_pow(exp).ok_or(FractionError::Overflow)?;
        let denominator = base_den.checked_pow(exp).ok_or(FractionError::Overflow)?;
        Fraction::new(numerator, denominator)
    }

    /// Swaps numerator and denominator. Errors if `self` is zero.
    pub fn inverse(&self) -> Result<Fraction, FractionError> {
        if self.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Fraction::new(self.denominator(), self.numerator())
    }

    /// Adds one in place.
    pub fn increment(&mut self) -> Result<(), FractionError> {
        self.shift_by_unit(Sign::Plus)
    }

    /// Subtracts one in place.
    pub fn decrement(&mut self) -> Result<(), FractionError> {
        self.shift_by_unit(Sign::Minus)
    }

    /// Adding `d/d` to `n/d` can't introduce a common factor: any divisor of both `n ± d` and `d`
    /// also divides `n`. So there is no need to reduce again.
    fn shift_by_unit(&mut self, sign: Sign) -> Result<(), FractionError> {
        let numerator = match sign {
            Sign::Plus => self.numerator().checked_add(self.denominator()),
            Sign::Minus => self.numerator().checked_sub(self.denominator()),
        }
        .ok_or(FractionError::Overflow)?;

        *self = Fraction::new_reduced(numerator, self.denominator());
        Ok(())
    }

    /// Compares with anything that can be turned into a fraction.
    pub fn try_cmp<T: IntoFraction>(&self, other: T) -> Result<Ordering, FractionError> {
        Ok(self.cmp(&other.into_fraction()?))
    }
}

impl Ord for Fraction {
    /// Compares `n1 * d2` with `n2 * d1`. Widening to `i128` means this can't overflow.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator() as i128 * other.denominator() as i128;
        let rhs = other.numerator() as i128 * self.denominator() as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Implements an operator trait and its assigning form for anything convertible into a
/// [`Fraction`], plus the mirrored form with an integer on the left.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident) => {
        impl<T: Into<Fraction>> $trait<T> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: T) -> Self::Output {
                let rhs: Fraction = rhs.into();
                match self.$checked(rhs) {
                    Ok(f) => f,
                    Err(e) => panic!(
                        "Cannot compute {} {} {}: {}",
                        self,
                        stringify!($method),
                        rhs,
                        e
                    ),
                }
            }
        }

        impl<T: Into<Fraction>> $assign_trait<T> for Fraction {
            fn $assign_method(&mut self, rhs: T) {
                *self = $trait::$method(*self, rhs);
            }
        }

        impl $trait<Fraction> for BaseInt {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                $trait::$method(Fraction::from(self), rhs)
            }
        }

        impl $trait<Fraction> for i32 {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                $trait::$method(Fraction::from(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, checked_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, checked_div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, checked_rem);

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.numerator().checked_neg() {
            Some(n) => Fraction::new_reduced(n, self.denominator()),
            None => panic!("Cannot negate {}: {}", self, FractionError::Overflow),
        }
    }
}

impl Pow<i32> for Fraction {
    type Output = Self;

    /// Panics where [`Fraction::checked_pow`] would error.
    fn pow(self, rhs: i32) -> Self::Output {
        match self.checked_pow(rhs) {
            Ok(f) => f,
            Err(e) => panic!("Cannot compute {} ^ {}: {}", self, rhs, e),
        }
    }
}

impl Inv for Fraction {
    type Output = Self;

    /// Panics if `self` is zero.
    fn inv(self) -> Self::Output {
        match self.inverse() {
            Ok(f) => f,
            Err(e) => panic!("Cannot invert {}: {}", self, e),
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.is_unit()
    }
}

impl Num for Fraction {
    type FromStrRadixErr = FractionError;

    /// Only base 10 is supported.
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != 10 {
            return Err(FractionError::Format(str.to_owned()));
        }
        str.parse()
    }
}

impl Signed for Fraction {
    fn abs(&self) -> Self {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::ZERO
        } else {
            *self - *other
        }
    }

    fn signum(&self) -> Self {
        Self::from(self.numerator().signum())
    }

    fn is_positive(&self) -> bool {
        Fraction::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        Fraction::is_negative(self)
    }
}

/// Fractions are exact, so the epsilon is a fraction too: `a` and `b` are equal within `eps` when
/// `|a - b| <= eps`.
impl AbsDiffEq for Fraction {
    type Epsilon = Self;

    fn default_epsilon() -> Self::Epsilon {
        Self::ZERO
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match self.checked_sub(other) {
            Ok(diff) => diff.abs() <= epsilon,
            Err(_) => false,
        }
    }
}

impl RelativeEq for Fraction {
    fn default_max_relative() -> Self::Epsilon {
        Self::ZERO
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        if self == other || self.abs_diff_eq(other, epsilon) {
            return true;
        }

        let largest = std::cmp::max(self.abs(), other.abs());
        match (self.checked_sub(other), largest.checked_mul(max_relative)) {
            (Ok(diff), Ok(bound)) => diff.abs() <= bound,
            _ => false,
        }
    }
}
