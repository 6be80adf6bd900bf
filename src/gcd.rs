//! Greatest common divisor of two base integers, used to keep every [`Fraction`] in lowest terms.
//!
//! [`Fraction`]: crate::fraction::Fraction

use thiserror::Error;

use crate::fraction::BaseInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GcdError {
    #[error("GCD undefined for two zeros")]
    BothZero,
    #[error("GCD of {0} and {1} does not fit in the base integer")]
    OutOfRange(BaseInt, BaseInt),
}

/// Computes the greatest common divisor of two magnitudes using the Euclidean algorithm. Unlike
/// [`gcd`], this can return `2^63`, the common factor of `BaseInt::MIN` with itself.
///
/// If exactly one argument is zero, the other is returned. If both are zero, there is no greatest
/// divisor and this errors.
pub fn gcd_magnitude(mut p: u64, mut q: u64) -> Result<u64, GcdError> {
    if p == 0 && q == 0 {
        return Err(GcdError::BothZero);
    }

    while q != 0 {
        let r = p % q;
        p = q;
        q = r;
    }

    Ok(p)
}

/// Computes the greatest common divisor of `a` and `b`. Signs are ignored, and the result is always
/// positive. Errors if both are zero, or if the result is `2^63` and so isn't a `BaseInt`.
pub fn gcd(a: BaseInt, b: BaseInt) -> Result<BaseInt, GcdError> {
    let g = gcd_magnitude(a.unsigned_abs(), b.unsigned_abs())?;
    BaseInt::try_from(g).map_err(|_e| GcdError::OutOfRange(a, b))
}
