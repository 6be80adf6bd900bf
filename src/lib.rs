pub mod calc;
pub mod classify;
pub mod construct;
pub mod convert;
pub mod fraction;
pub mod gcd;
pub mod io;
pub mod markup;
pub mod ops;
pub mod parsing;
pub mod symbols;

pub use convert::IntoFraction;
pub use fraction::{BaseInt, Fraction, FractionError};
