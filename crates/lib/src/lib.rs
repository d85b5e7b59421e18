//! `ntrup-rs` -- Typed small-by-general multiplication for NTRU LPRime 761.
//!
//! Wraps the `no_std` arithmetic of [`ntrup_math`] in validated polynomial
//! types: [`Rq`] for general elements of `Z_4591[X]/(X^{761}-X-1)` and
//! [`Small`] for ternary secrets. [`Rq::mult_small`] runs the NTT multiplier.

#![deny(unsafe_code)]

pub mod types;

pub use ntrup_math as math;
pub use ntrup_math::{P, Q};
pub use types::{MAX_WEIGHT, Rq, Small};

/// Errors returned when constructing polynomials from coefficient data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input slice has the wrong number of coefficients.
    InvalidLength {
        /// Expected coefficient count.
        expected: usize,
        /// Actual coefficient count received.
        actual: usize,
    },
    /// A coefficient lies outside the range allowed for the type.
    CoefficientOutOfRange {
        /// Position of the first offending coefficient.
        index: usize,
        /// Its value.
        value: i32,
    },
    /// A small polynomial has more non-zero coefficients than the multiplier
    /// can handle exactly.
    InvalidWeight {
        /// Number of non-zero coefficients.
        weight: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected}, got {actual}")
            }
            Self::CoefficientOutOfRange { index, value } => {
                write!(f, "coefficient {index} out of range: {value}")
            }
            Self::InvalidWeight { weight } => {
                write!(f, "invalid weight: {weight} exceeds {MAX_WEIGHT}")
            }
        }
    }
}

impl core::error::Error for Error {}
