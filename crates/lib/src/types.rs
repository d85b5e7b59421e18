//! Polynomial types for `Z_4591[X]/(X^{761}-X-1)`.
//!
//! [`Rq`] holds centered coefficients in `[-2295, 2295]`. [`Small`] holds
//! ternary coefficients and implements `ZeroizeOnDrop`, since small
//! polynomials are the secrets of the scheme.

use ntrup_math::{P, Q, mult};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::Error;

/// Largest accepted [`Small`] weight.
///
/// At weight 761 with every `Rq` coefficient at `±2295`, a folded
/// coefficient of the product could leave `(-NTT_Q/2, NTT_Q/2)`.
pub const MAX_WEIGHT: usize = P - 1;

const HALF_Q: i16 = (Q / 2) as i16;

/// Element of `R_q = Z_4591[X]/(X^{761}-X-1)` in centered form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rq {
    pub(crate) coeffs: [i16; P],
}

impl Rq {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self { coeffs: [0; P] }
    }

    /// Validate and wrap centered coefficients.
    pub fn from_coeffs(coeffs: [i16; P]) -> Result<Self, Error> {
        if let Some((index, &value)) = coeffs
            .iter()
            .enumerate()
            .find(|&(_, c)| !(-HALF_Q..=HALF_Q).contains(c))
        {
            return Err(Error::CoefficientOutOfRange {
                index,
                value: value.into(),
            });
        }
        Ok(Self { coeffs })
    }

    /// Validate and wrap a slice of exactly 761 centered coefficients.
    pub fn from_slice(coeffs: &[i16]) -> Result<Self, Error> {
        let coeffs: [i16; P] = coeffs.try_into().map_err(|_| Error::InvalidLength {
            expected: P,
            actual: coeffs.len(),
        })?;
        Self::from_coeffs(coeffs)
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[i16; P] {
        &self.coeffs
    }

    /// `self * s` in `R_q`, centered.
    #[must_use]
    pub fn mult_small(&self, s: &Small) -> Self {
        let h = mult::ntt_multiply_centered(&self.coeffs, &s.coeffs);
        Self {
            coeffs: h.map(|c| c as i16),
        }
    }
}

impl Default for Rq {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<&[i16]> for Rq {
    type Error = Error;

    #[inline]
    fn try_from(coeffs: &[i16]) -> Result<Self, Error> {
        Self::from_slice(coeffs)
    }
}

impl core::fmt::Debug for Rq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rq")
            .field("coeffs[..4]", &&self.coeffs[..4])
            .finish_non_exhaustive()
    }
}

/// Ternary polynomial with coefficients in `{-1, 0, 1}`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Small {
    pub(crate) coeffs: [i8; P],
}

impl Small {
    /// Validate and wrap ternary coefficients of weight at most
    /// [`MAX_WEIGHT`].
    pub fn from_coeffs(coeffs: [i8; P]) -> Result<Self, Error> {
        if let Some((index, &value)) = coeffs
            .iter()
            .enumerate()
            .find(|&(_, c)| !(-1..=1).contains(c))
        {
            return Err(Error::CoefficientOutOfRange {
                index,
                value: value.into(),
            });
        }
        let s = Self { coeffs };
        let weight = s.weight();
        if weight > MAX_WEIGHT {
            return Err(Error::InvalidWeight { weight });
        }
        Ok(s)
    }

    /// Validate and wrap a slice of exactly 761 ternary coefficients.
    pub fn from_slice(coeffs: &[i8]) -> Result<Self, Error> {
        let coeffs: [i8; P] = coeffs.try_into().map_err(|_| Error::InvalidLength {
            expected: P,
            actual: coeffs.len(),
        })?;
        Self::from_coeffs(coeffs)
    }

    /// Number of non-zero coefficients.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.coeffs.iter().filter(|&&c| c != 0).count()
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[i8; P] {
        &self.coeffs
    }
}

impl TryFrom<&[i8]> for Small {
    type Error = Error;

    #[inline]
    fn try_from(coeffs: &[i8]) -> Result<Self, Error> {
        Self::from_slice(coeffs)
    }
}

impl core::fmt::Debug for Small {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Small")
            .field("weight", &self.weight())
            .finish_non_exhaustive()
    }
}
