//! Good's permutation and the domain-separated matrix types.
//!
//! Since `gcd(3, 512) = 1`, the CRT identifies `Z/1536` with `Z/3 × Z/512`,
//! and a polynomial in `Z[X]/(X^{1536}-1)` with a polynomial in
//! `Z[Y,Z]/(Y^3-1, Z^{512}-1)`. Index `i` of the padded vector maps to row
//! `i mod 3`, column `i mod 512`.
//!
//! [`GoodsMatrix`] holds the three rows in coefficient form. [`NttMatrix`]
//! holds them after the forward NTT. The transforms consume one type and
//! produce the other, so a coefficient-domain matrix can never reach the
//! column-wise product.

use crate::{GOODS_ROWS, NTT_N, PADDED, ntt, small_ring};

/// Three size-512 rows in coefficient form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GoodsMatrix(pub(crate) [[i32; NTT_N]; GOODS_ROWS]);

/// Three size-512 rows in NTT form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NttMatrix(pub(crate) [[i32; NTT_N]; GOODS_ROWS]);

/// Scatter a padded vector into its Good's matrix.
#[must_use]
pub fn goods_forward(v: &[i32; PADDED]) -> GoodsMatrix {
    let mut m = GoodsMatrix::zero();
    for (i, &c) in v.iter().enumerate() {
        m.0[i % GOODS_ROWS][i % NTT_N] = c;
    }
    m
}

/// Gather a Good's matrix back into a padded vector.
#[must_use]
pub fn goods_inverse(m: &GoodsMatrix) -> [i32; PADDED] {
    let mut v = [0i32; PADDED];
    for (i, c) in v.iter_mut().enumerate() {
        *c = m.0[i % GOODS_ROWS][i % NTT_N];
    }
    v
}

// -- GoodsMatrix (coefficient form) ------------------------------------------

impl GoodsMatrix {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([[0i32; NTT_N]; GOODS_ROWS])
    }

    /// Consuming forward NTT of every row.
    #[must_use]
    pub fn ntt(mut self) -> NttMatrix {
        for row in &mut self.0 {
            ntt::forward_ntt(row);
        }
        NttMatrix(self.0)
    }

    #[must_use]
    pub const fn rows(&self) -> &[[i32; NTT_N]; GOODS_ROWS] {
        &self.0
    }
}

// -- NttMatrix (NTT form) ----------------------------------------------------

impl NttMatrix {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([[0i32; NTT_N]; GOODS_ROWS])
    }

    /// Consuming inverse NTT of every row. Output rows are canonical mod
    /// `NTT_Q`.
    #[must_use]
    pub fn ntt_inverse(mut self) -> GoodsMatrix {
        for row in &mut self.0 {
            ntt::inverse_ntt(row);
        }
        GoodsMatrix(self.0)
    }

    /// Column-wise product in `Z_{NTT_Q}[Y]/(Y^3-1)`.
    #[must_use]
    pub fn mul_cyclic3(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for idx in 0..NTT_N {
            let f = [self.0[0][idx], self.0[1][idx], self.0[2][idx]];
            let g = [other.0[0][idx], other.0[1][idx], other.0[2][idx]];
            let c = small_ring::mul_column(f, g);
            for (row, v) in r.0.iter_mut().zip(c) {
                row[idx] = v;
            }
        }
        r
    }

    #[must_use]
    pub const fn rows(&self) -> &[[i32; NTT_N]; GOODS_ROWS] {
        &self.0
    }
}

impl From<&[i32; PADDED]> for GoodsMatrix {
    #[inline]
    fn from(v: &[i32; PADDED]) -> Self {
        goods_forward(v)
    }
}

impl Default for GoodsMatrix {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Debug for GoodsMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GoodsMatrix")
            .field("rows[..][..4]", &[&self.0[0][..4], &self.0[1][..4], &self.0[2][..4]])
            .finish_non_exhaustive()
    }
}

impl core::fmt::Debug for NttMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NttMatrix")
            .field("rows[..][..4]", &[&self.0[0][..4], &self.0[1][..4], &self.0[2][..4]])
            .finish_non_exhaustive()
    }
}
