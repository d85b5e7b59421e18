//! Reduction from the padded product back to `Z_q[X]/(X^{761}-X-1)`.

use crate::{NTT_Q, P, PADDED, Q, reduce};

/// Fold every term of degree `>= 761` down with `X^{761} = X + 1`.
///
/// Walks from the top so that terms landing at degree `>= 761` are folded
/// again on a later step.
pub fn reduce_terms_761(v: &mut [i32; PADDED]) {
    for idx in (P..PADDED).rev() {
        if v[idx] != 0 {
            v[idx - (P - 1)] += v[idx];
            v[idx - P] += v[idx];
            v[idx] = 0;
        }
    }
}

/// Lift a value out of the NTT ring as the representative in
/// `(-NTT_Q/2, NTT_Q/2]`.
#[inline]
#[must_use]
pub const fn freeze_ntt(x: i32) -> i32 {
    reduce::center(reduce::modulo(x as i64, NTT_Q), NTT_Q)
}

/// Canonical residue mod `q`, in `[0, 4591)`.
#[inline]
#[must_use]
pub const fn freeze(x: i32) -> i32 {
    reduce::modulo(x as i64, Q)
}

/// Centered residue mod `q`, in `[-2295, 2295]`.
#[inline]
#[must_use]
pub const fn freeze_centered(x: i32) -> i32 {
    reduce::center(freeze(x), Q)
}
