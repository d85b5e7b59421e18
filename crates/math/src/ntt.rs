//! In-place iterative cyclic NTT with Montgomery twiddles.
//!
//! - [`forward`]: Cooley-Tukey layers `1..=LAYERS`, canonical output.
//! - [`inverse`]: Gentleman-Sande layers `LAYERS..=1`, scaled by `N^{-1}`,
//!   canonical output.
//!
//! Both directions leave the data in the same (bit-reversed) frequency order,
//! so the pair round-trips without an explicit permutation.

use crate::{
    NTT_N,
    butterfly::{butterfly_forward, butterfly_inverse},
    params::{Ntt512, NttParams},
    reduce::modulo,
};

/// Half-block length of `layer` (1-based).
#[inline]
#[must_use]
pub const fn block_len(n: usize, layer: u32) -> usize {
    n >> layer
}

/// Index of the first forward root used by `layer`.
#[inline]
#[must_use]
pub const fn root_offset(layer: u32) -> usize {
    (1 << (layer - 1)) - 1
}

/// Index of the first inverse root used by `layer`.
#[inline]
#[must_use]
pub const fn inverse_root_offset(n: usize, layer: u32) -> usize {
    n - (1 << layer)
}

/// Reduce every coefficient to `[0, Q)`.
#[inline]
pub fn reduce_coefficients<P: NttParams<N>, const N: usize>(r: &mut [i32; N]) {
    for c in r.iter_mut() {
        *c = modulo(*c as i64, P::Q);
    }
}

fn forward_layer<P: NttParams<N>, const N: usize>(r: &mut [i32; N], layer: u32) {
    let len = block_len(N, layer);
    let roots = &P::ROOTS[root_offset(layer)..];
    for (block, &zeta) in r.chunks_exact_mut(2 * len).zip(roots) {
        let (lo, hi) = block.split_at_mut(len);
        butterfly_forward(lo, hi, zeta, P::multiply_reduce);
    }
}

fn inverse_layer<P: NttParams<N>, const N: usize>(r: &mut [i32; N], layer: u32) {
    let len = block_len(N, layer);
    let roots = &P::ROOTS_INV[inverse_root_offset(N, layer)..];
    for (block, &zeta) in r.chunks_exact_mut(2 * len).zip(roots) {
        let (lo, hi) = block.split_at_mut(len);
        butterfly_inverse(lo, hi, zeta, P::multiply_reduce);
    }
}

/// Forward NTT (in-place). Output coefficients are canonical in `[0, Q)`.
///
/// Each layer adds less than `Q` to a coefficient's magnitude, so inputs must
/// stay `LAYERS * Q` clear of the `i32` range.
pub fn forward<P: NttParams<N>, const N: usize>(r: &mut [i32; N]) {
    debug_assert!(
        r.iter()
            .all(|&c| (c as i64).abs() < i32::MAX as i64 - (P::LAYERS as i64) * (P::Q as i64)),
        "forward NTT input out of range"
    );
    for layer in 1..=P::LAYERS {
        forward_layer::<P, N>(r, layer);
    }
    reduce_coefficients::<P, N>(r);
}

/// Inverse NTT (in-place), including the `N^{-1}` scaling. Output
/// coefficients are canonical in `[0, Q)`.
///
/// The sum path of every inverse layer doubles the magnitude, so the buffer is
/// fully reduced after layer `MID_REDUCE_LAYER` to stay within 32 bits.
pub fn inverse<P: NttParams<N>, const N: usize>(r: &mut [i32; N]) {
    debug_assert!(
        r.iter()
            .all(|&c| (c as i64).abs() < 1i64 << (31 - (P::LAYERS - P::MID_REDUCE_LAYER + 1))),
        "inverse NTT input out of range"
    );
    for layer in (1..=P::LAYERS).rev() {
        inverse_layer::<P, N>(r, layer);
        if layer == P::MID_REDUCE_LAYER {
            reduce_coefficients::<P, N>(r);
        }
    }
    for c in r.iter_mut() {
        *c = P::multiply_reduce(P::FACTOR, *c);
    }
    reduce_coefficients::<P, N>(r);
}

/// Forward size-512 NTT modulo 6984193.
#[inline]
pub fn forward_ntt(r: &mut [i32; NTT_N]) {
    forward::<Ntt512, NTT_N>(r);
}

/// Inverse size-512 NTT modulo 6984193.
#[inline]
pub fn inverse_ntt(r: &mut [i32; NTT_N]) {
    inverse::<Ntt512, NTT_N>(r);
}
