//! NTT parameter sets and compile-time root tables.
//!
//! A parameter set is a zero-sized marker type implementing [`NttParams`]. The
//! production set is [`Ntt512`] (`Z_{6984193}[X]/(X^{512}-1)`); [`Ntt8`]
//! (`Z_{17}[X]/(X^8-1)`) exercises the same transform skeleton at a size where
//! results can be checked by hand.
//!
//! # Root table layout
//!
//! With `psi` a primitive `n`-th root of unity and `s[j] = psi^{BitRev(j)}`
//! (bit-reversal over `log2(n) - 1` bits), the forward table holds `s[0..2^{k-1}]`
//! for layer `k` at offset `2^{k-1} - 1`. The inverse table holds the inverses
//! `s[j]^{-1}` for layer `k` at offset `n - 2^k`, so that walking the layers
//! from `log2(n)` down to 1 reads it front to back. Tables are stored in
//! Montgomery form (`r * 2^{32} mod q`); plain copies are kept for inspection.

use crate::{NTT_N, NTT_Q, reduce};

mod sealed {
    pub trait Sealed {}
}

/// Parameters of a cyclic size-`N` NTT over `Z_q`.
///
/// Sealed: only the sets defined here are supported.
pub trait NttParams<const N: usize>: sealed::Sealed + 'static {
    /// Prime modulus.
    const Q: i32;
    /// `Q^{-1} mod 2^{32}`.
    const QINV: i32;
    /// Primitive `N`-th root of unity the tables are generated from.
    const ROOT: i32;
    /// Number of butterfly layers, `log2(N)`.
    const LAYERS: u32 = N.trailing_zeros();
    /// Inverse layer after which every coefficient is reduced mod `Q`.
    const MID_REDUCE_LAYER: u32 = Self::LAYERS.div_ceil(2);
    /// `N^{-1} * 2^{32} mod Q`, applied after the last inverse layer.
    const FACTOR: i32;
    /// Forward roots, Montgomery form, `N - 1` entries.
    const ROOTS: &'static [i32];
    /// Inverse roots, Montgomery form, `N - 1` entries.
    const ROOTS_INV: &'static [i32];

    /// `x * y * 2^{-32} mod Q`, one operand in Montgomery form.
    #[inline]
    #[must_use]
    fn multiply_reduce(x: i32, y: i32) -> i32 {
        reduce::montgomery_reduce_with((x as i64) * (y as i64), Self::Q, Self::QINV)
    }
}

const fn pow_mod(mut base: i64, mut exp: i64, modulus: i64) -> i64 {
    let mut result: i64 = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    result
}

const fn bitrev(x: usize, bits: u32) -> usize {
    let mut r = 0;
    let mut i = 0;
    while i < bits {
        r |= ((x >> i) & 1) << (bits - 1 - i);
        i += 1;
    }
    r
}

const fn convert(v: i64, q: i32, montgomery: bool) -> i32 {
    if montgomery {
        reduce::to_montgomery(v, q)
    } else {
        v as i32
    }
}

/// Forward root table for `n = M + 1`.
const fn forward_roots<const M: usize>(q: i32, root: i32, montgomery: bool) -> [i32; M] {
    let n = M + 1;
    let layers = n.trailing_zeros();
    let mut table = [0i32; M];
    let mut k = 1;
    while k <= layers {
        let offset = (1usize << (k - 1)) - 1;
        let mut j = 0;
        while j < 1usize << (k - 1) {
            let s = pow_mod(root as i64, bitrev(j, layers - 1) as i64, q as i64);
            table[offset + j] = convert(s, q, montgomery);
            j += 1;
        }
        k += 1;
    }
    table
}

/// Inverse root table for `n = M + 1`, in the order the inverse layers
/// consume it.
const fn inverse_roots<const M: usize>(q: i32, root: i32, montgomery: bool) -> [i32; M] {
    let n = M + 1;
    let layers = n.trailing_zeros();
    let mut table = [0i32; M];
    let mut k = layers;
    while k >= 1 {
        let offset = n - (1usize << k);
        let mut j = 0;
        while j < 1usize << (k - 1) {
            let s = pow_mod(root as i64, bitrev(j, layers - 1) as i64, q as i64);
            let s_inv = pow_mod(s, q as i64 - 2, q as i64);
            table[offset + j] = convert(s_inv, q, montgomery);
            j += 1;
        }
        k -= 1;
    }
    table
}

const fn inverse_n_montgomery(n: usize, q: i32) -> i32 {
    reduce::to_montgomery(pow_mod(n as i64, q as i64 - 2, q as i64), q)
}

// -- Ntt512 ------------------------------------------------------------------

/// Primitive 512th root of unity mod 6984193.
pub const ROOT: i32 = 6358;

/// Forward roots for [`Ntt512`], plain residues.
pub const ROOTS_PLAIN: [i32; NTT_N - 1] = forward_roots(NTT_Q, ROOT, false);

/// Inverse roots for [`Ntt512`], plain residues.
pub const ROOTS_INV_PLAIN: [i32; NTT_N - 1] = inverse_roots(NTT_Q, ROOT, false);

/// Forward roots for [`Ntt512`], Montgomery form.
pub const ROOTS: [i32; NTT_N - 1] = forward_roots(NTT_Q, ROOT, true);

/// Inverse roots for [`Ntt512`], Montgomery form.
pub const ROOTS_INV: [i32; NTT_N - 1] = inverse_roots(NTT_Q, ROOT, true);

/// `512^{-1} * 2^{32} mod 6984193`.
pub const FACTOR: i32 = inverse_n_montgomery(NTT_N, NTT_Q);

/// Cyclic size-512 NTT modulo 6984193.
#[derive(Debug, Clone, Copy)]
pub struct Ntt512;

impl sealed::Sealed for Ntt512 {}

impl NttParams<NTT_N> for Ntt512 {
    const Q: i32 = NTT_Q;
    const QINV: i32 = reduce::QINV;
    const ROOT: i32 = ROOT;
    const FACTOR: i32 = FACTOR;
    const ROOTS: &'static [i32] = &ROOTS;
    const ROOTS_INV: &'static [i32] = &ROOTS_INV;
}

// -- Ntt8 --------------------------------------------------------------------

const Q8: i32 = 17;
const ROOT8: i32 = 2;
const ROOTS8: [i32; 7] = forward_roots(Q8, ROOT8, true);
const ROOTS8_INV: [i32; 7] = inverse_roots(Q8, ROOT8, true);

/// Cyclic size-8 NTT modulo 17.
#[derive(Debug, Clone, Copy)]
pub struct Ntt8;

impl sealed::Sealed for Ntt8 {}

impl NttParams<8> for Ntt8 {
    const Q: i32 = Q8;
    const QINV: i32 = reduce::inverse_mod_2_32(Q8);
    const ROOT: i32 = ROOT8;
    const FACTOR: i32 = inverse_n_montgomery(8, Q8);
    const ROOTS: &'static [i32] = &ROOTS8;
    const ROOTS_INV: &'static [i32] = &ROOTS8_INV;
}

const _: () = {
    macro_rules! check_params {
        ($t:ty, $n:expr) => {{
            const N: usize = $n;
            assert!(<$t as NttParams<N>>::ROOTS.len() == N - 1);
            assert!(<$t as NttParams<N>>::ROOTS_INV.len() == N - 1);
            let q = <$t as NttParams<N>>::Q;
            // ROOT has order exactly N.
            assert!(pow_mod(<$t as NttParams<N>>::ROOT as i64, (N / 2) as i64, q as i64) == q as i64 - 1);
            assert!((q as u32).wrapping_mul(<$t as NttParams<N>>::QINV as u32) == 1);
        }};
    }
    check_params!(Ntt512, NTT_N);
    check_params!(Ntt8, 8);

    assert!(FACTOR == 1_404_415);
    assert!(<Ntt512 as NttParams<NTT_N>>::LAYERS == 9);
    assert!(<Ntt512 as NttParams<NTT_N>>::MID_REDUCE_LAYER == 5);

    // Against the published ntrulpr761 tables.
    assert!(ROOTS[0] == 6_672_794);
    assert!(ROOTS[2] == 3_471_433);
    assert!(ROOTS[NTT_N - 2] == 4_337_982);
    assert!(ROOTS_INV[1] == 3_512_760);
    assert!(ROOTS_INV[NTT_N - 2] == 6_672_794);
};
