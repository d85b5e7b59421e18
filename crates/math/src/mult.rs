//! End-to-end multiplication in `Z_q[X]/(X^{761}-X-1)`.
//!
//! Pipeline: zero-pad to 1536, Good's permutation, six forward NTTs, the
//! column-wise product in `Z[Y]/(Y^3-1)`, three inverse NTTs, inverse Good's
//! permutation, folding with `X^{761} = X + 1`, then the lift out of
//! `Z_{NTT_Q}` and the reduction mod `q`.
//!
//! The NTT ring only sees the product mod `NTT_Q`. It equals the integer
//! product, and therefore the product mod `q`, when every folded coefficient
//! lies in `(-NTT_Q/2, NTT_Q/2)`. A folded coefficient collects at most two
//! products per coefficient of either factor, which gives the bound checked
//! by [`within_product_bound`]. A small factor (`{-1, 0, 1}`) times a
//! centered general factor of any weight up to 760 always satisfies it.

use crate::{
    NTT_Q, P, PADDED, Q,
    goods::{goods_forward, goods_inverse},
    pad::pad,
    ring::{freeze, freeze_centered, freeze_ntt, reduce_terms_761},
};

fn norms<T: Copy + Into<i32>>(v: &[T; P]) -> (i64, i64) {
    v.iter().fold((0, 0), |(l1, linf), &c| {
        let c: i32 = c.into();
        let c = (c as i64).abs();
        (l1 + c, linf.max(c))
    })
}

/// Whether the product of `f` and `g` is recovered exactly from its image
/// mod `NTT_Q`: `2 * min(|f|_1 * |g|_inf, |g|_1 * |f|_inf) < NTT_Q / 2`.
#[must_use]
pub fn within_product_bound<F, G>(f: &[F; P], g: &[G; P]) -> bool
where
    F: Copy + Into<i32>,
    G: Copy + Into<i32>,
{
    let (f1, finf) = norms(f);
    let (g1, ginf) = norms(g);
    2 * (f1 * ginf).min(g1 * finf) < (NTT_Q / 2) as i64
}

/// Product folded to degree 760, coefficients still in the NTT ring.
fn multiply_folded<F, G>(f: &[F; P], g: &[G; P]) -> [i32; PADDED]
where
    F: Copy + Into<i32>,
    G: Copy + Into<i32>,
{
    debug_assert!(
        within_product_bound(f, g),
        "operands too large for an exact product mod NTT_Q"
    );
    let a = goods_forward(&pad(f)).ntt();
    let b = goods_forward(&pad(g)).ntt();
    let c = a.mul_cyclic3(&b).ntt_inverse();
    let mut v = goods_inverse(&c);
    reduce_terms_761(&mut v);
    v
}

/// `f * g` in `Z_q[X]/(X^{761}-X-1)`, coefficients canonical in `[0, 4591)`.
///
/// One factor is expected to be small; see [`within_product_bound`].
#[must_use]
pub fn ntt_multiply<F, G>(f: &[F; P], g: &[G; P]) -> [i32; P]
where
    F: Copy + Into<i32>,
    G: Copy + Into<i32>,
{
    let v = multiply_folded(f, g);
    core::array::from_fn(|i| freeze(freeze_ntt(v[i])))
}

/// [`ntt_multiply`] with coefficients centered in `[-2295, 2295]`.
#[must_use]
pub fn ntt_multiply_centered<F, G>(f: &[F; P], g: &[G; P]) -> [i32; P]
where
    F: Copy + Into<i32>,
    G: Copy + Into<i32>,
{
    let v = multiply_folded(f, g);
    core::array::from_fn(|i| freeze_centered(freeze_ntt(v[i])))
}

/// Direct `O(p^2)` product in the same ring, canonical in `[0, 4591)`.
///
/// No size restriction on the operands beyond `i32` coefficients.
#[must_use]
pub fn schoolbook_multiply<F, G>(f: &[F; P], g: &[G; P]) -> [i32; P]
where
    F: Copy + Into<i32>,
    G: Copy + Into<i32>,
{
    let q = Q as i64;
    let mut h = [0i64; 2 * P - 1];
    for (i, &a) in f.iter().enumerate() {
        let a: i32 = a.into();
        for (j, &b) in g.iter().enumerate() {
            let b: i32 = b.into();
            h[i + j] = (h[i + j] + (a as i64 % q) * (b as i64 % q)) % q;
        }
    }
    for k in (P..2 * P - 1).rev() {
        h[k - (P - 1)] = (h[k - (P - 1)] + h[k]) % q;
        h[k - P] = (h[k - P] + h[k]) % q;
    }
    core::array::from_fn(|i| freeze((h[i] % q) as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic xorshift stream for test inputs.
    struct Stream(u64);

    impl Stream {
        fn next(&mut self) -> u64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            self.0
        }

        fn general(&mut self) -> [i32; P] {
            core::array::from_fn(|_| (self.next() % Q as u64) as i32 - Q / 2)
        }

        fn small(&mut self) -> [i8; P] {
            core::array::from_fn(|_| (self.next() % 3) as i8 - 1)
        }
    }

    #[test]
    fn zero_annihilates() {
        let f = Stream(1).general();
        let zero = [0i32; P];
        assert_eq!(ntt_multiply(&f, &zero), [0; P]);
        assert_eq!(ntt_multiply(&zero, &f), [0; P]);
    }

    #[test]
    fn one_is_identity() {
        let f = Stream(2).general();
        let mut one = [0i8; P];
        one[0] = 1;
        let expected: [i32; P] = f.map(freeze);
        assert_eq!(ntt_multiply(&f, &one), expected);
        assert_eq!(ntt_multiply_centered(&f, &one), f);
    }

    #[test]
    fn x_to_the_761_is_x_plus_one() {
        let mut x = [0i32; P];
        x[1] = 1;
        let mut x760 = [0i32; P];
        x760[P - 1] = 1;
        let mut expected = [0i32; P];
        expected[0] = 1;
        expected[1] = 1;
        assert_eq!(ntt_multiply(&x, &x760), expected);
    }

    #[test]
    fn commutes() {
        let mut s = Stream(3);
        let f = s.general();
        let g = s.small();
        let g32: [i32; P] = g.map(i32::from);
        assert_eq!(ntt_multiply(&f, &g), ntt_multiply(&g32, &f));
    }

    #[test]
    fn agrees_with_schoolbook() {
        let mut s = Stream(0x5eed_1234_abcd_0001);
        for _ in 0..4 {
            let f = s.general();
            let g = s.small();
            assert!(within_product_bound(&f, &g));
            assert_eq!(ntt_multiply(&f, &g), schoolbook_multiply(&f, &g));
        }
    }

    #[test]
    fn agrees_with_schoolbook_on_uncentered_input() {
        // Canonical [0, q) inputs need a sparse small factor.
        let mut s = Stream(77);
        let f: [i32; P] = s.general().map(freeze);
        let mut g = [0i8; P];
        for i in (0..P).step_by(4) {
            g[i] = if s.next() & 1 == 0 { 1 } else { -1 };
        }
        assert!(within_product_bound(&f, &g));
        assert_eq!(ntt_multiply(&f, &g), schoolbook_multiply(&f, &g));
    }

    #[test]
    fn centered_output_range_and_congruence() {
        let mut s = Stream(99);
        let f = s.general();
        let g = s.small();
        let canonical = ntt_multiply(&f, &g);
        let centered = ntt_multiply_centered(&f, &g);
        for i in 0..P {
            assert!((-(Q / 2)..=Q / 2).contains(&centered[i]));
            assert_eq!(freeze(centered[i]), canonical[i]);
        }
    }

    #[test]
    fn product_bound_rejects_full_weight_uncentered() {
        let f = [Q - 1; P];
        let g = [1i8; P];
        assert!(!within_product_bound(&f, &g));
    }

    #[test]
    fn schoolbook_hand_computed() {
        // (1 + 2X) * (3 + X^760) = 3 + 6X + X^760 + 2X^761
        //                        = 5 + 8X + X^760
        let mut f = [0i32; P];
        f[0] = 1;
        f[1] = 2;
        let mut g = [0i32; P];
        g[0] = 3;
        g[P - 1] = 1;
        let h = schoolbook_multiply(&f, &g);
        assert_eq!(h[0], 5);
        assert_eq!(h[1], 8);
        assert_eq!(h[P - 1], 1);
        assert_eq!(h.iter().filter(|&&c| c != 0).count(), 3);
    }
}
