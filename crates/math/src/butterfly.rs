//! Butterfly kernels for one block of an NTT layer.
//!
//! Each kernel processes the two halves `lo = c[start..start+len]` and
//! `hi = c[start+len..start+2*len]` of a block against a single root.

/// Forward (Cooley-Tukey) butterfly: `(lo, hi) <- (lo + t, lo - t)` where
/// `t = zeta * hi * 2^{-32}`.
#[inline]
pub fn butterfly_forward(lo: &mut [i32], hi: &mut [i32], zeta: i32, mul: impl Fn(i32, i32) -> i32) {
    debug_assert_eq!(lo.len(), hi.len());
    for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
        let t = mul(zeta, *b);
        *b = *a - t;
        *a += t;
    }
}

/// Inverse (Gentleman-Sande) butterfly: `(lo, hi) <- (lo + hi, zeta * (lo -
/// hi) * 2^{-32})`.
#[inline]
pub fn butterfly_inverse(lo: &mut [i32], hi: &mut [i32], zeta: i32, mul: impl Fn(i32, i32) -> i32) {
    debug_assert_eq!(lo.len(), hi.len());
    for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
        let t = *a;
        *a = t + *b;
        *b = mul(zeta, t - *b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        NTT_Q,
        reduce::{modulo, multiply_reduce, to_montgomery},
    };

    #[test]
    fn forward_then_inverse_doubles() {
        const M: usize = 32;
        let mut lo = [0i32; M];
        let mut hi = [0i32; M];
        for i in 0..M {
            lo[i] = (i as i32) * 13_001;
            hi[i] = (i as i32) * 7_919 + 100;
        }
        let (lo0, hi0) = (lo, hi);

        let zeta = 1_888_710;
        let zeta_inv = 5_095_483;
        butterfly_forward(&mut lo, &mut hi, to_montgomery(zeta, NTT_Q), multiply_reduce);
        butterfly_inverse(&mut lo, &mut hi, to_montgomery(zeta_inv, NTT_Q), multiply_reduce);

        for i in 0..M {
            assert_eq!(modulo(i64::from(lo[i]), NTT_Q), modulo(2 * i64::from(lo0[i]), NTT_Q));
            assert_eq!(modulo(i64::from(hi[i]), NTT_Q), modulo(2 * i64::from(hi0[i]), NTT_Q));
        }
    }

    #[test]
    fn forward_with_unit_root_is_add_sub() {
        let mut lo = [5, -7, 11];
        let mut hi = [3, 4, -20];
        butterfly_forward(&mut lo, &mut hi, to_montgomery(1, NTT_Q), multiply_reduce);
        let lo: [i32; 3] = lo.map(|x| modulo(i64::from(x), NTT_Q));
        let hi: [i32; 3] = hi.map(|x| modulo(i64::from(x), NTT_Q));
        assert_eq!(lo, [8, modulo(-3, NTT_Q), modulo(-9, NTT_Q)]);
        assert_eq!(hi, [2, modulo(-11, NTT_Q), 31]);
    }
}
