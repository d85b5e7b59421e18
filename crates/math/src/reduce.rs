//! Euclidean and Montgomery modular reduction.
//!
//! Montgomery arithmetic uses the radix `R = 2^{32}` over the NTT modulus
//! `NTT_Q = 6984193`. Values read out of the transforms are always brought
//! back to canonical residues with [`modulo`].

use crate::NTT_Q;

/// `q^{-1} mod 2^{32}` by Newton iteration from the seed `x = q`, which is
/// already correct to 3 bits for odd `q`.
pub(crate) const fn inverse_mod_2_32(q: i32) -> i32 {
    let q = q as u32;
    let mut x = q;
    let mut i = 0;
    while i < 5 {
        x = x.wrapping_mul(2u32.wrapping_sub(q.wrapping_mul(x)));
        i += 1;
    }
    x as i32
}

/// `NTT_Q^{-1} mod 2^{32}` (Montgomery inverse).
pub const QINV: i32 = inverse_mod_2_32(NTT_Q);

const _: () = assert!(QINV == 1_926_852_097);

/// Remainder after Euclidean division.
///
/// The result lies in `[0, |m|)` whatever the sign of `value`.
#[inline]
#[must_use]
pub const fn modulo(value: i64, m: i32) -> i32 {
    value.rem_euclid(m as i64) as i32
}

/// `(x * y) mod m` with a 64-bit intermediate product.
#[inline]
#[must_use]
pub const fn multiply_modulo(x: i32, y: i32, m: i32) -> i32 {
    modulo((x as i64) * (y as i64), m)
}

/// Map a canonical residue in `[0, m)` to `(-m/2, m/2]`.
#[inline]
#[must_use]
pub const fn center(value: i32, m: i32) -> i32 {
    if value > m / 2 { value - m } else { value }
}

/// Montgomery reduction for an arbitrary odd modulus `q` with `qinv = q^{-1}
/// mod 2^{32}`.
///
/// Input: `|x| < q * 2^{31}`. Output: `r in (-q, q)` with `r = x * 2^{-32}
/// (mod q)`.
#[inline]
#[must_use]
pub const fn montgomery_reduce_with(x: i64, q: i32, qinv: i32) -> i32 {
    let t = (x as i32).wrapping_mul(qinv);
    ((x - (t as i64) * (q as i64)) >> 32) as i32
}

/// Montgomery reduction modulo [`NTT_Q`]: `x * 2^{-32} mod NTT_Q`.
#[inline]
#[must_use]
pub const fn montgomery_reduce(x: i64) -> i32 {
    montgomery_reduce_with(x, NTT_Q, QINV)
}

/// `x * y * 2^{-32} mod NTT_Q`.
///
/// Exactly one of the operands is expected to be in Montgomery form; the root
/// tables are, so the product comes out in the plain domain.
#[inline]
#[must_use]
pub const fn multiply_reduce(x: i32, y: i32) -> i32 {
    montgomery_reduce((x as i64) * (y as i64))
}

/// `v * 2^{32} mod m`, the Montgomery form of a canonical residue.
#[inline]
#[must_use]
pub const fn to_montgomery(v: i64, m: i32) -> i32 {
    modulo(v << 32, m)
}
