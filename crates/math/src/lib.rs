//! `ntrup-math` -- NTT arithmetic for NTRU LPRime 761.
//!
//! `no_std`, zero-allocation multiplication in `Z_q[X]/(X^{761}-X-1)` with
//! `q = 4591`. The product is computed over the NTT-friendly ring
//! `Z_{6984193}[X]/(X^{512}-1)`: both operands are zero-padded to 1536
//! coefficients, split by Good's permutation into three size-512 cyclic
//! transforms, multiplied column-wise in `Z[Y]/(Y^3-1)`, transformed back and
//! folded down to degree 760.
//!
//! Sub-modules cover modular and Montgomery reduction, root-table generation,
//! the in-place NTT, Good's permutation, the small-ring product, ring
//! reduction and the end-to-end multiplier.

#![no_std]
#![deny(unsafe_code)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]

pub mod butterfly;
pub mod goods;
pub mod mult;
pub mod ntt;
pub mod pad;
pub mod params;
pub mod reduce;
pub mod ring;
pub mod small_ring;

pub use goods::{GoodsMatrix, NttMatrix};
pub use mult::{ntt_multiply, ntt_multiply_centered, schoolbook_multiply};
pub use params::{Ntt8, Ntt512, NttParams};

/// Degree of the NTRU LPRime ring polynomial `X^{761}-X-1`.
pub const P: usize = 761;

/// Target ring modulus.
pub const Q: i32 = 4591;

/// NTT-friendly modulus (`512 | NTT_Q - 1`).
pub const NTT_Q: i32 = 6_984_193;

/// Size of each cyclic NTT.
pub const NTT_N: usize = 512;

/// Number of size-[`NTT_N`] transforms produced by Good's permutation.
pub const GOODS_ROWS: usize = 3;

/// Zero-padded length, `GOODS_ROWS * NTT_N`.
pub const PADDED: usize = GOODS_ROWS * NTT_N;

const _: () = {
    const fn gcd(mut a: usize, mut b: usize) -> usize {
        while b != 0 {
            let t = a % b;
            a = b;
            b = t;
        }
        a
    }

    // Good's permutation is a bijection only for coprime factors.
    assert!(gcd(GOODS_ROWS, NTT_N) == 1);
    // The linear product of two degree-(P-1) inputs must not wrap.
    assert!(2 * P - 1 <= PADDED);
    assert!(NTT_N.is_power_of_two());
    assert!((NTT_Q - 1) % (NTT_N as i32) == 0);
    assert!(Q < NTT_Q / 2);
};
