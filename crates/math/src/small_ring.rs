//! Per-column product in `Z_{NTT_Q}[Y]/(Y^3-1)`.
//!
//! After the forward transforms, column `idx` of a Good's matrix is a
//! degree-2 polynomial in `Y`. Two columns are multiplied schoolbook style
//! and the `Y^3`, `Y^4` terms are folded back with `Y^3 = 1`.
//!
//! The products use plain modular multiplication: the transform outputs are
//! plain residues (the Montgomery factor was absorbed by the root tables), so
//! a Montgomery multiply here would leave a stray `2^{-32}`.

use crate::{GOODS_ROWS, NTT_Q, reduce::multiply_modulo};

/// Multiply two columns. Inputs canonical in `[0, NTT_Q)`; output entries
/// are sums of at most three canonical products, below `3 * NTT_Q`.
#[must_use]
pub fn mul_column(f: [i32; GOODS_ROWS], g: [i32; GOODS_ROWS]) -> [i32; GOODS_ROWS] {
    debug_assert!(f.iter().chain(&g).all(|c| (0..NTT_Q).contains(c)));
    let mut accum = [0i32; 2 * GOODS_ROWS - 1];
    for (n, &fi) in f.iter().enumerate() {
        for (m, &gm) in g.iter().enumerate() {
            accum[n + m] += multiply_modulo(fi, gm, NTT_Q);
        }
    }
    for p in (GOODS_ROWS..2 * GOODS_ROWS - 1).rev() {
        if accum[p] != 0 {
            accum[p - GOODS_ROWS] += accum[p];
            accum[p] = 0;
        }
    }
    [accum[0], accum[1], accum[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::modulo;

    #[test]
    fn unit_column_is_identity() {
        assert_eq!(mul_column([5, 6, 7], [1, 0, 0]), [5, 6, 7]);
    }

    #[test]
    fn y_rotates() {
        // (a + bY + cY^2) * Y = c + aY + bY^2
        assert_eq!(mul_column([5, 6, 7], [0, 1, 0]), [7, 5, 6]);
        assert_eq!(mul_column([5, 6, 7], [0, 0, 1]), [6, 7, 5]);
    }

    #[test]
    fn hand_computed_product() {
        // (1 + 2Y + 3Y^2)(4 + 5Y + 6Y^2) = 4 + 13Y + 28Y^2 + 27Y^3 + 18Y^4
        //                                 = 31 + 31Y + 28Y^2
        assert_eq!(mul_column([1, 2, 3], [4, 5, 6]), [31, 31, 28]);
    }

    #[test]
    fn large_inputs_stay_below_three_q() {
        let top = NTT_Q - 1;
        let c = mul_column([top; 3], [top; 3]);
        // (-1)^2 summed over three products per output.
        for v in c {
            assert!(v < 3 * NTT_Q);
            assert_eq!(modulo(v as i64, NTT_Q), 3);
        }
    }

    #[test]
    fn commutes() {
        let f = [1_234_567, 6_000_000, 42];
        let g = [3, 6_984_192, 2_500_000];
        assert_eq!(mul_column(f, g), mul_column(g, f));
    }
}
