//! Zero padding from the target ring length to the Good's length.

use crate::{P, PADDED};

/// Copy the 761 input coefficients into a zeroed 1536-entry buffer.
///
/// Accepts any coefficient width that widens losslessly to `i32`, so small
/// (`i8`), packed (`i16`) and working (`i32`) polynomials share one routine.
#[must_use]
pub fn pad<T: Copy + Into<i32>>(input: &[T; P]) -> [i32; PADDED] {
    let mut out = [0i32; PADDED];
    for (dst, &src) in out.iter_mut().zip(input) {
        *dst = src.into();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_copies_prefix_and_zeroes_tail() {
        let input: [i32; P] = core::array::from_fn(|i| i as i32 - 380);
        let out = pad(&input);
        assert_eq!(out[..P], input[..]);
        assert!(out[P..].iter().all(|&c| c == 0));
    }

    #[test]
    fn pad_widens_small_coefficients() {
        let mut input = [0i8; P];
        input[0] = -1;
        input[P - 1] = 1;
        let out = pad(&input);
        assert_eq!(out[0], -1);
        assert_eq!(out[P - 1], 1);
        assert_eq!(out.iter().filter(|&&c| c != 0).count(), 2);
    }

    #[test]
    fn pad_of_i16() {
        let input = [-2_295i16; P];
        let out = pad(&input);
        assert!(out[..P].iter().all(|&c| c == -2_295));
        assert_eq!(out[P], 0);
    }
}
