//! Result normalization for the real general eigen-decomposition.
//!
//! The real-arithmetic kernels (sgeev/dgeev) return eigenvalues as separate
//! real and imaginary arrays and pack complex eigenvectors into real
//! storage: when the eigenvalue is real the column holds the (real)
//! eigenvector directly; a complex-conjugate pair occupies two consecutive
//! columns, the shared real part in column j and the imaginary part of the
//! first member in column j+1. The routines here turn that packing into
//! explicit complex columns. The complex-arithmetic kernels return complex
//! storage natively and never go through this path.

use num_complex::Complex;
use num_traits::Float;

/// Imaginary parts below this are treated as a real eigenvalue when
/// scanning for conjugate pairs, matched against the element type's own
/// precision class.
pub(crate) const PAIR_EPS: f64 = 1e-6;

/// Combine split real/imaginary eigenvalue arrays into complex values.
#[cfg_attr(not(feature = "lapack"), allow(dead_code))]
pub(crate) fn combine_eigenvalues<R: Float>(wr: &[R], wi: &[R], values: &mut [Complex<R>]) {
    for i in 0..wr.len() {
        values[i] = Complex::new(wr[i], wi[i]);
    }
}

/// Unpack real-packed eigenvector columns into explicit complex columns.
///
/// `raw` is the kernel's n x n real output with leading dimension `ldraw`;
/// `out` receives n complex columns with leading dimension `ldout`. Column
/// j is scanned against `wi[j]`: a real eigenvalue yields a real column; a
/// conjugate pair consumes columns j and j+1 of `raw` and emits the pair
/// (re, +im) / (re, -im), after which j+1 is skipped.
#[cfg_attr(not(feature = "lapack"), allow(dead_code))]
pub(crate) fn unpack_conjugate_pairs<R: Float>(
    n: usize,
    wi: &[R],
    raw: &[R],
    ldraw: usize,
    out: &mut [Complex<R>],
    ldout: usize,
) {
    let eps = R::from(PAIR_EPS).unwrap();
    let mut j = 0;
    while j < n {
        if wi[j].abs() < eps || j + 1 == n {
            for i in 0..n {
                out[j * ldout + i] = Complex::new(raw[j * ldraw + i], R::zero());
            }
            j += 1;
        } else {
            for i in 0..n {
                let re = raw[j * ldraw + i];
                let im = raw[(j + 1) * ldraw + i];
                out[j * ldout + i] = Complex::new(re, im);
                out[(j + 1) * ldout + i] = Complex::new(re, -im);
            }
            j += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_eigenvalues() {
        let wr = [1.0f64, 2.0, 3.0];
        let wi = [0.0f64, 0.5, -0.5];
        let mut values = [Complex::new(0.0, 0.0); 3];
        combine_eigenvalues(&wr, &wi, &mut values);
        assert_eq!(values[0], Complex::new(1.0, 0.0));
        assert_eq!(values[1], Complex::new(2.0, 0.5));
        assert_eq!(values[2], Complex::new(3.0, -0.5));
    }

    #[test]
    fn test_unpack_all_real_spectrum() {
        // Two real eigenvalues: both columns pass through with exactly zero
        // imaginary parts.
        let wi = [0.0f64, 0.0];
        let raw = [1.0, 2.0, 3.0, 4.0]; // columns (1,2) and (3,4)
        let mut out = [Complex::new(0.0, 0.0); 4];
        unpack_conjugate_pairs(2, &wi, &raw, 2, &mut out, 2);
        assert_eq!(out[0], Complex::new(1.0, 0.0));
        assert_eq!(out[1], Complex::new(2.0, 0.0));
        assert_eq!(out[2], Complex::new(3.0, 0.0));
        assert_eq!(out[3], Complex::new(4.0, 0.0));
    }

    #[test]
    fn test_unpack_conjugate_pair() {
        // Purely imaginary pair +/- i: column 0 holds the real parts,
        // column 1 the imaginary parts.
        let wi = [1.0f64, -1.0];
        let raw = [0.5, 0.5, 0.5, -0.5];
        let mut out = [Complex::new(0.0, 0.0); 4];
        unpack_conjugate_pairs(2, &wi, &raw, 2, &mut out, 2);
        assert_eq!(out[0], Complex::new(0.5, 0.5));
        assert_eq!(out[1], Complex::new(0.5, -0.5));
        // Second member is the exact conjugate of the first.
        assert_eq!(out[2], out[0].conj());
        assert_eq!(out[3], out[1].conj());
    }

    #[test]
    fn test_unpack_mixed_spectrum() {
        // Pair in columns 0/1, real eigenvalue in column 2.
        let wi = [2.0f64, -2.0, 0.0];
        let raw = [
            1.0, 0.0, 0.0, // re parts of the pair
            0.0, 1.0, 0.0, // im parts of the pair
            0.0, 0.0, 1.0, // real eigenvector
        ];
        let mut out = [Complex::new(0.0, 0.0); 9];
        unpack_conjugate_pairs(3, &wi, &raw, 3, &mut out, 3);
        assert_eq!(out[0], Complex::new(1.0, 0.0));
        assert_eq!(out[1], Complex::new(0.0, 1.0));
        assert_eq!(out[3], Complex::new(1.0, 0.0));
        assert_eq!(out[4], Complex::new(0.0, -1.0));
        for i in 0..3 {
            assert_eq!(out[3 + i], out[i].conj());
        }
        assert_eq!(out[8], Complex::new(1.0, 0.0));
        assert_eq!(out[6], Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_unpack_respects_leading_dimensions() {
        // Raw buffer with ldraw 3 for a 2x2 problem; output with ldout 4.
        let wi = [0.0f32, 0.0];
        let mut raw = [0.0f32; 6];
        raw[0] = 1.0;
        raw[1] = 2.0;
        raw[3] = 3.0;
        raw[4] = 4.0;
        let mut out = [Complex::new(0.0f32, 0.0); 8];
        unpack_conjugate_pairs(2, &wi, &raw, 3, &mut out, 4);
        assert_eq!(out[0], Complex::new(1.0, 0.0));
        assert_eq!(out[1], Complex::new(2.0, 0.0));
        assert_eq!(out[4], Complex::new(3.0, 0.0));
        assert_eq!(out[5], Complex::new(4.0, 0.0));
    }

    #[test]
    fn test_unpack_trailing_column_never_reads_past_end() {
        // A nonzero wi in the last column cannot index column j+1.
        let wi = [0.0f64, 5.0];
        let raw = [1.0, 0.0, 0.0, 1.0];
        let mut out = [Complex::new(0.0, 0.0); 4];
        unpack_conjugate_pairs(2, &wi, &raw, 2, &mut out, 2);
        assert_eq!(out[3], Complex::new(1.0, 0.0));
    }
}
