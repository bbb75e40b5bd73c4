//! Generic operation front-ends.
//!
//! Each function is the caller-facing form of one native operation, generic
//! over the element type; the per-precision routing, workspace handling, and
//! result normalization live in the `Scalar` implementations. Matrices are
//! column-major slices with explicit leading dimensions; every function
//! mutates caller buffers in place only for the documented outputs.

use num_complex::Complex;

use crate::scalar::{ConditionUpdate, LeastSquares, Scalar, SelectedEigen};
use lapgate_core::{
    Diag, EigenJob, EigenRange, MatrixNorm, Result, ScaleShape, Side, SvdJob, Transpose, Uplo,
};

/// Minimum-norm least-squares solve of A X = B for a general m x n matrix.
///
/// On success the leading n x nrhs block of `b` holds the solution, `s`
/// (length >= min(m,n)) the singular values of A in descending order, and
/// the returned rank is the number of singular values above `rcond` times
/// the largest (a negative `rcond` selects machine precision). `b` must be
/// tall enough for both B (m rows) and X (n rows): ldb >= max(1, m, n).
pub fn gelss<T: Scalar>(
    m: i32,
    n: i32,
    nrhs: i32,
    a: &mut [T],
    lda: i32,
    b: &mut [T],
    ldb: i32,
    s: &mut [T::Real],
    rcond: T::Real,
) -> Result<LeastSquares> {
    T::gelss(m, n, nrhs, a, lda, b, ldb, s, rcond)
}

/// Solve A X = B from the Cholesky factors produced by [`potrf`].
/// The factor and right-hand side use leading dimension n; the solution
/// overwrites `b`. A nonzero returned status is passed through unchanged.
pub fn potrs<T: Scalar>(uplo: Uplo, n: i32, nrhs: i32, factors: &[T], b: &mut [T]) -> Result<i32> {
    T::potrs(uplo, n, nrhs, factors, b)
}

/// Solve A X = B from the symmetric-indefinite factors and pivots produced
/// by [`sytrf`]. The solution overwrites `b`.
pub fn sytrs<T: Scalar>(
    uplo: Uplo,
    n: i32,
    nrhs: i32,
    factors: &[T],
    pivots: &[i32],
    b: &mut [T],
) -> Result<i32> {
    T::sytrs(uplo, n, nrhs, factors, pivots, b)
}

/// Solve op(A) X = B from the LU factors and pivots produced by [`getrf`].
/// The solution overwrites `b`.
pub fn getrs<T: Scalar>(
    trans: Transpose,
    n: i32,
    nrhs: i32,
    factors: &[T],
    pivots: &[i32],
    b: &mut [T],
) -> Result<i32> {
    T::getrs(trans, n, nrhs, factors, pivots, b)
}

/// Selected eigenvalues (and optionally eigenvectors) of a symmetric or
/// Hermitian matrix, by value interval or 1-based index range.
///
/// Found eigenvalues land ascending in `values`; with `jobz` requesting
/// vectors, the matching columns land in `vectors` (leading dimension
/// `ldv`) and `ifail` (length n) receives the indices of any eigenvectors
/// that failed to converge — their count is the returned `info`, reported
/// as data rather than an error because the converged part is usable.
pub fn syevx<T: Scalar>(
    jobz: EigenJob,
    range: EigenRange,
    uplo: Uplo,
    n: i32,
    a: &mut [T],
    lda: i32,
    vl: T::Real,
    vu: T::Real,
    il: i32,
    iu: i32,
    abstol: T::Real,
    values: &mut [T::Real],
    vectors: &mut [T],
    ldv: i32,
    ifail: &mut [i32],
) -> Result<SelectedEigen> {
    T::syevx(
        jobz, range, uplo, n, a, lda, vl, vu, il, iu, abstol, values, vectors, ldv, ifail,
    )
}

/// Full eigen-decomposition of a symmetric or Hermitian matrix. Eigenvalues
/// ascend in `values`; with `jobz` requesting vectors they overwrite `a`.
pub fn syev<T: Scalar>(
    jobz: EigenJob,
    uplo: Uplo,
    n: i32,
    a: &mut [T],
    lda: i32,
    values: &mut [T::Real],
) -> Result<i32> {
    T::syev(jobz, uplo, n, a, lda, values)
}

/// Divide-and-conquer singular value decomposition.
///
/// Singular values land descending in `s` (length >= min(m,n)); `job`
/// controls which of U and V^T are formed and at what shape. With
/// [`SvdJob::None`] the `u`/`vt` buffers are not referenced and may be
/// one-element dummies with unit leading dimensions.
pub fn gesdd<T: Scalar>(
    job: SvdJob,
    m: i32,
    n: i32,
    a: &mut [T],
    lda: i32,
    s: &mut [T::Real],
    u: &mut [T],
    ldu: i32,
    vt: &mut [T],
    ldvt: i32,
) -> Result<i32> {
    T::gesdd(job, m, n, a, lda, s, u, ldu, vt, ldvt)
}

/// General (non-symmetric) eigen-decomposition.
///
/// Eigenvalues and eigenvectors are always delivered in complex form, even
/// for the real element types: the real kernels report eigenvalues in split
/// real/imaginary arrays and pack complex-conjugate eigenvector pairs into
/// consecutive real columns, and that storage is normalized here into
/// explicit complex columns. A requested side's buffer needs n x n complex
/// elements under its leading dimension; an unrequested side's buffer is
/// untouched (pass an empty slice and a leading dimension of 1).
pub fn geev<T: Scalar>(
    jobvl: EigenJob,
    jobvr: EigenJob,
    n: i32,
    a: &mut [T],
    lda: i32,
    values: &mut [Complex<T::Real>],
    vl: &mut [Complex<T::Real>],
    ldvl: i32,
    vr: &mut [Complex<T::Real>],
    ldvr: i32,
) -> Result<i32> {
    T::geev(jobvl, jobvr, n, a, lda, values, vl, ldvl, vr, ldvr)
}

/// LU factorization with partial pivoting, in place. A positive returned
/// status is the 1-based index of the first exactly-zero pivot.
pub fn getrf<T: Scalar>(m: i32, n: i32, a: &mut [T], lda: i32, pivots: &mut [i32]) -> Result<i32> {
    T::getrf(m, n, a, lda, pivots)
}

/// Cholesky factorization, in place. A positive returned status is the
/// order of the first non-positive-definite leading minor.
pub fn potrf<T: Scalar>(uplo: Uplo, n: i32, a: &mut [T], lda: i32) -> Result<i32> {
    T::potrf(uplo, n, a, lda)
}

/// Symmetric-indefinite (Bunch-Kaufman) factorization, in place.
pub fn sytrf<T: Scalar>(uplo: Uplo, n: i32, a: &mut [T], lda: i32, pivots: &mut [i32]) -> Result<i32> {
    T::sytrf(uplo, n, a, lda, pivots)
}

/// Rank-revealing QR factorization with column pivoting, in place. `pivots`
/// (length n) receives the applied column permutation, 1-based; a zero
/// entry on input marks the column as free to pivot.
pub fn geqp3<T: Scalar>(
    m: i32,
    n: i32,
    a: &mut [T],
    lda: i32,
    pivots: &mut [i32],
    tau: &mut [T],
) -> Result<i32> {
    T::geqp3(m, n, a, lda, pivots, tau)
}

/// Complete orthogonal (RZ) factorization of an m x n (m <= n) upper
/// trapezoidal matrix, in place. `tau` needs m elements.
pub fn tzrzf<T: Scalar>(m: i32, n: i32, a: &mut [T], lda: i32, tau: &mut [T]) -> Result<i32> {
    T::tzrzf(m, n, a, lda, tau)
}

/// Apply Q (or its adjoint) from a QR factorization to the m x n matrix
/// `c`, using the reflectors and `tau` produced by [`geqp3`].
pub fn ormqr<T: Scalar>(
    side: Side,
    trans: Transpose,
    m: i32,
    n: i32,
    k: i32,
    a: &[T],
    lda: i32,
    tau: &[T],
    c: &mut [T],
    ldc: i32,
) -> Result<i32> {
    T::ormqr(side, trans, m, n, k, a, lda, tau, c, ldc)
}

/// Apply Z (or its adjoint) from an RZ factorization to the m x n matrix
/// `c`, using the reflectors and `tau` produced by [`tzrzf`]. `l` is the
/// number of trailing columns containing the reflector tails.
pub fn ormrz<T: Scalar>(
    side: Side,
    trans: Transpose,
    m: i32,
    n: i32,
    k: i32,
    l: i32,
    a: &[T],
    lda: i32,
    tau: &[T],
    c: &mut [T],
    ldc: i32,
) -> Result<i32> {
    T::ormrz(side, trans, m, n, k, l, a, lda, tau, c, ldc)
}

/// Triangular solve with scaling: op(A) X = alpha B (or X op(A) = alpha B
/// from the right), X overwriting `b`.
pub fn trsm<T: Scalar>(
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    m: i32,
    n: i32,
    alpha: T,
    a: &[T],
    lda: i32,
    b: &mut [T],
    ldb: i32,
) -> Result<()> {
    T::trsm(side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
}

/// Matrix norm of a general m x n matrix.
pub fn lange<T: Scalar>(norm: MatrixNorm, m: i32, n: i32, a: &[T], lda: i32) -> Result<T::Real> {
    T::lange(norm, m, n, a, lda)
}

/// Multiply a matrix by cto/cfrom in place without over- or underflowing.
/// `kl`/`ku` are only read for the banded shapes.
pub fn lascl<T: Scalar>(
    shape: ScaleShape,
    kl: i32,
    ku: i32,
    cfrom: T::Real,
    cto: T::Real,
    m: i32,
    n: i32,
    a: &mut [T],
    lda: i32,
) -> Result<()> {
    T::lascl(shape, kl, ku, cfrom, cto, m, n, a, lda)
}

/// Strided vector copy of n elements from `x` to `y`.
pub fn copy<T: Scalar>(n: i32, x: &[T], incx: i32, y: &mut [T], incy: i32) -> Result<()> {
    T::copy(n, x, incx, y, incy)
}

/// One step of incremental condition estimation: update a singular value
/// estimate of a triangular matrix after appending the column (`w`,
/// `gamma`). `job` is 1 to track the largest singular value, 2 for the
/// smallest; `x` is the current approximate singular vector of length `j`.
pub fn laic1<T: Scalar>(
    job: i32,
    j: i32,
    x: &[T],
    sest: T::Real,
    w: &[T],
    gamma: T,
) -> Result<ConditionUpdate<T>> {
    T::laic1(job, j, x, sest, w, gamma)
}

/// Machine underflow threshold for the element type's precision class.
pub fn safe_min<T: Scalar>() -> Result<T::Real> {
    T::safe_min()
}

/// Safe (small, big) magnitude range for the element type's precision
/// class, with small = safe-min / precision.
pub fn precision_range<T: Scalar>() -> Result<(T::Real, T::Real)> {
    T::precision_range()
}

#[cfg(all(test, feature = "lapack"))]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    /// Column-major complex matrix-vector product for residual checks.
    fn matvec(n: usize, a: &[Complex64], v: &[Complex64]) -> Vec<Complex64> {
        let mut out = vec![Complex64::default(); n];
        for j in 0..n {
            for i in 0..n {
                out[i] += a[j * n + i] * v[j];
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Factor + solve paths
    // ------------------------------------------------------------------

    #[test]
    fn test_cholesky_solve_3x3() {
        // A = L L^T with L = [[5,0,0],[3,3,0],[-1,1,3]]; x = [1,1,1].
        let a0 = [25.0, 15.0, -5.0, 15.0, 18.0, 0.0, -5.0, 0.0, 11.0];
        let mut a = a0;
        let info = potrf::<f64>(Uplo::Lower, 3, &mut a, 3).unwrap();
        assert_eq!(info, 0);

        let mut b = [35.0, 33.0, 6.0];
        let info = potrs::<f64>(Uplo::Lower, 3, 1, &a, &mut b).unwrap();
        assert_eq!(info, 0);
        for x in b {
            assert!((x - 1.0).abs() < 1e-10, "x = {x}");
        }
    }

    #[test]
    fn test_cholesky_solve_f32() {
        // A = [[4,2],[2,3]], b = [8,8] -> x = [1,2].
        let mut a = [4.0f32, 2.0, 2.0, 3.0];
        assert_eq!(potrf::<f32>(Uplo::Lower, 2, &mut a, 2).unwrap(), 0);
        let mut b = [8.0f32, 8.0];
        assert_eq!(potrs::<f32>(Uplo::Lower, 2, 1, &a, &mut b).unwrap(), 0);
        assert!((b[0] - 1.0).abs() < 1e-4, "x[0] = {}", b[0]);
        assert!((b[1] - 2.0).abs() < 1e-4, "x[1] = {}", b[1]);
    }

    #[test]
    fn test_hermitian_cholesky_solve() {
        // Diagonal Hermitian SPD matrix, complex right-hand side.
        let mut a = [
            Complex64::new(2.0, 0.0),
            Complex64::default(),
            Complex64::default(),
            Complex64::new(4.0, 0.0),
        ];
        assert_eq!(potrf::<Complex64>(Uplo::Upper, 2, &mut a, 2).unwrap(), 0);
        let mut b = [Complex64::new(2.0, 2.0), Complex64::new(4.0, -8.0)];
        assert_eq!(potrs::<Complex64>(Uplo::Upper, 2, 1, &a, &mut b).unwrap(), 0);
        assert!((b[0] - Complex64::new(1.0, 1.0)).norm() < 1e-12);
        assert!((b[1] - Complex64::new(1.0, -2.0)).norm() < 1e-12);
    }

    #[test]
    fn test_lu_factor_and_solve() {
        // A = [[2,1,1],[4,-6,0],[-2,7,2]]; x = [1,2,3].
        let mut a = [2.0, 4.0, -2.0, 1.0, -6.0, 7.0, 1.0, 0.0, 2.0];
        let mut pivots = [0i32; 3];
        assert_eq!(getrf::<f64>(3, 3, &mut a, 3, &mut pivots).unwrap(), 0);

        let mut b = [7.0, -8.0, 18.0];
        assert_eq!(getrs::<f64>(Transpose::None, 3, 1, &a, &pivots, &mut b).unwrap(), 0);
        assert_close(b[0], 1.0, 1e-12);
        assert_close(b[1], 2.0, 1e-12);
        assert_close(b[2], 3.0, 1e-12);
    }

    #[test]
    fn test_lu_complex_solve() {
        // A = diag(1+i, 2); x = [1, 1].
        let mut a = [
            Complex64::new(1.0, 1.0),
            Complex64::default(),
            Complex64::default(),
            Complex64::new(2.0, 0.0),
        ];
        let mut pivots = [0i32; 2];
        assert_eq!(getrf::<Complex64>(2, 2, &mut a, 2, &mut pivots).unwrap(), 0);
        let mut b = [Complex64::new(1.0, 1.0), Complex64::new(2.0, 0.0)];
        assert_eq!(getrs::<Complex64>(Transpose::None, 2, 1, &a, &pivots, &mut b).unwrap(), 0);
        assert!((b[0] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        assert!((b[1] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_lu_factorization_idempotent() {
        let a0 = [2.0, 4.0, -2.0, 1.0, -6.0, 7.0, 1.0, 0.0, 2.0];
        let mut a1 = a0;
        let mut a2 = a0;
        let mut p1 = [0i32; 3];
        let mut p2 = [0i32; 3];
        getrf::<f64>(3, 3, &mut a1, 3, &mut p1).unwrap();
        getrf::<f64>(3, 3, &mut a2, 3, &mut p2).unwrap();
        assert_eq!(a1, a2);
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_lu_reports_singular_pivot_as_data() {
        // Rank-1 matrix: the second pivot is exactly zero.
        let mut a = [1.0, 2.0, 2.0, 4.0];
        let mut pivots = [0i32; 2];
        let info = getrf::<f64>(2, 2, &mut a, 2, &mut pivots).unwrap();
        assert_eq!(info, 2);
    }

    #[test]
    fn test_symmetric_indefinite_factor_solve() {
        // A = [[2,1],[1,-3]] is indefinite; b = A * [1,1].
        let mut a = [2.0, 1.0, 1.0, -3.0];
        let mut pivots = [0i32; 2];
        assert_eq!(sytrf::<f64>(Uplo::Lower, 2, &mut a, 2, &mut pivots).unwrap(), 0);
        let mut b = [3.0, -2.0];
        assert_eq!(sytrs::<f64>(Uplo::Lower, 2, 1, &a, &pivots, &mut b).unwrap(), 0);
        assert_close(b[0], 1.0, 1e-12);
        assert_close(b[1], 1.0, 1e-12);
    }

    #[test]
    fn test_triangular_solve_with_scaling() {
        // L = [[2,0],[1,1]]; solve L x = 1.0 * [2,3] -> x = [1,2].
        let a = [2.0, 1.0, 0.0, 1.0];
        let mut b = [2.0, 3.0];
        trsm::<f64>(
            Side::Left, Uplo::Lower, Transpose::None, Diag::NonUnit, 2, 1, 1.0, &a, 2, &mut b, 2,
        )
        .unwrap();
        assert_close(b[0], 1.0, 1e-14);
        assert_close(b[1], 2.0, 1e-14);
    }

    // ------------------------------------------------------------------
    // Least squares
    // ------------------------------------------------------------------

    #[test]
    fn test_least_squares_overdetermined() {
        // A = [[1,0],[0,1],[0,0]], b = [1,2,3]: x = [1,2], rank 2.
        let mut a = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let mut b = [1.0, 2.0, 3.0];
        let mut s = [0.0f64; 2];
        let out = gelss::<f64>(3, 2, 1, &mut a, 3, &mut b, 3, &mut s, -1.0).unwrap();
        assert_eq!(out.rank, 2);
        assert_eq!(out.info, 0);
        assert_close(b[0], 1.0, 1e-12);
        assert_close(b[1], 2.0, 1e-12);
        assert_close(s[0], 1.0, 1e-12);
        assert_close(s[1], 1.0, 1e-12);
    }

    #[test]
    fn test_least_squares_complex() {
        let mut a = [
            Complex32::new(1.0, 0.0),
            Complex32::default(),
            Complex32::default(),
            Complex32::new(1.0, 0.0),
        ];
        let mut b = [Complex32::new(1.0, 1.0), Complex32::new(2.0, -1.0)];
        let mut s = [0.0f32; 2];
        let out = gelss::<Complex32>(2, 2, 1, &mut a, 2, &mut b, 2, &mut s, -1.0).unwrap();
        assert_eq!(out.rank, 2);
        assert!((b[0] - Complex32::new(1.0, 1.0)).norm() < 1e-5);
        assert!((b[1] - Complex32::new(2.0, -1.0)).norm() < 1e-5);
    }

    // ------------------------------------------------------------------
    // Symmetric/Hermitian eigen-decompositions
    // ------------------------------------------------------------------

    #[test]
    fn test_symmetric_eigen_full() {
        // A = [[2,1],[1,2]] -> eigenvalues 1, 3.
        let mut a = [2.0, 1.0, 1.0, 2.0];
        let mut values = [0.0f64; 2];
        assert_eq!(syev::<f64>(EigenJob::Vectors, Uplo::Upper, 2, &mut a, 2, &mut values).unwrap(), 0);
        assert_close(values[0], 1.0, 1e-12);
        assert_close(values[1], 3.0, 1e-12);
        // Columns of a are now orthonormal eigenvectors.
        let dot = a[0] * a[2] + a[1] * a[3];
        assert_close(dot, 0.0, 1e-12);
        assert_close(a[0] * a[0] + a[1] * a[1], 1.0, 1e-12);
    }

    #[test]
    fn test_hermitian_eigen_full() {
        // A = [[2, i],[-i, 2]] -> eigenvalues 1, 3.
        let mut a = [
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(2.0, 0.0),
        ];
        let mut values = [0.0f64; 2];
        assert_eq!(
            syev::<Complex64>(EigenJob::Vectors, Uplo::Upper, 2, &mut a, 2, &mut values).unwrap(),
            0
        );
        assert_close(values[0], 1.0, 1e-12);
        assert_close(values[1], 3.0, 1e-12);
    }

    #[test]
    fn test_selected_eigen_by_index_range() {
        // diag(1..5), indices 2..=4 -> exactly {2,3,4}.
        let mut a = [0.0f64; 25];
        for i in 0..5 {
            a[i * 5 + i] = (i + 1) as f64;
        }
        let mut values = [0.0f64; 5];
        let mut vectors = [0.0f64; 25];
        let mut ifail = [0i32; 5];
        let out = syevx::<f64>(
            EigenJob::Vectors, EigenRange::IndexRange, Uplo::Upper, 5, &mut a, 5, 0.0, 0.0, 2, 4,
            0.0, &mut values, &mut vectors, 5, &mut ifail,
        )
        .unwrap();
        assert_eq!(out.found, 3);
        assert_eq!(out.info, 0);
        assert_close(values[0], 2.0, 1e-12);
        assert_close(values[1], 3.0, 1e-12);
        assert_close(values[2], 4.0, 1e-12);
    }

    #[test]
    fn test_selected_eigen_by_value_interval() {
        // diag(1..5), values in (1.5, 4.5] -> {2,3,4}.
        let mut a = [0.0f32; 25];
        for i in 0..5 {
            a[i * 5 + i] = (i + 1) as f32;
        }
        let mut values = [0.0f32; 5];
        let mut vectors = [0.0f32; 25];
        let mut ifail = [0i32; 5];
        let out = syevx::<f32>(
            EigenJob::ValuesOnly, EigenRange::ValueInterval, Uplo::Upper, 5, &mut a, 5, 1.5, 4.5,
            0, 0, 0.0, &mut values, &mut vectors, 5, &mut ifail,
        )
        .unwrap();
        assert_eq!(out.found, 3);
        assert!((values[0] - 2.0).abs() < 1e-5);
        assert!((values[2] - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_selected_eigen_hermitian() {
        // Complex diagonal: indices 1..=2 of diag(1,2,3).
        let mut a = [Complex64::default(); 9];
        for i in 0..3 {
            a[i * 3 + i] = Complex64::new((i + 1) as f64, 0.0);
        }
        let mut values = [0.0f64; 3];
        let mut vectors = [Complex64::default(); 9];
        let mut ifail = [0i32; 3];
        let out = syevx::<Complex64>(
            EigenJob::Vectors, EigenRange::IndexRange, Uplo::Lower, 3, &mut a, 3, 0.0, 0.0, 1, 2,
            0.0, &mut values, &mut vectors, 3, &mut ifail,
        )
        .unwrap();
        assert_eq!(out.found, 2);
        assert_close(values[0], 1.0, 1e-12);
        assert_close(values[1], 2.0, 1e-12);
    }

    // ------------------------------------------------------------------
    // SVD
    // ------------------------------------------------------------------

    #[test]
    fn test_svd_real_descending_values() {
        // diag(3,4): singular values come back as [4,3].
        let mut a = [3.0, 0.0, 0.0, 4.0];
        let mut s = [0.0f64; 2];
        let mut u = [0.0f64; 4];
        let mut vt = [0.0f64; 4];
        assert_eq!(
            gesdd::<f64>(SvdJob::All, 2, 2, &mut a, 2, &mut s, &mut u, 2, &mut vt, 2).unwrap(),
            0
        );
        assert_close(s[0], 4.0, 1e-12);
        assert_close(s[1], 3.0, 1e-12);
    }

    #[test]
    fn test_svd_complex_no_vectors() {
        // 5x3 with diagonal 1,2,3: values-only job.
        let mut a = [Complex64::default(); 15];
        for i in 0..3 {
            a[i * 5 + i] = Complex64::new((i + 1) as f64, 0.0);
        }
        let mut s = [0.0f64; 3];
        let mut u = [Complex64::default(); 1];
        let mut vt = [Complex64::default(); 1];
        assert_eq!(
            gesdd::<Complex64>(SvdJob::None, 5, 3, &mut a, 5, &mut s, &mut u, 1, &mut vt, 1)
                .unwrap(),
            0
        );
        assert_close(s[0], 3.0, 1e-12);
        assert_close(s[1], 2.0, 1e-12);
        assert_close(s[2], 1.0, 1e-12);
    }

    #[test]
    fn test_svd_complex_full_vectors_matches_values_only() {
        // Same 5x3 matrix through the large-workspace branch.
        let mut a = [Complex64::default(); 15];
        for i in 0..3 {
            a[i * 5 + i] = Complex64::new((i + 1) as f64, 0.0);
        }
        let mut s = [0.0f64; 3];
        let mut u = [Complex64::default(); 25];
        let mut vt = [Complex64::default(); 9];
        assert_eq!(
            gesdd::<Complex64>(SvdJob::All, 5, 3, &mut a, 5, &mut s, &mut u, 5, &mut vt, 3)
                .unwrap(),
            0
        );
        assert_close(s[0], 3.0, 1e-12);
        assert_close(s[1], 2.0, 1e-12);
        assert_close(s[2], 1.0, 1e-12);
    }

    // ------------------------------------------------------------------
    // General eigen-decomposition and its normalizer
    // ------------------------------------------------------------------

    #[test]
    fn test_general_eigen_all_real_spectrum() {
        // diag(1,2,3): every eigenvalue real, every eigenvector exactly real.
        let mut a = [0.0f64; 9];
        a[0] = 1.0;
        a[4] = 2.0;
        a[8] = 3.0;
        let mut values = [Complex64::default(); 3];
        let mut vr = [Complex64::default(); 9];
        let info = geev::<f64>(
            EigenJob::ValuesOnly, EigenJob::Vectors, 3, &mut a, 3, &mut values, &mut [], 1,
            &mut vr, 3,
        )
        .unwrap();
        assert_eq!(info, 0);
        let mut reals: Vec<f64> = values.iter().map(|v| v.re).collect();
        reals.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert_close(reals[0], 1.0, 1e-12);
        assert_close(reals[1], 2.0, 1e-12);
        assert_close(reals[2], 3.0, 1e-12);
        for v in values {
            assert_eq!(v.im, 0.0);
        }
        for v in vr {
            assert_eq!(v.im, 0.0);
        }
    }

    #[test]
    fn test_general_eigen_conjugate_pair() {
        // Rotation generator [[0,-1],[1,0]]: eigenvalues +/- i, and the two
        // reconstructed eigenvectors are exact conjugates.
        let a0 = [0.0, 1.0, -1.0, 0.0];
        let mut a = a0;
        let mut values = [Complex64::default(); 2];
        let mut vr = [Complex64::default(); 4];
        let info = geev::<f64>(
            EigenJob::ValuesOnly, EigenJob::Vectors, 2, &mut a, 2, &mut values, &mut [], 1,
            &mut vr, 2,
        )
        .unwrap();
        assert_eq!(info, 0);
        assert_close(values[0].im.abs(), 1.0, 1e-12);
        assert_close(values[0].re, 0.0, 1e-12);
        assert_eq!(values[1], values[0].conj());
        for i in 0..2 {
            assert_eq!(vr[2 + i], vr[i].conj());
        }
        // Residual A v = lambda v for both members of the pair.
        let ac: Vec<Complex64> = a0.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        for j in 0..2 {
            let v = &vr[j * 2..j * 2 + 2];
            let av = matvec(2, &ac, v);
            for i in 0..2 {
                assert!((av[i] - values[j] * v[i]).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn test_general_eigen_mixed_spectrum() {
        // Block diagonal: rotation block (eigenvalues +/- i) plus the real
        // eigenvalue 2.
        let a0 = [0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 2.0];
        let mut a = a0;
        let mut values = [Complex64::default(); 3];
        let mut vr = [Complex64::default(); 9];
        let info = geev::<f64>(
            EigenJob::ValuesOnly, EigenJob::Vectors, 3, &mut a, 3, &mut values, &mut [], 1,
            &mut vr, 3,
        )
        .unwrap();
        assert_eq!(info, 0);

        let ac: Vec<Complex64> = a0.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        let mut seen_real = 0;
        let mut seen_pairs = 0;
        let mut j = 0;
        while j < 3 {
            if values[j].im.abs() < 1e-8 {
                assert_close(values[j].re, 2.0, 1e-12);
                for i in 0..3 {
                    assert_eq!(vr[j * 3 + i].im, 0.0);
                }
                seen_real += 1;
                j += 1;
            } else {
                assert_eq!(values[j + 1], values[j].conj());
                for i in 0..3 {
                    assert_eq!(vr[(j + 1) * 3 + i], vr[j * 3 + i].conj());
                }
                seen_pairs += 1;
                j += 2;
            }
        }
        assert_eq!(seen_real, 1);
        assert_eq!(seen_pairs, 1);

        // Every eigenpair satisfies A v = lambda v.
        for j in 0..3 {
            let v = &vr[j * 3..j * 3 + 3];
            let av = matvec(3, &ac, v);
            for i in 0..3 {
                assert!((av[i] - values[j] * v[i]).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn test_general_eigen_complex_storage_direct() {
        // Complex kernels return complex storage natively; diag(i, 2).
        let a0 = [
            Complex64::new(0.0, 1.0),
            Complex64::default(),
            Complex64::default(),
            Complex64::new(2.0, 0.0),
        ];
        let mut a = a0;
        let mut values = [Complex64::default(); 2];
        let mut vr = [Complex64::default(); 4];
        let info = geev::<Complex64>(
            EigenJob::ValuesOnly, EigenJob::Vectors, 2, &mut a, 2, &mut values, &mut [], 1,
            &mut vr, 2,
        )
        .unwrap();
        assert_eq!(info, 0);
        for j in 0..2 {
            let v = &vr[j * 2..j * 2 + 2];
            let av = matvec(2, &a0, v);
            for i in 0..2 {
                assert!((av[i] - values[j] * v[i]).norm() < 1e-12);
            }
        }
    }

    // ------------------------------------------------------------------
    // QR / RZ factorizations and orthogonal applications
    // ------------------------------------------------------------------

    #[test]
    fn test_pivoted_qr_and_q_application_roundtrip() {
        let mut a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 3x2
        let mut pivots = [0i32; 2];
        let mut tau = [0.0f64; 2];
        assert_eq!(geqp3::<f64>(3, 2, &mut a, 3, &mut pivots, &mut tau).unwrap(), 0);
        let mut sorted = pivots;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2]);

        // Q^H Q = I: applying Q^T then Q returns the original vector.
        let c0 = [1.0, 1.0, 1.0];
        let mut c = c0;
        assert_eq!(
            ormqr::<f64>(Side::Left, Transpose::Trans, 3, 1, 2, &a, 3, &tau, &mut c, 3).unwrap(),
            0
        );
        assert_eq!(
            ormqr::<f64>(Side::Left, Transpose::None, 3, 1, 2, &a, 3, &tau, &mut c, 3).unwrap(),
            0
        );
        for i in 0..3 {
            assert_close(c[i], c0[i], 1e-12);
        }
    }

    #[test]
    fn test_rz_factorization_and_z_application_roundtrip() {
        // 2x3 upper trapezoidal [R1 R2].
        let mut a = [3.0, 0.0, 1.0, 2.0, 1.0, 1.0];
        let mut tau = [0.0f64; 2];
        assert_eq!(tzrzf::<f64>(2, 3, &mut a, 2, &mut tau).unwrap(), 0);

        let c0 = [1.0, 2.0, 3.0];
        let mut c = c0;
        assert_eq!(
            ormrz::<f64>(Side::Left, Transpose::None, 3, 1, 2, 1, &a, 2, &tau, &mut c, 3).unwrap(),
            0
        );
        assert_eq!(
            ormrz::<f64>(Side::Left, Transpose::Trans, 3, 1, 2, 1, &a, 2, &tau, &mut c, 3).unwrap(),
            0
        );
        for i in 0..3 {
            assert_close(c[i], c0[i], 1e-12);
        }
    }

    // ------------------------------------------------------------------
    // Norms, scaling, copies, condition estimation, machine queries
    // ------------------------------------------------------------------

    #[test]
    fn test_matrix_norms() {
        // A = [[1,-2],[3,4]].
        let a = [1.0, 3.0, -2.0, 4.0];
        assert_close(lange::<f64>(MatrixNorm::One, 2, 2, &a, 2).unwrap(), 6.0, 1e-14);
        assert_close(lange::<f64>(MatrixNorm::Inf, 2, 2, &a, 2).unwrap(), 7.0, 1e-14);
        assert_close(lange::<f64>(MatrixNorm::MaxAbs, 2, 2, &a, 2).unwrap(), 4.0, 1e-14);
        assert_close(
            lange::<f64>(MatrixNorm::Frobenius, 2, 2, &a, 2).unwrap(),
            30.0f64.sqrt(),
            1e-12,
        );
    }

    #[test]
    fn test_complex_matrix_norm() {
        // Single entry 3+4i: max-abs is 5.
        let a = [Complex64::new(3.0, 4.0)];
        assert_close(lange::<Complex64>(MatrixNorm::MaxAbs, 1, 1, &a, 1).unwrap(), 5.0, 1e-12);
    }

    #[test]
    fn test_safe_scaling() {
        let mut a = [1.0, 1.0, 1.0, 1.0];
        lascl::<f64>(ScaleShape::General, 0, 0, 1.0, 3.0, 2, 2, &mut a, 2).unwrap();
        for x in a {
            assert_close(x, 3.0, 1e-14);
        }
    }

    #[test]
    fn test_strided_copy() {
        let x = [1.0, 9.0, 2.0, 9.0, 3.0];
        let mut y = [0.0f64; 3];
        copy::<f64>(3, &x, 2, &mut y, 1).unwrap();
        assert_eq!(y, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_condition_estimate_update() {
        // Appending an orthogonal unit column to the identity keeps the
        // largest singular value estimate at 1.
        let out = laic1::<f64>(1, 1, &[1.0], 1.0, &[0.0], 1.0).unwrap();
        assert_close(out.estimate, 1.0, 1e-12);
        assert_close(out.sine * out.sine + out.cosine * out.cosine, 1.0, 1e-12);
    }

    #[test]
    fn test_machine_queries() {
        let sm = safe_min::<f64>().unwrap();
        assert!(sm > 0.0 && sm < 1e-300);
        let (small, big) = precision_range::<f64>().unwrap();
        assert!(small > 0.0 && small < 1e-290);
        assert_close(small * big, 1.0, 1e-10);

        let sm32 = safe_min::<f32>().unwrap();
        assert!(sm32 > 0.0 && sm32 < 1e-37);
        // Complex kinds answer for their precision class.
        assert_eq!(safe_min::<Complex64>().unwrap(), sm);
        assert_eq!(safe_min::<Complex32>().unwrap(), sm32);
    }

    // ------------------------------------------------------------------
    // Error classification
    // ------------------------------------------------------------------

    #[test]
    fn test_illegal_leading_dimension_is_classified() {
        // dpotrf's lda is argument 4.
        let mut a = [1.0f64, 0.0, 0.0, 1.0];
        let err = potrf::<f64>(Uplo::Lower, 2, &mut a, 0).unwrap_err();
        assert_eq!(
            err,
            crate::Error::IllegalArgument { routine: "dpotrf", index: 4 }
        );
    }

    #[test]
    fn test_illegal_argument_complex_least_squares() {
        // zgelss's lda is argument 5.
        let mut a = [Complex64::default(); 4];
        let mut b = [Complex64::default(); 2];
        let mut s = [0.0f64; 2];
        let err = gelss::<Complex64>(2, 2, 1, &mut a, 0, &mut b, 2, &mut s, -1.0).unwrap_err();
        assert_eq!(
            err,
            crate::Error::IllegalArgument { routine: "zgelss", index: 5 }
        );
    }

    #[test]
    fn test_illegal_dimension_getrf() {
        let mut a = [0.0f64; 4];
        let mut pivots = [0i32; 2];
        let err = getrf::<f64>(-1, 2, &mut a, 2, &mut pivots).unwrap_err();
        assert_eq!(
            err,
            crate::Error::IllegalArgument { routine: "dgetrf", index: 1 }
        );
    }
}

#[cfg(all(test, not(feature = "lapack")))]
mod unavailable_tests {
    use super::*;
    use crate::Error;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_every_precision_reports_its_own_routine() {
        let mut pivots = [0i32; 2];

        let mut a = [0.0f64; 4];
        assert_eq!(
            getrf::<f64>(2, 2, &mut a, 2, &mut pivots).unwrap_err(),
            Error::BackendUnavailable { routine: "dgetrf" }
        );

        let mut a = [0.0f32; 4];
        assert_eq!(
            getrf::<f32>(2, 2, &mut a, 2, &mut pivots).unwrap_err(),
            Error::BackendUnavailable { routine: "sgetrf" }
        );

        let mut a = [Complex64::default(); 4];
        assert_eq!(
            getrf::<Complex64>(2, 2, &mut a, 2, &mut pivots).unwrap_err(),
            Error::BackendUnavailable { routine: "zgetrf" }
        );

        let mut a = [Complex32::default(); 4];
        assert_eq!(
            getrf::<Complex32>(2, 2, &mut a, 2, &mut pivots).unwrap_err(),
            Error::BackendUnavailable { routine: "cgetrf" }
        );
    }

    #[test]
    fn test_unavailable_covers_queries_and_passthroughs() {
        assert_eq!(
            safe_min::<f64>().unwrap_err(),
            Error::BackendUnavailable { routine: "dlamch" }
        );
        let a = [0.0f64; 1];
        assert_eq!(
            lange::<f64>(MatrixNorm::One, 1, 1, &a, 1).unwrap_err(),
            Error::BackendUnavailable { routine: "dlange" }
        );
        let mut values = [Complex64::default(); 1];
        let mut a = [Complex64::default(); 1];
        assert_eq!(
            geev::<Complex64>(
                EigenJob::ValuesOnly, EigenJob::ValuesOnly, 1, &mut a, 1, &mut values, &mut [], 1,
                &mut [], 1,
            )
            .unwrap_err(),
            Error::BackendUnavailable { routine: "zgeev" }
        );
    }
}
