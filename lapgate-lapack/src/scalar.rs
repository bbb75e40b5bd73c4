//! The element-type trait table.
//!
//! [`Scalar`] maps each supported element type to its associated real-part
//! type and to the native kernel entry points behind every operation. The
//! trait is sealed over exactly four types — `f32`, `f64`, `Complex32`,
//! `Complex64` — and has no default method bodies, so an unsupported
//! (type, operation) pair cannot compile: there is no generic numeric
//! fallback to reach at runtime.
//!
//! Method signatures follow the native argument order (dimensions first,
//! buffers with leading dimensions, selectors as enums); per-precision
//! quirks (auxiliary real workspaces, packed eigenvector storage) live in
//! the four implementation blocks in `real.rs` and `complex.rs`.

use num_complex::Complex;
use num_traits::Float;

use lapgate_core::{
    Diag, EigenJob, EigenRange, MatrixNorm, Result, ScaleShape, Side, SvdJob, Transpose, Uplo,
};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for num_complex::Complex32 {}
    impl Sealed for num_complex::Complex64 {}
}

/// Outcome of a minimum-norm least-squares solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeastSquares {
    /// Effective numerical rank of the coefficient matrix.
    pub rank: i32,
    /// Raw status: 0, or the number of unconverged superdiagonals.
    pub info: i32,
}

/// Outcome of a ranged symmetric/Hermitian eigen-extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedEigen {
    /// Number of eigenvalues found in the requested range.
    pub found: i32,
    /// Raw status: 0, or the count of eigenvectors that failed to converge
    /// (their indices are in `ifail`).
    pub info: i32,
}

/// One step of incremental condition estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionUpdate<T: Scalar> {
    /// Updated singular value estimate.
    pub estimate: T::Real,
    /// Sine of the update rotation.
    pub sine: T,
    /// Cosine of the update rotation.
    pub cosine: T,
}

/// An element type the dispatch layer is specialized for.
pub trait Scalar:
    Copy + Default + PartialEq + Send + Sync + Sized + sealed::Sealed + 'static
{
    /// The real-part type: `Self` for the real kinds, `f32`/`f64` for the
    /// complex kinds.
    type Real: Float + Default + Send + Sync + std::fmt::Debug + 'static;

    /// Interpret the first slot written by a workspace-size query. Complex
    /// kernels report the length in the real part.
    fn work_len(first: Self) -> usize;

    /// Minimum-norm least-squares solve (xGELSS). The solution overwrites
    /// the leading n x nrhs block of `b`; singular values land in `s`
    /// (length min(m,n), descending).
    fn gelss(
        m: i32,
        n: i32,
        nrhs: i32,
        a: &mut [Self],
        lda: i32,
        b: &mut [Self],
        ldb: i32,
        s: &mut [Self::Real],
        rcond: Self::Real,
    ) -> Result<LeastSquares>;

    /// Solve from Cholesky factors (xPOTRS); leading dimensions are n.
    fn potrs(uplo: Uplo, n: i32, nrhs: i32, factors: &[Self], b: &mut [Self]) -> Result<i32>;

    /// Solve from symmetric-indefinite factors (xSYTRS); leading dimensions
    /// are n.
    fn sytrs(
        uplo: Uplo,
        n: i32,
        nrhs: i32,
        factors: &[Self],
        pivots: &[i32],
        b: &mut [Self],
    ) -> Result<i32>;

    /// Solve from LU factors (xGETRS); leading dimensions are n.
    fn getrs(
        trans: Transpose,
        n: i32,
        nrhs: i32,
        factors: &[Self],
        pivots: &[i32],
        b: &mut [Self],
    ) -> Result<i32>;

    /// Selected eigenvalues/vectors of a symmetric/Hermitian matrix
    /// (xSYEVX / xHEEVX), by value interval or index range.
    fn syevx(
        jobz: EigenJob,
        range: EigenRange,
        uplo: Uplo,
        n: i32,
        a: &mut [Self],
        lda: i32,
        vl: Self::Real,
        vu: Self::Real,
        il: i32,
        iu: i32,
        abstol: Self::Real,
        values: &mut [Self::Real],
        vectors: &mut [Self],
        ldv: i32,
        ifail: &mut [i32],
    ) -> Result<SelectedEigen>;

    /// Full symmetric/Hermitian eigen-decomposition (xSYEV / xHEEV).
    /// Eigenvalues ascend in `values`; eigenvectors overwrite `a` when
    /// requested.
    fn syev(
        jobz: EigenJob,
        uplo: Uplo,
        n: i32,
        a: &mut [Self],
        lda: i32,
        values: &mut [Self::Real],
    ) -> Result<i32>;

    /// Divide-and-conquer SVD (xGESDD). Singular values descend in `s`.
    fn gesdd(
        job: SvdJob,
        m: i32,
        n: i32,
        a: &mut [Self],
        lda: i32,
        s: &mut [Self::Real],
        u: &mut [Self],
        ldu: i32,
        vt: &mut [Self],
        ldvt: i32,
    ) -> Result<i32>;

    /// General eigen-decomposition (xGEEV). Eigenvalues and eigenvectors
    /// are always delivered in complex form; for the real element types the
    /// packed conjugate-pair storage of the native kernel is unpacked here.
    fn geev(
        jobvl: EigenJob,
        jobvr: EigenJob,
        n: i32,
        a: &mut [Self],
        lda: i32,
        values: &mut [Complex<Self::Real>],
        vl: &mut [Complex<Self::Real>],
        ldvl: i32,
        vr: &mut [Complex<Self::Real>],
        ldvr: i32,
    ) -> Result<i32>;

    /// LU factorization with partial pivoting (xGETRF).
    fn getrf(m: i32, n: i32, a: &mut [Self], lda: i32, pivots: &mut [i32]) -> Result<i32>;

    /// Cholesky factorization (xPOTRF).
    fn potrf(uplo: Uplo, n: i32, a: &mut [Self], lda: i32) -> Result<i32>;

    /// Symmetric-indefinite (Bunch-Kaufman) factorization (xSYTRF).
    fn sytrf(uplo: Uplo, n: i32, a: &mut [Self], lda: i32, pivots: &mut [i32]) -> Result<i32>;

    /// Rank-revealing QR with column pivoting (xGEQP3).
    fn geqp3(m: i32, n: i32, a: &mut [Self], lda: i32, pivots: &mut [i32], tau: &mut [Self])
        -> Result<i32>;

    /// Complete orthogonal (RZ) factorization of an upper trapezoidal
    /// matrix (xTZRZF).
    fn tzrzf(m: i32, n: i32, a: &mut [Self], lda: i32, tau: &mut [Self]) -> Result<i32>;

    /// Apply Q from a QR factorization to a matrix (xORMQR / xUNMQR).
    fn ormqr(
        side: Side,
        trans: Transpose,
        m: i32,
        n: i32,
        k: i32,
        a: &[Self],
        lda: i32,
        tau: &[Self],
        c: &mut [Self],
        ldc: i32,
    ) -> Result<i32>;

    /// Apply Z from an RZ factorization to a matrix (xORMRZ / xUNMRZ).
    fn ormrz(
        side: Side,
        trans: Transpose,
        m: i32,
        n: i32,
        k: i32,
        l: i32,
        a: &[Self],
        lda: i32,
        tau: &[Self],
        c: &mut [Self],
        ldc: i32,
    ) -> Result<i32>;

    /// Triangular solve with scaling (BLAS xTRSM): op(A) X = alpha B.
    fn trsm(
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: i32,
        n: i32,
        alpha: Self,
        a: &[Self],
        lda: i32,
        b: &mut [Self],
        ldb: i32,
    ) -> Result<()>;

    /// Matrix norm (xLANGE).
    fn lange(norm: MatrixNorm, m: i32, n: i32, a: &[Self], lda: i32) -> Result<Self::Real>;

    /// Safe in-place scaling by cto/cfrom (xLASCL).
    fn lascl(
        shape: ScaleShape,
        kl: i32,
        ku: i32,
        cfrom: Self::Real,
        cto: Self::Real,
        m: i32,
        n: i32,
        a: &mut [Self],
        lda: i32,
    ) -> Result<()>;

    /// Strided vector copy (BLAS xCOPY).
    fn copy(n: i32, x: &[Self], incx: i32, y: &mut [Self], incy: i32) -> Result<()>;

    /// Incremental condition estimation step (xLAIC1). `job` is 1 for the
    /// largest-singular-value estimate, 2 for the smallest.
    fn laic1(
        job: i32,
        j: i32,
        x: &[Self],
        sest: Self::Real,
        w: &[Self],
        gamma: Self,
    ) -> Result<ConditionUpdate<Self>>;

    /// Machine underflow threshold (xLAMCH 'S').
    fn safe_min() -> Result<Self::Real>;

    /// Safe range (small, big) with small = safe-min / precision, as the
    /// native library defines it.
    fn precision_range() -> Result<(Self::Real, Self::Real)>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_exactly_four_element_types() {
        // The trait is sealed; these four are the whole table.
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<Complex32>();
        assert_scalar::<Complex64>();
    }

    #[test]
    fn test_work_len_truncates_and_takes_real_part() {
        assert_eq!(f64::work_len(2048.0), 2048);
        assert_eq!(f32::work_len(66.9), 66);
        assert_eq!(Complex64::work_len(Complex::new(132.0, -7.0)), 132);
        assert_eq!(Complex32::work_len(Complex::new(15.0, 3.0)), 15);
    }
}
