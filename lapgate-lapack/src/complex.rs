//! `Scalar` implementations for the complex element types.
//!
//! The complex kernels differ from the real ones in two ways: workspace
//! queries report the required length in the real part of the first slot,
//! and most operations need an auxiliary real workspace with a fixed,
//! per-operation size formula (these are not part of the query protocol).
//! Eigenvalues and eigenvectors come back in complex storage natively, so
//! the general eigen-decomposition needs no conjugate-pair unpacking here.

use num_complex::{Complex, Complex32, Complex64};

use lapgate_core::backend;
use lapgate_core::{
    Diag, EigenJob, EigenRange, MatrixNorm, Result, ScaleShape, Side, SvdJob, Transpose, Uplo,
};

#[cfg(feature = "lapack")]
use lapgate_core::error::classify;
#[cfg(feature = "lapack")]
use lapgate_core::{ffi, Workspace, WORK_QUERY};

use crate::scalar::{ConditionUpdate, LeastSquares, Scalar, SelectedEigen};

/// Real workspace length for the complex divide-and-conquer SVD: 5*mn when
/// no vectors are requested, 5*mn^2 + 7*mn for every vector-producing job
/// mode ('A', 'S', 'O').
#[cfg_attr(not(feature = "lapack"), allow(dead_code))]
pub(crate) fn gesdd_rwork_len(job: SvdJob, m: i32, n: i32) -> usize {
    let mn = m.min(n).max(0) as usize;
    if job == SvdJob::None {
        5 * mn
    } else {
        5 * mn * mn + 7 * mn
    }
}

/// Real workspace length for the full Hermitian eigen-decomposition.
#[cfg_attr(not(feature = "lapack"), allow(dead_code))]
pub(crate) fn heev_rwork_len(n: i32) -> usize {
    (3 * n.max(0) as usize).saturating_sub(2).max(1)
}

#[cfg_attr(not(feature = "lapack"), allow(unused_variables))]
impl Scalar for Complex64 {
    type Real = f64;

    #[inline]
    fn work_len(first: Complex64) -> usize {
        first.re as usize
    }

    fn gelss(
        m: i32,
        n: i32,
        nrhs: i32,
        a: &mut [Complex64],
        lda: i32,
        b: &mut [Complex64],
        ldb: i32,
        s: &mut [f64],
        rcond: f64,
    ) -> Result<LeastSquares> {
        backend::ensure("zgelss")?;
        #[cfg(feature = "lapack")]
        {
            let mn = m.min(n).max(0) as usize;
            let mut rwork = Workspace::<f64>::new(5 * mn);
            let mut rank = 0;
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zgelss_(
                    &m, &n, &nrhs, a.as_mut_ptr(), &lda, b.as_mut_ptr(), &ldb, s.as_mut_ptr(),
                    &rcond, &mut rank, wsize.as_mut_ptr(), &WORK_QUERY, rwork.as_mut_ptr(),
                    &mut info,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zgelss_(
                    &m, &n, &nrhs, a.as_mut_ptr(), &lda, b.as_mut_ptr(), &ldb, s.as_mut_ptr(),
                    &rcond, &mut rank, work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), &mut info,
                );
            }
            let info = classify("zgelss", info)?;
            return Ok(LeastSquares { rank, info });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn potrs(uplo: Uplo, n: i32, nrhs: i32, factors: &[Complex64], b: &mut [Complex64]) -> Result<i32> {
        backend::ensure("zpotrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::zpotrs_(
                    &uplo.as_char(), &n, &nrhs, factors.as_ptr(), &n, b.as_mut_ptr(), &n,
                    &mut info, 1,
                );
            }
            return classify("zpotrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn sytrs(
        uplo: Uplo,
        n: i32,
        nrhs: i32,
        factors: &[Complex64],
        pivots: &[i32],
        b: &mut [Complex64],
    ) -> Result<i32> {
        backend::ensure("zsytrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::zsytrs_(
                    &uplo.as_char(), &n, &nrhs, factors.as_ptr(), &n, pivots.as_ptr(),
                    b.as_mut_ptr(), &n, &mut info, 1,
                );
            }
            return classify("zsytrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn getrs(
        trans: Transpose,
        n: i32,
        nrhs: i32,
        factors: &[Complex64],
        pivots: &[i32],
        b: &mut [Complex64],
    ) -> Result<i32> {
        backend::ensure("zgetrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::zgetrs_(
                    &trans.as_char(), &n, &nrhs, factors.as_ptr(), &n, pivots.as_ptr(),
                    b.as_mut_ptr(), &n, &mut info, 1,
                );
            }
            return classify("zgetrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn syevx(
        jobz: EigenJob,
        range: EigenRange,
        uplo: Uplo,
        n: i32,
        a: &mut [Complex64],
        lda: i32,
        vl: f64,
        vu: f64,
        il: i32,
        iu: i32,
        abstol: f64,
        values: &mut [f64],
        vectors: &mut [Complex64],
        ldv: i32,
        ifail: &mut [i32],
    ) -> Result<SelectedEigen> {
        backend::ensure("zheevx")?;
        #[cfg(feature = "lapack")]
        {
            let nn = n.max(0) as usize;
            let mut iwork = Workspace::<i32>::new(5 * nn);
            let mut rwork = Workspace::<f64>::new(7 * nn);
            let mut found = 0;
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zheevx_(
                    &jobz.as_char(), &range.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    &vl, &vu, &il, &iu, &abstol, &mut found, values.as_mut_ptr(),
                    vectors.as_mut_ptr(), &ldv, wsize.as_mut_ptr(), &WORK_QUERY,
                    rwork.as_mut_ptr(), iwork.as_mut_ptr(), ifail.as_mut_ptr(), &mut info, 1, 1, 1,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zheevx_(
                    &jobz.as_char(), &range.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    &vl, &vu, &il, &iu, &abstol, &mut found, values.as_mut_ptr(),
                    vectors.as_mut_ptr(), &ldv, work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(),
                    iwork.as_mut_ptr(), ifail.as_mut_ptr(), &mut info, 1, 1, 1,
                );
            }
            let info = classify("zheevx", info)?;
            return Ok(SelectedEigen { found, info });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn syev(
        jobz: EigenJob,
        uplo: Uplo,
        n: i32,
        a: &mut [Complex64],
        lda: i32,
        values: &mut [f64],
    ) -> Result<i32> {
        backend::ensure("zheev")?;
        #[cfg(feature = "lapack")]
        {
            let mut rwork = Workspace::<f64>::new(heev_rwork_len(n));
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zheev_(
                    &jobz.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), wsize.as_mut_ptr(), &WORK_QUERY, rwork.as_mut_ptr(),
                    &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zheev_(
                    &jobz.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(),
                    &mut info, 1, 1,
                );
            }
            return classify("zheev", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn gesdd(
        job: SvdJob,
        m: i32,
        n: i32,
        a: &mut [Complex64],
        lda: i32,
        s: &mut [f64],
        u: &mut [Complex64],
        ldu: i32,
        vt: &mut [Complex64],
        ldvt: i32,
    ) -> Result<i32> {
        backend::ensure("zgesdd")?;
        #[cfg(feature = "lapack")]
        {
            let mn = m.min(n).max(0) as usize;
            let mut rwork = Workspace::<f64>::new(gesdd_rwork_len(job, m, n));
            let mut iwork = Workspace::<i32>::new(8 * mn);
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zgesdd_(
                    &job.as_char(), &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                    &ldu, vt.as_mut_ptr(), &ldvt, wsize.as_mut_ptr(), &WORK_QUERY,
                    rwork.as_mut_ptr(), iwork.as_mut_ptr(), &mut info, 1,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zgesdd_(
                    &job.as_char(), &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                    &ldu, vt.as_mut_ptr(), &ldvt, work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(),
                    iwork.as_mut_ptr(), &mut info, 1,
                );
            }
            return classify("zgesdd", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn geev(
        jobvl: EigenJob,
        jobvr: EigenJob,
        n: i32,
        a: &mut [Complex64],
        lda: i32,
        values: &mut [Complex<f64>],
        vl: &mut [Complex<f64>],
        ldvl: i32,
        vr: &mut [Complex<f64>],
        ldvr: i32,
    ) -> Result<i32> {
        backend::ensure("zgeev")?;
        #[cfg(feature = "lapack")]
        {
            // Complex storage comes back directly; no conjugate-pair
            // reconstruction on this path.
            let mut rwork = Workspace::<f64>::new(2 * n.max(0) as usize);
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zgeev_(
                    &jobvl.as_char(), &jobvr.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), vl.as_mut_ptr(), &ldvl, vr.as_mut_ptr(), &ldvr,
                    wsize.as_mut_ptr(), &WORK_QUERY, rwork.as_mut_ptr(), &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zgeev_(
                    &jobvl.as_char(), &jobvr.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), vl.as_mut_ptr(), &ldvl, vr.as_mut_ptr(), &ldvr,
                    work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), &mut info, 1, 1,
                );
            }
            return classify("zgeev", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn getrf(m: i32, n: i32, a: &mut [Complex64], lda: i32, pivots: &mut [i32]) -> Result<i32> {
        backend::ensure("zgetrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::zgetrf_(&m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), &mut info);
            }
            return classify("zgetrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn potrf(uplo: Uplo, n: i32, a: &mut [Complex64], lda: i32) -> Result<i32> {
        backend::ensure("zpotrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::zpotrf_(&uplo.as_char(), &n, a.as_mut_ptr(), &lda, &mut info, 1);
            }
            return classify("zpotrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn sytrf(uplo: Uplo, n: i32, a: &mut [Complex64], lda: i32, pivots: &mut [i32]) -> Result<i32> {
        backend::ensure("zsytrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zsytrf_(
                    &uplo.as_char(), &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(),
                    wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zsytrf_(
                    &uplo.as_char(), &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(),
                    work.as_mut_ptr(), &lwork, &mut info, 1,
                );
            }
            return classify("zsytrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn geqp3(
        m: i32,
        n: i32,
        a: &mut [Complex64],
        lda: i32,
        pivots: &mut [i32],
        tau: &mut [Complex64],
    ) -> Result<i32> {
        backend::ensure("zgeqp3")?;
        #[cfg(feature = "lapack")]
        {
            let mut rwork = Workspace::<f64>::new(2 * n.max(0) as usize);
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zgeqp3_(
                    &m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), tau.as_mut_ptr(),
                    wsize.as_mut_ptr(), &WORK_QUERY, rwork.as_mut_ptr(), &mut info,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zgeqp3_(
                    &m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), tau.as_mut_ptr(),
                    work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), &mut info,
                );
            }
            return classify("zgeqp3", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn tzrzf(m: i32, n: i32, a: &mut [Complex64], lda: i32, tau: &mut [Complex64]) -> Result<i32> {
        backend::ensure("ztzrzf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::ztzrzf_(
                    &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), wsize.as_mut_ptr(),
                    &WORK_QUERY, &mut info,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::ztzrzf_(
                    &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), work.as_mut_ptr(), &lwork,
                    &mut info,
                );
            }
            return classify("ztzrzf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn ormqr(
        side: Side,
        trans: Transpose,
        m: i32,
        n: i32,
        k: i32,
        a: &[Complex64],
        lda: i32,
        tau: &[Complex64],
        c: &mut [Complex64],
        ldc: i32,
    ) -> Result<i32> {
        backend::ensure("zunmqr")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zunmqr_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                    c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zunmqr_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                    c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("zunmqr", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn ormrz(
        side: Side,
        trans: Transpose,
        m: i32,
        n: i32,
        k: i32,
        l: i32,
        a: &[Complex64],
        lda: i32,
        tau: &[Complex64],
        c: &mut [Complex64],
        ldc: i32,
    ) -> Result<i32> {
        backend::ensure("zunmrz")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [Complex64::default()];
            unsafe {
                ffi::zunmrz_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, &l, a.as_ptr(), &lda,
                    tau.as_ptr(), c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &WORK_QUERY,
                    &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<Complex64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::zunmrz_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, &l, a.as_ptr(), &lda,
                    tau.as_ptr(), c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("zunmrz", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn trsm(
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: i32,
        n: i32,
        alpha: Complex64,
        a: &[Complex64],
        lda: i32,
        b: &mut [Complex64],
        ldb: i32,
    ) -> Result<()> {
        backend::ensure("ztrsm")?;
        #[cfg(feature = "lapack")]
        {
            unsafe {
                ffi::ztrsm_(
                    &side.as_char(), &uplo.as_char(), &trans.as_char(), &diag.as_char(), &m, &n,
                    &alpha, a.as_ptr(), &lda, b.as_mut_ptr(), &ldb, 1, 1, 1, 1,
                );
            }
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn lange(norm: MatrixNorm, m: i32, n: i32, a: &[Complex64], lda: i32) -> Result<f64> {
        backend::ensure("zlange")?;
        #[cfg(feature = "lapack")]
        {
            let mut work = Workspace::<f64>::new(m.max(0) as usize);
            let value = unsafe {
                ffi::zlange_(&norm.as_char(), &m, &n, a.as_ptr(), &lda, work.as_mut_ptr(), 1)
            };
            return Ok(value);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn lascl(
        shape: ScaleShape,
        kl: i32,
        ku: i32,
        cfrom: f64,
        cto: f64,
        m: i32,
        n: i32,
        a: &mut [Complex64],
        lda: i32,
    ) -> Result<()> {
        backend::ensure("zlascl")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::zlascl_(
                    &shape.as_char(), &kl, &ku, &cfrom, &cto, &m, &n, a.as_mut_ptr(), &lda,
                    &mut info, 1,
                );
            }
            classify("zlascl", info)?;
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn copy(n: i32, x: &[Complex64], incx: i32, y: &mut [Complex64], incy: i32) -> Result<()> {
        backend::ensure("zcopy")?;
        #[cfg(feature = "lapack")]
        {
            unsafe {
                ffi::zcopy_(&n, x.as_ptr(), &incx, y.as_mut_ptr(), &incy);
            }
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn laic1(
        job: i32,
        j: i32,
        x: &[Complex64],
        sest: f64,
        w: &[Complex64],
        gamma: Complex64,
    ) -> Result<ConditionUpdate<Complex64>> {
        backend::ensure("zlaic1")?;
        #[cfg(feature = "lapack")]
        {
            let mut estimate = 0.0;
            let mut sine = Complex64::default();
            let mut cosine = Complex64::default();
            unsafe {
                ffi::zlaic1_(
                    &job, &j, x.as_ptr(), &sest, w.as_ptr(), &gamma, &mut estimate, &mut sine,
                    &mut cosine,
                );
            }
            return Ok(ConditionUpdate { estimate, sine, cosine });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn safe_min() -> Result<f64> {
        <f64 as Scalar>::safe_min()
    }

    fn precision_range() -> Result<(f64, f64)> {
        <f64 as Scalar>::precision_range()
    }
}

#[cfg_attr(not(feature = "lapack"), allow(unused_variables))]
impl Scalar for Complex32 {
    type Real = f32;

    #[inline]
    fn work_len(first: Complex32) -> usize {
        first.re as usize
    }

    fn gelss(
        m: i32,
        n: i32,
        nrhs: i32,
        a: &mut [Complex32],
        lda: i32,
        b: &mut [Complex32],
        ldb: i32,
        s: &mut [f32],
        rcond: f32,
    ) -> Result<LeastSquares> {
        backend::ensure("cgelss")?;
        #[cfg(feature = "lapack")]
        {
            let mn = m.min(n).max(0) as usize;
            let mut rwork = Workspace::<f32>::new(5 * mn);
            let mut rank = 0;
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::cgelss_(
                    &m, &n, &nrhs, a.as_mut_ptr(), &lda, b.as_mut_ptr(), &ldb, s.as_mut_ptr(),
                    &rcond, &mut rank, wsize.as_mut_ptr(), &WORK_QUERY, rwork.as_mut_ptr(),
                    &mut info,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::cgelss_(
                    &m, &n, &nrhs, a.as_mut_ptr(), &lda, b.as_mut_ptr(), &ldb, s.as_mut_ptr(),
                    &rcond, &mut rank, work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), &mut info,
                );
            }
            let info = classify("cgelss", info)?;
            return Ok(LeastSquares { rank, info });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn potrs(uplo: Uplo, n: i32, nrhs: i32, factors: &[Complex32], b: &mut [Complex32]) -> Result<i32> {
        backend::ensure("cpotrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::cpotrs_(
                    &uplo.as_char(), &n, &nrhs, factors.as_ptr(), &n, b.as_mut_ptr(), &n,
                    &mut info, 1,
                );
            }
            return classify("cpotrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn sytrs(
        uplo: Uplo,
        n: i32,
        nrhs: i32,
        factors: &[Complex32],
        pivots: &[i32],
        b: &mut [Complex32],
    ) -> Result<i32> {
        backend::ensure("csytrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::csytrs_(
                    &uplo.as_char(), &n, &nrhs, factors.as_ptr(), &n, pivots.as_ptr(),
                    b.as_mut_ptr(), &n, &mut info, 1,
                );
            }
            return classify("csytrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn getrs(
        trans: Transpose,
        n: i32,
        nrhs: i32,
        factors: &[Complex32],
        pivots: &[i32],
        b: &mut [Complex32],
    ) -> Result<i32> {
        backend::ensure("cgetrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::cgetrs_(
                    &trans.as_char(), &n, &nrhs, factors.as_ptr(), &n, pivots.as_ptr(),
                    b.as_mut_ptr(), &n, &mut info, 1,
                );
            }
            return classify("cgetrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn syevx(
        jobz: EigenJob,
        range: EigenRange,
        uplo: Uplo,
        n: i32,
        a: &mut [Complex32],
        lda: i32,
        vl: f32,
        vu: f32,
        il: i32,
        iu: i32,
        abstol: f32,
        values: &mut [f32],
        vectors: &mut [Complex32],
        ldv: i32,
        ifail: &mut [i32],
    ) -> Result<SelectedEigen> {
        backend::ensure("cheevx")?;
        #[cfg(feature = "lapack")]
        {
            let nn = n.max(0) as usize;
            let mut iwork = Workspace::<i32>::new(5 * nn);
            let mut rwork = Workspace::<f32>::new(7 * nn);
            let mut found = 0;
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::cheevx_(
                    &jobz.as_char(), &range.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    &vl, &vu, &il, &iu, &abstol, &mut found, values.as_mut_ptr(),
                    vectors.as_mut_ptr(), &ldv, wsize.as_mut_ptr(), &WORK_QUERY,
                    rwork.as_mut_ptr(), iwork.as_mut_ptr(), ifail.as_mut_ptr(), &mut info, 1, 1, 1,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::cheevx_(
                    &jobz.as_char(), &range.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    &vl, &vu, &il, &iu, &abstol, &mut found, values.as_mut_ptr(),
                    vectors.as_mut_ptr(), &ldv, work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(),
                    iwork.as_mut_ptr(), ifail.as_mut_ptr(), &mut info, 1, 1, 1,
                );
            }
            let info = classify("cheevx", info)?;
            return Ok(SelectedEigen { found, info });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn syev(
        jobz: EigenJob,
        uplo: Uplo,
        n: i32,
        a: &mut [Complex32],
        lda: i32,
        values: &mut [f32],
    ) -> Result<i32> {
        backend::ensure("cheev")?;
        #[cfg(feature = "lapack")]
        {
            let mut rwork = Workspace::<f32>::new(heev_rwork_len(n));
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::cheev_(
                    &jobz.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), wsize.as_mut_ptr(), &WORK_QUERY, rwork.as_mut_ptr(),
                    &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::cheev_(
                    &jobz.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(),
                    &mut info, 1, 1,
                );
            }
            return classify("cheev", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn gesdd(
        job: SvdJob,
        m: i32,
        n: i32,
        a: &mut [Complex32],
        lda: i32,
        s: &mut [f32],
        u: &mut [Complex32],
        ldu: i32,
        vt: &mut [Complex32],
        ldvt: i32,
    ) -> Result<i32> {
        backend::ensure("cgesdd")?;
        #[cfg(feature = "lapack")]
        {
            let mn = m.min(n).max(0) as usize;
            let mut rwork = Workspace::<f32>::new(gesdd_rwork_len(job, m, n));
            let mut iwork = Workspace::<i32>::new(8 * mn);
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::cgesdd_(
                    &job.as_char(), &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                    &ldu, vt.as_mut_ptr(), &ldvt, wsize.as_mut_ptr(), &WORK_QUERY,
                    rwork.as_mut_ptr(), iwork.as_mut_ptr(), &mut info, 1,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::cgesdd_(
                    &job.as_char(), &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                    &ldu, vt.as_mut_ptr(), &ldvt, work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(),
                    iwork.as_mut_ptr(), &mut info, 1,
                );
            }
            return classify("cgesdd", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn geev(
        jobvl: EigenJob,
        jobvr: EigenJob,
        n: i32,
        a: &mut [Complex32],
        lda: i32,
        values: &mut [Complex<f32>],
        vl: &mut [Complex<f32>],
        ldvl: i32,
        vr: &mut [Complex<f32>],
        ldvr: i32,
    ) -> Result<i32> {
        backend::ensure("cgeev")?;
        #[cfg(feature = "lapack")]
        {
            let mut rwork = Workspace::<f32>::new(2 * n.max(0) as usize);
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::cgeev_(
                    &jobvl.as_char(), &jobvr.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), vl.as_mut_ptr(), &ldvl, vr.as_mut_ptr(), &ldvr,
                    wsize.as_mut_ptr(), &WORK_QUERY, rwork.as_mut_ptr(), &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::cgeev_(
                    &jobvl.as_char(), &jobvr.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), vl.as_mut_ptr(), &ldvl, vr.as_mut_ptr(), &ldvr,
                    work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), &mut info, 1, 1,
                );
            }
            return classify("cgeev", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn getrf(m: i32, n: i32, a: &mut [Complex32], lda: i32, pivots: &mut [i32]) -> Result<i32> {
        backend::ensure("cgetrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::cgetrf_(&m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), &mut info);
            }
            return classify("cgetrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn potrf(uplo: Uplo, n: i32, a: &mut [Complex32], lda: i32) -> Result<i32> {
        backend::ensure("cpotrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::cpotrf_(&uplo.as_char(), &n, a.as_mut_ptr(), &lda, &mut info, 1);
            }
            return classify("cpotrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn sytrf(uplo: Uplo, n: i32, a: &mut [Complex32], lda: i32, pivots: &mut [i32]) -> Result<i32> {
        backend::ensure("csytrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::csytrf_(
                    &uplo.as_char(), &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(),
                    wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::csytrf_(
                    &uplo.as_char(), &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(),
                    work.as_mut_ptr(), &lwork, &mut info, 1,
                );
            }
            return classify("csytrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn geqp3(
        m: i32,
        n: i32,
        a: &mut [Complex32],
        lda: i32,
        pivots: &mut [i32],
        tau: &mut [Complex32],
    ) -> Result<i32> {
        backend::ensure("cgeqp3")?;
        #[cfg(feature = "lapack")]
        {
            let mut rwork = Workspace::<f32>::new(2 * n.max(0) as usize);
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::cgeqp3_(
                    &m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), tau.as_mut_ptr(),
                    wsize.as_mut_ptr(), &WORK_QUERY, rwork.as_mut_ptr(), &mut info,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::cgeqp3_(
                    &m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), tau.as_mut_ptr(),
                    work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), &mut info,
                );
            }
            return classify("cgeqp3", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn tzrzf(m: i32, n: i32, a: &mut [Complex32], lda: i32, tau: &mut [Complex32]) -> Result<i32> {
        backend::ensure("ctzrzf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::ctzrzf_(
                    &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), wsize.as_mut_ptr(),
                    &WORK_QUERY, &mut info,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::ctzrzf_(
                    &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), work.as_mut_ptr(), &lwork,
                    &mut info,
                );
            }
            return classify("ctzrzf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn ormqr(
        side: Side,
        trans: Transpose,
        m: i32,
        n: i32,
        k: i32,
        a: &[Complex32],
        lda: i32,
        tau: &[Complex32],
        c: &mut [Complex32],
        ldc: i32,
    ) -> Result<i32> {
        backend::ensure("cunmqr")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::cunmqr_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                    c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::cunmqr_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                    c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("cunmqr", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn ormrz(
        side: Side,
        trans: Transpose,
        m: i32,
        n: i32,
        k: i32,
        l: i32,
        a: &[Complex32],
        lda: i32,
        tau: &[Complex32],
        c: &mut [Complex32],
        ldc: i32,
    ) -> Result<i32> {
        backend::ensure("cunmrz")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [Complex32::default()];
            unsafe {
                ffi::cunmrz_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, &l, a.as_ptr(), &lda,
                    tau.as_ptr(), c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &WORK_QUERY,
                    &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<Complex32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::cunmrz_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, &l, a.as_ptr(), &lda,
                    tau.as_ptr(), c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("cunmrz", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn trsm(
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: i32,
        n: i32,
        alpha: Complex32,
        a: &[Complex32],
        lda: i32,
        b: &mut [Complex32],
        ldb: i32,
    ) -> Result<()> {
        backend::ensure("ctrsm")?;
        #[cfg(feature = "lapack")]
        {
            unsafe {
                ffi::ctrsm_(
                    &side.as_char(), &uplo.as_char(), &trans.as_char(), &diag.as_char(), &m, &n,
                    &alpha, a.as_ptr(), &lda, b.as_mut_ptr(), &ldb, 1, 1, 1, 1,
                );
            }
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn lange(norm: MatrixNorm, m: i32, n: i32, a: &[Complex32], lda: i32) -> Result<f32> {
        backend::ensure("clange")?;
        #[cfg(feature = "lapack")]
        {
            let mut work = Workspace::<f32>::new(m.max(0) as usize);
            let value = unsafe {
                ffi::clange_(&norm.as_char(), &m, &n, a.as_ptr(), &lda, work.as_mut_ptr(), 1)
            };
            return Ok(value);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn lascl(
        shape: ScaleShape,
        kl: i32,
        ku: i32,
        cfrom: f32,
        cto: f32,
        m: i32,
        n: i32,
        a: &mut [Complex32],
        lda: i32,
    ) -> Result<()> {
        backend::ensure("clascl")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::clascl_(
                    &shape.as_char(), &kl, &ku, &cfrom, &cto, &m, &n, a.as_mut_ptr(), &lda,
                    &mut info, 1,
                );
            }
            classify("clascl", info)?;
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn copy(n: i32, x: &[Complex32], incx: i32, y: &mut [Complex32], incy: i32) -> Result<()> {
        backend::ensure("ccopy")?;
        #[cfg(feature = "lapack")]
        {
            unsafe {
                ffi::ccopy_(&n, x.as_ptr(), &incx, y.as_mut_ptr(), &incy);
            }
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn laic1(
        job: i32,
        j: i32,
        x: &[Complex32],
        sest: f32,
        w: &[Complex32],
        gamma: Complex32,
    ) -> Result<ConditionUpdate<Complex32>> {
        backend::ensure("claic1")?;
        #[cfg(feature = "lapack")]
        {
            let mut estimate = 0.0;
            let mut sine = Complex32::default();
            let mut cosine = Complex32::default();
            unsafe {
                ffi::claic1_(
                    &job, &j, x.as_ptr(), &sest, w.as_ptr(), &gamma, &mut estimate, &mut sine,
                    &mut cosine,
                );
            }
            return Ok(ConditionUpdate { estimate, sine, cosine });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn safe_min() -> Result<f32> {
        <f32 as Scalar>::safe_min()
    }

    fn precision_range() -> Result<(f32, f32)> {
        <f32 as Scalar>::precision_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesdd_rwork_branch_no_vectors() {
        // 5x3: singular-values-only takes 5*3 = 15 reals.
        assert_eq!(gesdd_rwork_len(SvdJob::None, 5, 3), 15);
    }

    #[test]
    fn test_gesdd_rwork_branch_with_vectors() {
        // 5x3: every vector-producing mode takes 5*9 + 21 = 66 reals.
        assert_eq!(gesdd_rwork_len(SvdJob::All, 5, 3), 66);
        assert_eq!(gesdd_rwork_len(SvdJob::Some, 5, 3), 66);
        assert_eq!(gesdd_rwork_len(SvdJob::Overwrite, 5, 3), 66);
    }

    #[test]
    fn test_heev_rwork_floor() {
        assert_eq!(heev_rwork_len(0), 1);
        assert_eq!(heev_rwork_len(1), 1);
        assert_eq!(heev_rwork_len(4), 10);
    }
}
