//! `Scalar` implementations for the real element types.
//!
//! Each method prepares arguments for the s/d kernel variant, runs the
//! workspace-size query where the kernel's requirement is variable, invokes
//! the native entry point, and classifies the status. The general
//! eigen-decomposition additionally routes the kernel's packed real output
//! through the conjugate-pair normalizer in `eigen`.

use num_complex::Complex;

use lapgate_core::backend;
use lapgate_core::{
    Diag, EigenJob, EigenRange, MatrixNorm, Result, ScaleShape, Side, SvdJob, Transpose, Uplo,
};

#[cfg(feature = "lapack")]
use lapgate_core::error::classify;
#[cfg(feature = "lapack")]
use lapgate_core::{ffi, Workspace, WORK_QUERY};

#[cfg(feature = "lapack")]
use crate::eigen::{combine_eigenvalues, unpack_conjugate_pairs};
use crate::scalar::{ConditionUpdate, LeastSquares, Scalar, SelectedEigen};

#[cfg(feature = "lapack")]
use std::os::raw::c_char;

#[cfg_attr(not(feature = "lapack"), allow(unused_variables))]
impl Scalar for f64 {
    type Real = f64;

    #[inline]
    fn work_len(first: f64) -> usize {
        first as usize
    }

    fn gelss(
        m: i32,
        n: i32,
        nrhs: i32,
        a: &mut [f64],
        lda: i32,
        b: &mut [f64],
        ldb: i32,
        s: &mut [f64],
        rcond: f64,
    ) -> Result<LeastSquares> {
        backend::ensure("dgelss")?;
        #[cfg(feature = "lapack")]
        {
            let mut rank = 0;
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dgelss_(
                    &m, &n, &nrhs, a.as_mut_ptr(), &lda, b.as_mut_ptr(), &ldb, s.as_mut_ptr(),
                    &rcond, &mut rank, wsize.as_mut_ptr(), &WORK_QUERY, &mut info,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dgelss_(
                    &m, &n, &nrhs, a.as_mut_ptr(), &lda, b.as_mut_ptr(), &ldb, s.as_mut_ptr(),
                    &rcond, &mut rank, work.as_mut_ptr(), &lwork, &mut info,
                );
            }
            let info = classify("dgelss", info)?;
            return Ok(LeastSquares { rank, info });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn potrs(uplo: Uplo, n: i32, nrhs: i32, factors: &[f64], b: &mut [f64]) -> Result<i32> {
        backend::ensure("dpotrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::dpotrs_(
                    &uplo.as_char(), &n, &nrhs, factors.as_ptr(), &n, b.as_mut_ptr(), &n,
                    &mut info, 1,
                );
            }
            return classify("dpotrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn sytrs(
        uplo: Uplo,
        n: i32,
        nrhs: i32,
        factors: &[f64],
        pivots: &[i32],
        b: &mut [f64],
    ) -> Result<i32> {
        backend::ensure("dsytrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::dsytrs_(
                    &uplo.as_char(), &n, &nrhs, factors.as_ptr(), &n, pivots.as_ptr(),
                    b.as_mut_ptr(), &n, &mut info, 1,
                );
            }
            return classify("dsytrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn getrs(
        trans: Transpose,
        n: i32,
        nrhs: i32,
        factors: &[f64],
        pivots: &[i32],
        b: &mut [f64],
    ) -> Result<i32> {
        backend::ensure("dgetrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::dgetrs_(
                    &trans.as_char(), &n, &nrhs, factors.as_ptr(), &n, pivots.as_ptr(),
                    b.as_mut_ptr(), &n, &mut info, 1,
                );
            }
            return classify("dgetrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn syevx(
        jobz: EigenJob,
        range: EigenRange,
        uplo: Uplo,
        n: i32,
        a: &mut [f64],
        lda: i32,
        vl: f64,
        vu: f64,
        il: i32,
        iu: i32,
        abstol: f64,
        values: &mut [f64],
        vectors: &mut [f64],
        ldv: i32,
        ifail: &mut [i32],
    ) -> Result<SelectedEigen> {
        backend::ensure("dsyevx")?;
        #[cfg(feature = "lapack")]
        {
            let mut iwork = Workspace::<i32>::new(5 * n.max(0) as usize);
            let mut found = 0;
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dsyevx_(
                    &jobz.as_char(), &range.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    &vl, &vu, &il, &iu, &abstol, &mut found, values.as_mut_ptr(),
                    vectors.as_mut_ptr(), &ldv, wsize.as_mut_ptr(), &WORK_QUERY,
                    iwork.as_mut_ptr(), ifail.as_mut_ptr(), &mut info, 1, 1, 1,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dsyevx_(
                    &jobz.as_char(), &range.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    &vl, &vu, &il, &iu, &abstol, &mut found, values.as_mut_ptr(),
                    vectors.as_mut_ptr(), &ldv, work.as_mut_ptr(), &lwork, iwork.as_mut_ptr(),
                    ifail.as_mut_ptr(), &mut info, 1, 1, 1,
                );
            }
            let info = classify("dsyevx", info)?;
            return Ok(SelectedEigen { found, info });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn syev(
        jobz: EigenJob,
        uplo: Uplo,
        n: i32,
        a: &mut [f64],
        lda: i32,
        values: &mut [f64],
    ) -> Result<i32> {
        backend::ensure("dsyev")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dsyev_(
                    &jobz.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dsyev_(
                    &jobz.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("dsyev", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn gesdd(
        job: SvdJob,
        m: i32,
        n: i32,
        a: &mut [f64],
        lda: i32,
        s: &mut [f64],
        u: &mut [f64],
        ldu: i32,
        vt: &mut [f64],
        ldvt: i32,
    ) -> Result<i32> {
        backend::ensure("dgesdd")?;
        #[cfg(feature = "lapack")]
        {
            let mn = m.min(n).max(0) as usize;
            let mut iwork = Workspace::<i32>::new(8 * mn);
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dgesdd_(
                    &job.as_char(), &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                    &ldu, vt.as_mut_ptr(), &ldvt, wsize.as_mut_ptr(), &WORK_QUERY,
                    iwork.as_mut_ptr(), &mut info, 1,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dgesdd_(
                    &job.as_char(), &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                    &ldu, vt.as_mut_ptr(), &ldvt, work.as_mut_ptr(), &lwork, iwork.as_mut_ptr(),
                    &mut info, 1,
                );
            }
            return classify("dgesdd", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn geev(
        jobvl: EigenJob,
        jobvr: EigenJob,
        n: i32,
        a: &mut [f64],
        lda: i32,
        values: &mut [Complex<f64>],
        vl: &mut [Complex<f64>],
        ldvl: i32,
        vr: &mut [Complex<f64>],
        ldvr: i32,
    ) -> Result<i32> {
        backend::ensure("dgeev")?;
        #[cfg(feature = "lapack")]
        {
            let nn = n.max(0) as usize;
            let want_left = jobvl == EigenJob::Vectors;
            let want_right = jobvr == EigenJob::Vectors;
            // Split eigenvalue arrays plus real-packed vector storage with
            // its own leading dimension n; the caller's ldvl/ldvr apply to
            // the unpacked complex output only.
            let mut wr = Workspace::<f64>::new(nn);
            let mut wi = Workspace::<f64>::new(nn);
            let mut rawl = Workspace::<f64>::new(if want_left { nn * nn } else { 1 });
            let mut rawr = Workspace::<f64>::new(if want_right { nn * nn } else { 1 });
            let ldraw = n.max(1);
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dgeev_(
                    &jobvl.as_char(), &jobvr.as_char(), &n, a.as_mut_ptr(), &lda, wr.as_mut_ptr(),
                    wi.as_mut_ptr(), rawl.as_mut_ptr(), &ldraw, rawr.as_mut_ptr(), &ldraw,
                    wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dgeev_(
                    &jobvl.as_char(), &jobvr.as_char(), &n, a.as_mut_ptr(), &lda, wr.as_mut_ptr(),
                    wi.as_mut_ptr(), rawl.as_mut_ptr(), &ldraw, rawr.as_mut_ptr(), &ldraw,
                    work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            let info = classify("dgeev", info)?;
            combine_eigenvalues(wr.as_slice(), wi.as_slice(), values);
            if want_left {
                unpack_conjugate_pairs(nn, wi.as_slice(), rawl.as_slice(), ldraw as usize, vl, ldvl as usize);
            }
            if want_right {
                unpack_conjugate_pairs(nn, wi.as_slice(), rawr.as_slice(), ldraw as usize, vr, ldvr as usize);
            }
            return Ok(info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn getrf(m: i32, n: i32, a: &mut [f64], lda: i32, pivots: &mut [i32]) -> Result<i32> {
        backend::ensure("dgetrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::dgetrf_(&m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), &mut info);
            }
            return classify("dgetrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn potrf(uplo: Uplo, n: i32, a: &mut [f64], lda: i32) -> Result<i32> {
        backend::ensure("dpotrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::dpotrf_(&uplo.as_char(), &n, a.as_mut_ptr(), &lda, &mut info, 1);
            }
            return classify("dpotrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn sytrf(uplo: Uplo, n: i32, a: &mut [f64], lda: i32, pivots: &mut [i32]) -> Result<i32> {
        backend::ensure("dsytrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dsytrf_(
                    &uplo.as_char(), &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(),
                    wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dsytrf_(
                    &uplo.as_char(), &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(),
                    work.as_mut_ptr(), &lwork, &mut info, 1,
                );
            }
            return classify("dsytrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn geqp3(
        m: i32,
        n: i32,
        a: &mut [f64],
        lda: i32,
        pivots: &mut [i32],
        tau: &mut [f64],
    ) -> Result<i32> {
        backend::ensure("dgeqp3")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dgeqp3_(
                    &m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), tau.as_mut_ptr(),
                    wsize.as_mut_ptr(), &WORK_QUERY, &mut info,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dgeqp3_(
                    &m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), tau.as_mut_ptr(),
                    work.as_mut_ptr(), &lwork, &mut info,
                );
            }
            return classify("dgeqp3", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn tzrzf(m: i32, n: i32, a: &mut [f64], lda: i32, tau: &mut [f64]) -> Result<i32> {
        backend::ensure("dtzrzf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dtzrzf_(
                    &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), wsize.as_mut_ptr(),
                    &WORK_QUERY, &mut info,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dtzrzf_(
                    &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), work.as_mut_ptr(), &lwork,
                    &mut info,
                );
            }
            return classify("dtzrzf", info);
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
        a: &[f64],
        lda: i32,
        tau: &[f64],
        c: &mut [f64],
        ldc: i32,
    ) -> Result<i32> {
        backend::ensure("dormqr")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dormqr_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                    c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dormqr_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                    c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("dormqr", info);
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
        a: &[f64],
        lda: i32,
        tau: &[f64],
        c: &mut [f64],
        ldc: i32,
    ) -> Result<i32> {
        backend::ensure("dormrz")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f64];
            unsafe {
                ffi::dormrz_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, &l, a.as_ptr(), &lda,
                    tau.as_ptr(), c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &WORK_QUERY,
                    &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<f64>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::dormrz_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, &l, a.as_ptr(), &lda,
                    tau.as_ptr(), c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("dormrz", info);
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
        alpha: f64,
        a: &[f64],
        lda: i32,
        b: &mut [f64],
        ldb: i32,
    ) -> Result<()> {
        backend::ensure("dtrsm")?;
        #[cfg(feature = "lapack")]
        {
            unsafe {
                ffi::dtrsm_(
                    &side.as_char(), &uplo.as_char(), &trans.as_char(), &diag.as_char(), &m, &n,
                    &alpha, a.as_ptr(), &lda, b.as_mut_ptr(), &ldb, 1, 1, 1, 1,
                );
            }
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn lange(norm: MatrixNorm, m: i32, n: i32, a: &[f64], lda: i32) -> Result<f64> {
        backend::ensure("dlange")?;
        #[cfg(feature = "lapack")]
        {
            // The row-sum norm is the only one that reads the workspace, but
            // sizing it unconditionally keeps the call uniform.
            let mut work = Workspace::<f64>::new(m.max(0) as usize);
            let value = unsafe {
                ffi::dlange_(&norm.as_char(), &m, &n, a.as_ptr(), &lda, work.as_mut_ptr(), 1)
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
        a: &mut [f64],
        lda: i32,
    ) -> Result<()> {
        backend::ensure("dlascl")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::dlascl_(
                    &shape.as_char(), &kl, &ku, &cfrom, &cto, &m, &n, a.as_mut_ptr(), &lda,
                    &mut info, 1,
                );
            }
            classify("dlascl", info)?;
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn copy(n: i32, x: &[f64], incx: i32, y: &mut [f64], incy: i32) -> Result<()> {
        backend::ensure("dcopy")?;
        #[cfg(feature = "lapack")]
        {
            unsafe {
                ffi::dcopy_(&n, x.as_ptr(), &incx, y.as_mut_ptr(), &incy);
            }
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn laic1(
        job: i32,
        j: i32,
        x: &[f64],
        sest: f64,
        w: &[f64],
        gamma: f64,
    ) -> Result<ConditionUpdate<f64>> {
        backend::ensure("dlaic1")?;
        #[cfg(feature = "lapack")]
        {
            let mut estimate = 0.0;
            let mut sine = 0.0;
            let mut cosine = 0.0;
            unsafe {
                ffi::dlaic1_(
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
        backend::ensure("dlamch")?;
        #[cfg(feature = "lapack")]
        {
            let s = b'S' as c_char;
            return Ok(unsafe { ffi::dlamch_(&s, 1) });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn precision_range() -> Result<(f64, f64)> {
        backend::ensure("dlamch")?;
        #[cfg(feature = "lapack")]
        {
            let s = b'S' as c_char;
            let p = b'P' as c_char;
            let small = unsafe { ffi::dlamch_(&s, 1) } / unsafe { ffi::dlamch_(&p, 1) };
            return Ok((small, 1.0 / small));
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }
}

#[cfg_attr(not(feature = "lapack"), allow(unused_variables))]
impl Scalar for f32 {
    type Real = f32;

    #[inline]
    fn work_len(first: f32) -> usize {
        first as usize
    }

    fn gelss(
        m: i32,
        n: i32,
        nrhs: i32,
        a: &mut [f32],
        lda: i32,
        b: &mut [f32],
        ldb: i32,
        s: &mut [f32],
        rcond: f32,
    ) -> Result<LeastSquares> {
        backend::ensure("sgelss")?;
        #[cfg(feature = "lapack")]
        {
            let mut rank = 0;
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::sgelss_(
                    &m, &n, &nrhs, a.as_mut_ptr(), &lda, b.as_mut_ptr(), &ldb, s.as_mut_ptr(),
                    &rcond, &mut rank, wsize.as_mut_ptr(), &WORK_QUERY, &mut info,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::sgelss_(
                    &m, &n, &nrhs, a.as_mut_ptr(), &lda, b.as_mut_ptr(), &ldb, s.as_mut_ptr(),
                    &rcond, &mut rank, work.as_mut_ptr(), &lwork, &mut info,
                );
            }
            let info = classify("sgelss", info)?;
            return Ok(LeastSquares { rank, info });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn potrs(uplo: Uplo, n: i32, nrhs: i32, factors: &[f32], b: &mut [f32]) -> Result<i32> {
        backend::ensure("spotrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::spotrs_(
                    &uplo.as_char(), &n, &nrhs, factors.as_ptr(), &n, b.as_mut_ptr(), &n,
                    &mut info, 1,
                );
            }
            return classify("spotrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn sytrs(
        uplo: Uplo,
        n: i32,
        nrhs: i32,
        factors: &[f32],
        pivots: &[i32],
        b: &mut [f32],
    ) -> Result<i32> {
        backend::ensure("ssytrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::ssytrs_(
                    &uplo.as_char(), &n, &nrhs, factors.as_ptr(), &n, pivots.as_ptr(),
                    b.as_mut_ptr(), &n, &mut info, 1,
                );
            }
            return classify("ssytrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn getrs(
        trans: Transpose,
        n: i32,
        nrhs: i32,
        factors: &[f32],
        pivots: &[i32],
        b: &mut [f32],
    ) -> Result<i32> {
        backend::ensure("sgetrs")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::sgetrs_(
                    &trans.as_char(), &n, &nrhs, factors.as_ptr(), &n, pivots.as_ptr(),
                    b.as_mut_ptr(), &n, &mut info, 1,
                );
            }
            return classify("sgetrs", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn syevx(
        jobz: EigenJob,
        range: EigenRange,
        uplo: Uplo,
        n: i32,
        a: &mut [f32],
        lda: i32,
        vl: f32,
        vu: f32,
        il: i32,
        iu: i32,
        abstol: f32,
        values: &mut [f32],
        vectors: &mut [f32],
        ldv: i32,
        ifail: &mut [i32],
    ) -> Result<SelectedEigen> {
        backend::ensure("ssyevx")?;
        #[cfg(feature = "lapack")]
        {
            let mut iwork = Workspace::<i32>::new(5 * n.max(0) as usize);
            let mut found = 0;
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::ssyevx_(
                    &jobz.as_char(), &range.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    &vl, &vu, &il, &iu, &abstol, &mut found, values.as_mut_ptr(),
                    vectors.as_mut_ptr(), &ldv, wsize.as_mut_ptr(), &WORK_QUERY,
                    iwork.as_mut_ptr(), ifail.as_mut_ptr(), &mut info, 1, 1, 1,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::ssyevx_(
                    &jobz.as_char(), &range.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    &vl, &vu, &il, &iu, &abstol, &mut found, values.as_mut_ptr(),
                    vectors.as_mut_ptr(), &ldv, work.as_mut_ptr(), &lwork, iwork.as_mut_ptr(),
                    ifail.as_mut_ptr(), &mut info, 1, 1, 1,
                );
            }
            let info = classify("ssyevx", info)?;
            return Ok(SelectedEigen { found, info });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn syev(
        jobz: EigenJob,
        uplo: Uplo,
        n: i32,
        a: &mut [f32],
        lda: i32,
        values: &mut [f32],
    ) -> Result<i32> {
        backend::ensure("ssyev")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::ssyev_(
                    &jobz.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::ssyev_(
                    &jobz.as_char(), &uplo.as_char(), &n, a.as_mut_ptr(), &lda,
                    values.as_mut_ptr(), work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("ssyev", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn gesdd(
        job: SvdJob,
        m: i32,
        n: i32,
        a: &mut [f32],
        lda: i32,
        s: &mut [f32],
        u: &mut [f32],
        ldu: i32,
        vt: &mut [f32],
        ldvt: i32,
    ) -> Result<i32> {
        backend::ensure("sgesdd")?;
        #[cfg(feature = "lapack")]
        {
            let mn = m.min(n).max(0) as usize;
            let mut iwork = Workspace::<i32>::new(8 * mn);
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::sgesdd_(
                    &job.as_char(), &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                    &ldu, vt.as_mut_ptr(), &ldvt, wsize.as_mut_ptr(), &WORK_QUERY,
                    iwork.as_mut_ptr(), &mut info, 1,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::sgesdd_(
                    &job.as_char(), &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                    &ldu, vt.as_mut_ptr(), &ldvt, work.as_mut_ptr(), &lwork, iwork.as_mut_ptr(),
                    &mut info, 1,
                );
            }
            return classify("sgesdd", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn geev(
        jobvl: EigenJob,
        jobvr: EigenJob,
        n: i32,
        a: &mut [f32],
        lda: i32,
        values: &mut [Complex<f32>],
        vl: &mut [Complex<f32>],
        ldvl: i32,
        vr: &mut [Complex<f32>],
        ldvr: i32,
    ) -> Result<i32> {
        backend::ensure("sgeev")?;
        #[cfg(feature = "lapack")]
        {
            let nn = n.max(0) as usize;
            let want_left = jobvl == EigenJob::Vectors;
            let want_right = jobvr == EigenJob::Vectors;
            let mut wr = Workspace::<f32>::new(nn);
            let mut wi = Workspace::<f32>::new(nn);
            let mut rawl = Workspace::<f32>::new(if want_left { nn * nn } else { 1 });
            let mut rawr = Workspace::<f32>::new(if want_right { nn * nn } else { 1 });
            let ldraw = n.max(1);
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::sgeev_(
                    &jobvl.as_char(), &jobvr.as_char(), &n, a.as_mut_ptr(), &lda, wr.as_mut_ptr(),
                    wi.as_mut_ptr(), rawl.as_mut_ptr(), &ldraw, rawr.as_mut_ptr(), &ldraw,
                    wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::sgeev_(
                    &jobvl.as_char(), &jobvr.as_char(), &n, a.as_mut_ptr(), &lda, wr.as_mut_ptr(),
                    wi.as_mut_ptr(), rawl.as_mut_ptr(), &ldraw, rawr.as_mut_ptr(), &ldraw,
                    work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            let info = classify("sgeev", info)?;
            combine_eigenvalues(wr.as_slice(), wi.as_slice(), values);
            if want_left {
                unpack_conjugate_pairs(nn, wi.as_slice(), rawl.as_slice(), ldraw as usize, vl, ldvl as usize);
            }
            if want_right {
                unpack_conjugate_pairs(nn, wi.as_slice(), rawr.as_slice(), ldraw as usize, vr, ldvr as usize);
            }
            return Ok(info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn getrf(m: i32, n: i32, a: &mut [f32], lda: i32, pivots: &mut [i32]) -> Result<i32> {
        backend::ensure("sgetrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::sgetrf_(&m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), &mut info);
            }
            return classify("sgetrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn potrf(uplo: Uplo, n: i32, a: &mut [f32], lda: i32) -> Result<i32> {
        backend::ensure("spotrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::spotrf_(&uplo.as_char(), &n, a.as_mut_ptr(), &lda, &mut info, 1);
            }
            return classify("spotrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn sytrf(uplo: Uplo, n: i32, a: &mut [f32], lda: i32, pivots: &mut [i32]) -> Result<i32> {
        backend::ensure("ssytrf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::ssytrf_(
                    &uplo.as_char(), &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(),
                    wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::ssytrf_(
                    &uplo.as_char(), &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(),
                    work.as_mut_ptr(), &lwork, &mut info, 1,
                );
            }
            return classify("ssytrf", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn geqp3(
        m: i32,
        n: i32,
        a: &mut [f32],
        lda: i32,
        pivots: &mut [i32],
        tau: &mut [f32],
    ) -> Result<i32> {
        backend::ensure("sgeqp3")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::sgeqp3_(
                    &m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), tau.as_mut_ptr(),
                    wsize.as_mut_ptr(), &WORK_QUERY, &mut info,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::sgeqp3_(
                    &m, &n, a.as_mut_ptr(), &lda, pivots.as_mut_ptr(), tau.as_mut_ptr(),
                    work.as_mut_ptr(), &lwork, &mut info,
                );
            }
            return classify("sgeqp3", info);
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn tzrzf(m: i32, n: i32, a: &mut [f32], lda: i32, tau: &mut [f32]) -> Result<i32> {
        backend::ensure("stzrzf")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::stzrzf_(
                    &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), wsize.as_mut_ptr(),
                    &WORK_QUERY, &mut info,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::stzrzf_(
                    &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), work.as_mut_ptr(), &lwork,
                    &mut info,
                );
            }
            return classify("stzrzf", info);
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
        a: &[f32],
        lda: i32,
        tau: &[f32],
        c: &mut [f32],
        ldc: i32,
    ) -> Result<i32> {
        backend::ensure("sormqr")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::sormqr_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                    c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &WORK_QUERY, &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::sormqr_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                    c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("sormqr", info);
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
        a: &[f32],
        lda: i32,
        tau: &[f32],
        c: &mut [f32],
        ldc: i32,
    ) -> Result<i32> {
        backend::ensure("sormrz")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            let mut wsize = [0.0f32];
            unsafe {
                ffi::sormrz_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, &l, a.as_ptr(), &lda,
                    tau.as_ptr(), c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &WORK_QUERY,
                    &mut info, 1, 1,
                );
            }
            let mut work = Workspace::<f32>::new(Self::work_len(wsize[0]));
            let lwork = work.len() as i32;
            unsafe {
                ffi::sormrz_(
                    &side.as_char(), &trans.as_char(), &m, &n, &k, &l, a.as_ptr(), &lda,
                    tau.as_ptr(), c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info, 1, 1,
                );
            }
            return classify("sormrz", info);
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
        alpha: f32,
        a: &[f32],
        lda: i32,
        b: &mut [f32],
        ldb: i32,
    ) -> Result<()> {
        backend::ensure("strsm")?;
        #[cfg(feature = "lapack")]
        {
            unsafe {
                ffi::strsm_(
                    &side.as_char(), &uplo.as_char(), &trans.as_char(), &diag.as_char(), &m, &n,
                    &alpha, a.as_ptr(), &lda, b.as_mut_ptr(), &ldb, 1, 1, 1, 1,
                );
            }
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn lange(norm: MatrixNorm, m: i32, n: i32, a: &[f32], lda: i32) -> Result<f32> {
        backend::ensure("slange")?;
        #[cfg(feature = "lapack")]
        {
            let mut work = Workspace::<f32>::new(m.max(0) as usize);
            let value = unsafe {
                ffi::slange_(&norm.as_char(), &m, &n, a.as_ptr(), &lda, work.as_mut_ptr(), 1)
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
        a: &mut [f32],
        lda: i32,
    ) -> Result<()> {
        backend::ensure("slascl")?;
        #[cfg(feature = "lapack")]
        {
            let mut info = 0;
            unsafe {
                ffi::slascl_(
                    &shape.as_char(), &kl, &ku, &cfrom, &cto, &m, &n, a.as_mut_ptr(), &lda,
                    &mut info, 1,
                );
            }
            classify("slascl", info)?;
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn copy(n: i32, x: &[f32], incx: i32, y: &mut [f32], incy: i32) -> Result<()> {
        backend::ensure("scopy")?;
        #[cfg(feature = "lapack")]
        {
            unsafe {
                ffi::scopy_(&n, x.as_ptr(), &incx, y.as_mut_ptr(), &incy);
            }
            return Ok(());
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn laic1(
        job: i32,
        j: i32,
        x: &[f32],
        sest: f32,
        w: &[f32],
        gamma: f32,
    ) -> Result<ConditionUpdate<f32>> {
        backend::ensure("slaic1")?;
        #[cfg(feature = "lapack")]
        {
            let mut estimate = 0.0;
            let mut sine = 0.0;
            let mut cosine = 0.0;
            unsafe {
                ffi::slaic1_(
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
        backend::ensure("slamch")?;
        #[cfg(feature = "lapack")]
        {
            let s = b'S' as c_char;
            return Ok(unsafe { ffi::slamch_(&s, 1) });
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }

    fn precision_range() -> Result<(f32, f32)> {
        backend::ensure("slamch")?;
        #[cfg(feature = "lapack")]
        {
            let s = b'S' as c_char;
            let p = b'P' as c_char;
            let small = unsafe { ffi::slamch_(&s, 1) } / unsafe { ffi::slamch_(&p, 1) };
            return Ok((small, 1.0 / small));
        }
        #[cfg(not(feature = "lapack"))]
        unreachable!();
    }
}
