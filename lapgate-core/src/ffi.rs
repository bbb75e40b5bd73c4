//! Raw Fortran declarations for the LAPACK/BLAS entry points.
//!
//! These map 1:1 to the reference Fortran interfaces. All functions are
//! unsafe — safe wrappers live in the dispatch crate's per-precision blocks.
//!
//! Convention: Fortran passes every argument by reference, so scalars appear
//! as pointers here. Each CHARACTER argument carries a trailing hidden
//! length argument appended after the declared argument list, in declaration
//! order; the dispatch layer always passes 1 for these single-character
//! selectors. Complex arguments use `num_complex`'s `repr(C)` types, which
//! are layout-compatible with Fortran COMPLEX and COMPLEX*16.

#![allow(clippy::too_many_arguments)]

use std::os::raw::{c_char, c_double, c_float, c_int};

use num_complex::{Complex32, Complex64};

// ════════════════════════════════════════════════════════════════
// BLAS: vector copy, triangular solve
// ════════════════════════════════════════════════════════════════

#[link(name = "blas")]
extern "C" {
    pub fn scopy_(n: *const c_int, x: *const c_float, incx: *const c_int, y: *mut c_float, incy: *const c_int);
    pub fn dcopy_(n: *const c_int, x: *const c_double, incx: *const c_int, y: *mut c_double, incy: *const c_int);
    pub fn ccopy_(n: *const c_int, x: *const Complex32, incx: *const c_int, y: *mut Complex32, incy: *const c_int);
    pub fn zcopy_(n: *const c_int, x: *const Complex64, incx: *const c_int, y: *mut Complex64, incy: *const c_int);

    pub fn strsm_(side: *const c_char, uplo: *const c_char, transa: *const c_char, diag: *const c_char,
        m: *const c_int, n: *const c_int, alpha: *const c_float, a: *const c_float, lda: *const c_int,
        b: *mut c_float, ldb: *const c_int,
        side_len: c_int, uplo_len: c_int, transa_len: c_int, diag_len: c_int);
    pub fn dtrsm_(side: *const c_char, uplo: *const c_char, transa: *const c_char, diag: *const c_char,
        m: *const c_int, n: *const c_int, alpha: *const c_double, a: *const c_double, lda: *const c_int,
        b: *mut c_double, ldb: *const c_int,
        side_len: c_int, uplo_len: c_int, transa_len: c_int, diag_len: c_int);
    pub fn ctrsm_(side: *const c_char, uplo: *const c_char, transa: *const c_char, diag: *const c_char,
        m: *const c_int, n: *const c_int, alpha: *const Complex32, a: *const Complex32, lda: *const c_int,
        b: *mut Complex32, ldb: *const c_int,
        side_len: c_int, uplo_len: c_int, transa_len: c_int, diag_len: c_int);
    pub fn ztrsm_(side: *const c_char, uplo: *const c_char, transa: *const c_char, diag: *const c_char,
        m: *const c_int, n: *const c_int, alpha: *const Complex64, a: *const Complex64, lda: *const c_int,
        b: *mut Complex64, ldb: *const c_int,
        side_len: c_int, uplo_len: c_int, transa_len: c_int, diag_len: c_int);
}

// ════════════════════════════════════════════════════════════════
// LAPACK: factorizations
// ════════════════════════════════════════════════════════════════

#[link(name = "lapack")]
extern "C" {
    pub fn sgetrf_(m: *const c_int, n: *const c_int, a: *mut c_float, lda: *const c_int,
        ipiv: *mut c_int, info: *mut c_int);
    pub fn dgetrf_(m: *const c_int, n: *const c_int, a: *mut c_double, lda: *const c_int,
        ipiv: *mut c_int, info: *mut c_int);
    pub fn cgetrf_(m: *const c_int, n: *const c_int, a: *mut Complex32, lda: *const c_int,
        ipiv: *mut c_int, info: *mut c_int);
    pub fn zgetrf_(m: *const c_int, n: *const c_int, a: *mut Complex64, lda: *const c_int,
        ipiv: *mut c_int, info: *mut c_int);

    pub fn spotrf_(uplo: *const c_char, n: *const c_int, a: *mut c_float, lda: *const c_int,
        info: *mut c_int, uplo_len: c_int);
    pub fn dpotrf_(uplo: *const c_char, n: *const c_int, a: *mut c_double, lda: *const c_int,
        info: *mut c_int, uplo_len: c_int);
    pub fn cpotrf_(uplo: *const c_char, n: *const c_int, a: *mut Complex32, lda: *const c_int,
        info: *mut c_int, uplo_len: c_int);
    pub fn zpotrf_(uplo: *const c_char, n: *const c_int, a: *mut Complex64, lda: *const c_int,
        info: *mut c_int, uplo_len: c_int);

    pub fn ssytrf_(uplo: *const c_char, n: *const c_int, a: *mut c_float, lda: *const c_int,
        ipiv: *mut c_int, work: *mut c_float, lwork: *const c_int, info: *mut c_int, uplo_len: c_int);
    pub fn dsytrf_(uplo: *const c_char, n: *const c_int, a: *mut c_double, lda: *const c_int,
        ipiv: *mut c_int, work: *mut c_double, lwork: *const c_int, info: *mut c_int, uplo_len: c_int);
    pub fn csytrf_(uplo: *const c_char, n: *const c_int, a: *mut Complex32, lda: *const c_int,
        ipiv: *mut c_int, work: *mut Complex32, lwork: *const c_int, info: *mut c_int, uplo_len: c_int);
    pub fn zsytrf_(uplo: *const c_char, n: *const c_int, a: *mut Complex64, lda: *const c_int,
        ipiv: *mut c_int, work: *mut Complex64, lwork: *const c_int, info: *mut c_int, uplo_len: c_int);

    pub fn sgeqp3_(m: *const c_int, n: *const c_int, a: *mut c_float, lda: *const c_int,
        jpvt: *mut c_int, tau: *mut c_float, work: *mut c_float, lwork: *const c_int, info: *mut c_int);
    pub fn dgeqp3_(m: *const c_int, n: *const c_int, a: *mut c_double, lda: *const c_int,
        jpvt: *mut c_int, tau: *mut c_double, work: *mut c_double, lwork: *const c_int, info: *mut c_int);
    pub fn cgeqp3_(m: *const c_int, n: *const c_int, a: *mut Complex32, lda: *const c_int,
        jpvt: *mut c_int, tau: *mut Complex32, work: *mut Complex32, lwork: *const c_int,
        rwork: *mut c_float, info: *mut c_int);
    pub fn zgeqp3_(m: *const c_int, n: *const c_int, a: *mut Complex64, lda: *const c_int,
        jpvt: *mut c_int, tau: *mut Complex64, work: *mut Complex64, lwork: *const c_int,
        rwork: *mut c_double, info: *mut c_int);

    pub fn stzrzf_(m: *const c_int, n: *const c_int, a: *mut c_float, lda: *const c_int,
        tau: *mut c_float, work: *mut c_float, lwork: *const c_int, info: *mut c_int);
    pub fn dtzrzf_(m: *const c_int, n: *const c_int, a: *mut c_double, lda: *const c_int,
        tau: *mut c_double, work: *mut c_double, lwork: *const c_int, info: *mut c_int);
    pub fn ctzrzf_(m: *const c_int, n: *const c_int, a: *mut Complex32, lda: *const c_int,
        tau: *mut Complex32, work: *mut Complex32, lwork: *const c_int, info: *mut c_int);
    pub fn ztzrzf_(m: *const c_int, n: *const c_int, a: *mut Complex64, lda: *const c_int,
        tau: *mut Complex64, work: *mut Complex64, lwork: *const c_int, info: *mut c_int);
}

// ════════════════════════════════════════════════════════════════
// LAPACK: solves from existing factors
// ════════════════════════════════════════════════════════════════

#[link(name = "lapack")]
extern "C" {
    pub fn spotrs_(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_float,
        lda: *const c_int, b: *mut c_float, ldb: *const c_int, info: *mut c_int, uplo_len: c_int);
    pub fn dpotrs_(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_double,
        lda: *const c_int, b: *mut c_double, ldb: *const c_int, info: *mut c_int, uplo_len: c_int);
    pub fn cpotrs_(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const Complex32,
        lda: *const c_int, b: *mut Complex32, ldb: *const c_int, info: *mut c_int, uplo_len: c_int);
    pub fn zpotrs_(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const Complex64,
        lda: *const c_int, b: *mut Complex64, ldb: *const c_int, info: *mut c_int, uplo_len: c_int);

    pub fn ssytrs_(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_float,
        lda: *const c_int, ipiv: *const c_int, b: *mut c_float, ldb: *const c_int,
        info: *mut c_int, uplo_len: c_int);
    pub fn dsytrs_(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_double,
        lda: *const c_int, ipiv: *const c_int, b: *mut c_double, ldb: *const c_int,
        info: *mut c_int, uplo_len: c_int);
    pub fn csytrs_(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const Complex32,
        lda: *const c_int, ipiv: *const c_int, b: *mut Complex32, ldb: *const c_int,
        info: *mut c_int, uplo_len: c_int);
    pub fn zsytrs_(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const Complex64,
        lda: *const c_int, ipiv: *const c_int, b: *mut Complex64, ldb: *const c_int,
        info: *mut c_int, uplo_len: c_int);

    pub fn sgetrs_(trans: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_float,
        lda: *const c_int, ipiv: *const c_int, b: *mut c_float, ldb: *const c_int,
        info: *mut c_int, trans_len: c_int);
    pub fn dgetrs_(trans: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_double,
        lda: *const c_int, ipiv: *const c_int, b: *mut c_double, ldb: *const c_int,
        info: *mut c_int, trans_len: c_int);
    pub fn cgetrs_(trans: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const Complex32,
        lda: *const c_int, ipiv: *const c_int, b: *mut Complex32, ldb: *const c_int,
        info: *mut c_int, trans_len: c_int);
    pub fn zgetrs_(trans: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const Complex64,
        lda: *const c_int, ipiv: *const c_int, b: *mut Complex64, ldb: *const c_int,
        info: *mut c_int, trans_len: c_int);
}

// ════════════════════════════════════════════════════════════════
// LAPACK: least squares
// ════════════════════════════════════════════════════════════════

#[link(name = "lapack")]
extern "C" {
    pub fn sgelss_(m: *const c_int, n: *const c_int, nrhs: *const c_int, a: *mut c_float,
        lda: *const c_int, b: *mut c_float, ldb: *const c_int, s: *mut c_float,
        rcond: *const c_float, rank: *mut c_int, work: *mut c_float, lwork: *const c_int,
        info: *mut c_int);
    pub fn dgelss_(m: *const c_int, n: *const c_int, nrhs: *const c_int, a: *mut c_double,
        lda: *const c_int, b: *mut c_double, ldb: *const c_int, s: *mut c_double,
        rcond: *const c_double, rank: *mut c_int, work: *mut c_double, lwork: *const c_int,
        info: *mut c_int);
    pub fn cgelss_(m: *const c_int, n: *const c_int, nrhs: *const c_int, a: *mut Complex32,
        lda: *const c_int, b: *mut Complex32, ldb: *const c_int, s: *mut c_float,
        rcond: *const c_float, rank: *mut c_int, work: *mut Complex32, lwork: *const c_int,
        rwork: *mut c_float, info: *mut c_int);
    pub fn zgelss_(m: *const c_int, n: *const c_int, nrhs: *const c_int, a: *mut Complex64,
        lda: *const c_int, b: *mut Complex64, ldb: *const c_int, s: *mut c_double,
        rcond: *const c_double, rank: *mut c_int, work: *mut Complex64, lwork: *const c_int,
        rwork: *mut c_double, info: *mut c_int);
}

// ════════════════════════════════════════════════════════════════
// LAPACK: eigen-decompositions
// ════════════════════════════════════════════════════════════════

#[link(name = "lapack")]
extern "C" {
    pub fn ssyev_(jobz: *const c_char, uplo: *const c_char, n: *const c_int, a: *mut c_float,
        lda: *const c_int, w: *mut c_float, work: *mut c_float, lwork: *const c_int,
        info: *mut c_int, jobz_len: c_int, uplo_len: c_int);
    pub fn dsyev_(jobz: *const c_char, uplo: *const c_char, n: *const c_int, a: *mut c_double,
        lda: *const c_int, w: *mut c_double, work: *mut c_double, lwork: *const c_int,
        info: *mut c_int, jobz_len: c_int, uplo_len: c_int);
    pub fn cheev_(jobz: *const c_char, uplo: *const c_char, n: *const c_int, a: *mut Complex32,
        lda: *const c_int, w: *mut c_float, work: *mut Complex32, lwork: *const c_int,
        rwork: *mut c_float, info: *mut c_int, jobz_len: c_int, uplo_len: c_int);
    pub fn zheev_(jobz: *const c_char, uplo: *const c_char, n: *const c_int, a: *mut Complex64,
        lda: *const c_int, w: *mut c_double, work: *mut Complex64, lwork: *const c_int,
        rwork: *mut c_double, info: *mut c_int, jobz_len: c_int, uplo_len: c_int);

    pub fn ssyevx_(jobz: *const c_char, range: *const c_char, uplo: *const c_char, n: *const c_int,
        a: *mut c_float, lda: *const c_int, vl: *const c_float, vu: *const c_float,
        il: *const c_int, iu: *const c_int, abstol: *const c_float, m: *mut c_int,
        w: *mut c_float, z: *mut c_float, ldz: *const c_int, work: *mut c_float,
        lwork: *const c_int, iwork: *mut c_int, ifail: *mut c_int, info: *mut c_int,
        jobz_len: c_int, range_len: c_int, uplo_len: c_int);
    pub fn dsyevx_(jobz: *const c_char, range: *const c_char, uplo: *const c_char, n: *const c_int,
        a: *mut c_double, lda: *const c_int, vl: *const c_double, vu: *const c_double,
        il: *const c_int, iu: *const c_int, abstol: *const c_double, m: *mut c_int,
        w: *mut c_double, z: *mut c_double, ldz: *const c_int, work: *mut c_double,
        lwork: *const c_int, iwork: *mut c_int, ifail: *mut c_int, info: *mut c_int,
        jobz_len: c_int, range_len: c_int, uplo_len: c_int);
    pub fn cheevx_(jobz: *const c_char, range: *const c_char, uplo: *const c_char, n: *const c_int,
        a: *mut Complex32, lda: *const c_int, vl: *const c_float, vu: *const c_float,
        il: *const c_int, iu: *const c_int, abstol: *const c_float, m: *mut c_int,
        w: *mut c_float, z: *mut Complex32, ldz: *const c_int, work: *mut Complex32,
        lwork: *const c_int, rwork: *mut c_float, iwork: *mut c_int, ifail: *mut c_int,
        info: *mut c_int, jobz_len: c_int, range_len: c_int, uplo_len: c_int);
    pub fn zheevx_(jobz: *const c_char, range: *const c_char, uplo: *const c_char, n: *const c_int,
        a: *mut Complex64, lda: *const c_int, vl: *const c_double, vu: *const c_double,
        il: *const c_int, iu: *const c_int, abstol: *const c_double, m: *mut c_int,
        w: *mut c_double, z: *mut Complex64, ldz: *const c_int, work: *mut Complex64,
        lwork: *const c_int, rwork: *mut c_double, iwork: *mut c_int, ifail: *mut c_int,
        info: *mut c_int, jobz_len: c_int, range_len: c_int, uplo_len: c_int);

    pub fn sgeev_(jobvl: *const c_char, jobvr: *const c_char, n: *const c_int, a: *mut c_float,
        lda: *const c_int, wr: *mut c_float, wi: *mut c_float, vl: *mut c_float,
        ldvl: *const c_int, vr: *mut c_float, ldvr: *const c_int, work: *mut c_float,
        lwork: *const c_int, info: *mut c_int, jobvl_len: c_int, jobvr_len: c_int);
    pub fn dgeev_(jobvl: *const c_char, jobvr: *const c_char, n: *const c_int, a: *mut c_double,
        lda: *const c_int, wr: *mut c_double, wi: *mut c_double, vl: *mut c_double,
        ldvl: *const c_int, vr: *mut c_double, ldvr: *const c_int, work: *mut c_double,
        lwork: *const c_int, info: *mut c_int, jobvl_len: c_int, jobvr_len: c_int);
    pub fn cgeev_(jobvl: *const c_char, jobvr: *const c_char, n: *const c_int, a: *mut Complex32,
        lda: *const c_int, w: *mut Complex32, vl: *mut Complex32, ldvl: *const c_int,
        vr: *mut Complex32, ldvr: *const c_int, work: *mut Complex32, lwork: *const c_int,
        rwork: *mut c_float, info: *mut c_int, jobvl_len: c_int, jobvr_len: c_int);
    pub fn zgeev_(jobvl: *const c_char, jobvr: *const c_char, n: *const c_int, a: *mut Complex64,
        lda: *const c_int, w: *mut Complex64, vl: *mut Complex64, ldvl: *const c_int,
        vr: *mut Complex64, ldvr: *const c_int, work: *mut Complex64, lwork: *const c_int,
        rwork: *mut c_double, info: *mut c_int, jobvl_len: c_int, jobvr_len: c_int);
}

// ════════════════════════════════════════════════════════════════
// LAPACK: singular value decomposition
// ════════════════════════════════════════════════════════════════

#[link(name = "lapack")]
extern "C" {
    pub fn sgesdd_(jobz: *const c_char, m: *const c_int, n: *const c_int, a: *mut c_float,
        lda: *const c_int, s: *mut c_float, u: *mut c_float, ldu: *const c_int, vt: *mut c_float,
        ldvt: *const c_int, work: *mut c_float, lwork: *const c_int, iwork: *mut c_int,
        info: *mut c_int, jobz_len: c_int);
    pub fn dgesdd_(jobz: *const c_char, m: *const c_int, n: *const c_int, a: *mut c_double,
        lda: *const c_int, s: *mut c_double, u: *mut c_double, ldu: *const c_int, vt: *mut c_double,
        ldvt: *const c_int, work: *mut c_double, lwork: *const c_int, iwork: *mut c_int,
        info: *mut c_int, jobz_len: c_int);
    pub fn cgesdd_(jobz: *const c_char, m: *const c_int, n: *const c_int, a: *mut Complex32,
        lda: *const c_int, s: *mut c_float, u: *mut Complex32, ldu: *const c_int,
        vt: *mut Complex32, ldvt: *const c_int, work: *mut Complex32, lwork: *const c_int,
        rwork: *mut c_float, iwork: *mut c_int, info: *mut c_int, jobz_len: c_int);
    pub fn zgesdd_(jobz: *const c_char, m: *const c_int, n: *const c_int, a: *mut Complex64,
        lda: *const c_int, s: *mut c_double, u: *mut Complex64, ldu: *const c_int,
        vt: *mut Complex64, ldvt: *const c_int, work: *mut Complex64, lwork: *const c_int,
        rwork: *mut c_double, iwork: *mut c_int, info: *mut c_int, jobz_len: c_int);
}

// ════════════════════════════════════════════════════════════════
// LAPACK: orthogonal/unitary applications
// ════════════════════════════════════════════════════════════════

#[link(name = "lapack")]
extern "C" {
    pub fn sormqr_(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
        k: *const c_int, a: *const c_float, lda: *const c_int, tau: *const c_float,
        c: *mut c_float, ldc: *const c_int, work: *mut c_float, lwork: *const c_int,
        info: *mut c_int, side_len: c_int, trans_len: c_int);
    pub fn dormqr_(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
        k: *const c_int, a: *const c_double, lda: *const c_int, tau: *const c_double,
        c: *mut c_double, ldc: *const c_int, work: *mut c_double, lwork: *const c_int,
        info: *mut c_int, side_len: c_int, trans_len: c_int);
    pub fn cunmqr_(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
        k: *const c_int, a: *const Complex32, lda: *const c_int, tau: *const Complex32,
        c: *mut Complex32, ldc: *const c_int, work: *mut Complex32, lwork: *const c_int,
        info: *mut c_int, side_len: c_int, trans_len: c_int);
    pub fn zunmqr_(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
        k: *const c_int, a: *const Complex64, lda: *const c_int, tau: *const Complex64,
        c: *mut Complex64, ldc: *const c_int, work: *mut Complex64, lwork: *const c_int,
        info: *mut c_int, side_len: c_int, trans_len: c_int);

    pub fn sormrz_(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
        k: *const c_int, l: *const c_int, a: *const c_float, lda: *const c_int, tau: *const c_float,
        c: *mut c_float, ldc: *const c_int, work: *mut c_float, lwork: *const c_int,
        info: *mut c_int, side_len: c_int, trans_len: c_int);
    pub fn dormrz_(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
        k: *const c_int, l: *const c_int, a: *const c_double, lda: *const c_int, tau: *const c_double,
        c: *mut c_double, ldc: *const c_int, work: *mut c_double, lwork: *const c_int,
        info: *mut c_int, side_len: c_int, trans_len: c_int);
    pub fn cunmrz_(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
        k: *const c_int, l: *const c_int, a: *const Complex32, lda: *const c_int,
        tau: *const Complex32, c: *mut Complex32, ldc: *const c_int, work: *mut Complex32,
        lwork: *const c_int, info: *mut c_int, side_len: c_int, trans_len: c_int);
    pub fn zunmrz_(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
        k: *const c_int, l: *const c_int, a: *const Complex64, lda: *const c_int,
        tau: *const Complex64, c: *mut Complex64, ldc: *const c_int, work: *mut Complex64,
        lwork: *const c_int, info: *mut c_int, side_len: c_int, trans_len: c_int);
}

// ════════════════════════════════════════════════════════════════
// LAPACK: norms, scaling, machine parameters, condition estimation
// ════════════════════════════════════════════════════════════════

#[link(name = "lapack")]
extern "C" {
    pub fn slange_(norm: *const c_char, m: *const c_int, n: *const c_int, a: *const c_float,
        lda: *const c_int, work: *mut c_float, norm_len: c_int) -> c_float;
    pub fn dlange_(norm: *const c_char, m: *const c_int, n: *const c_int, a: *const c_double,
        lda: *const c_int, work: *mut c_double, norm_len: c_int) -> c_double;
    pub fn clange_(norm: *const c_char, m: *const c_int, n: *const c_int, a: *const Complex32,
        lda: *const c_int, work: *mut c_float, norm_len: c_int) -> c_float;
    pub fn zlange_(norm: *const c_char, m: *const c_int, n: *const c_int, a: *const Complex64,
        lda: *const c_int, work: *mut c_double, norm_len: c_int) -> c_double;

    pub fn slascl_(mtype: *const c_char, kl: *const c_int, ku: *const c_int, cfrom: *const c_float,
        cto: *const c_float, m: *const c_int, n: *const c_int, a: *mut c_float, lda: *const c_int,
        info: *mut c_int, mtype_len: c_int);
    pub fn dlascl_(mtype: *const c_char, kl: *const c_int, ku: *const c_int, cfrom: *const c_double,
        cto: *const c_double, m: *const c_int, n: *const c_int, a: *mut c_double, lda: *const c_int,
        info: *mut c_int, mtype_len: c_int);
    pub fn clascl_(mtype: *const c_char, kl: *const c_int, ku: *const c_int, cfrom: *const c_float,
        cto: *const c_float, m: *const c_int, n: *const c_int, a: *mut Complex32, lda: *const c_int,
        info: *mut c_int, mtype_len: c_int);
    pub fn zlascl_(mtype: *const c_char, kl: *const c_int, ku: *const c_int, cfrom: *const c_double,
        cto: *const c_double, m: *const c_int, n: *const c_int, a: *mut Complex64, lda: *const c_int,
        info: *mut c_int, mtype_len: c_int);

    pub fn slamch_(cmach: *const c_char, cmach_len: c_int) -> c_float;
    pub fn dlamch_(cmach: *const c_char, cmach_len: c_int) -> c_double;

    pub fn slaic1_(job: *const c_int, j: *const c_int, x: *const c_float, sest: *const c_float,
        w: *const c_float, gamma: *const c_float, sestpr: *mut c_float, s: *mut c_float,
        c: *mut c_float);
    pub fn dlaic1_(job: *const c_int, j: *const c_int, x: *const c_double, sest: *const c_double,
        w: *const c_double, gamma: *const c_double, sestpr: *mut c_double, s: *mut c_double,
        c: *mut c_double);
    pub fn claic1_(job: *const c_int, j: *const c_int, x: *const Complex32, sest: *const c_float,
        w: *const Complex32, gamma: *const Complex32, sestpr: *mut c_float, s: *mut Complex32,
        c: *mut Complex32);
    pub fn zlaic1_(job: *const c_int, j: *const c_int, x: *const Complex64, sest: *const c_double,
        w: *const Complex64, gamma: *const Complex64, sestpr: *mut c_double, s: *mut Complex64,
        c: *mut Complex64);
}
