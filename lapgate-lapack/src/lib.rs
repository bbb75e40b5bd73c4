// Kernel wrappers mirror the native argument lists, which are long by design.
#![allow(clippy::too_many_arguments)]

//! # lapgate-lapack
//!
//! A precision-generic dispatch layer over native LAPACK/BLAS.
//!
//! Callers request an operation once, generically over the element type, and
//! the call is routed to the matching native kernel variant with correct
//! buffer sizing, workspace allocation, and result post-processing:
//!
//! - **Least squares** (`gelss`) — minimum-norm solve with rank revelation
//! - **Factorizations** (`getrf` / `potrf` / `sytrf` / `geqp3` / `tzrzf`)
//! - **Solves from factors** (`getrs` / `potrs` / `sytrs`, BLAS `trsm`)
//! - **Eigen-decompositions** (`syev` / `syevx` / `geev`) — including the
//!   conjugate-pair reconstruction the real-arithmetic kernels require
//! - **SVD** (`gesdd`) with job-mode–dependent workspace sizing
//! - **Orthogonal applications** (`ormqr` / `ormrz`), norms, scaling,
//!   machine parameters, incremental condition estimation
//!
//! Four element types are supported: `f32`, `f64`, [`Complex32`],
//! [`Complex64`]. Each operation is explicitly specialized for all four via
//! the [`Scalar`] trait; dispatch resolves entirely at compile time.
//!
//! Matrices are column-major with an explicit leading dimension, exactly as
//! the native kernels expect. The layer mutates caller buffers in place and
//! never retains them.
//!
//! ## Workspace sizing
//!
//! Variable-workspace kernels are sized with the standard two-call protocol
//! (query with `lwork = -1`, then execute with the reported length) so the
//! native library's own blocking heuristics decide — see
//! [`lapgate_core::workspace`].
//!
//! ## Errors
//!
//! A negative status becomes [`Error::IllegalArgument`] carrying the native
//! routine name and the 1-based argument position. Non-negative statuses are
//! returned to the caller unchanged. When the `lapack` feature is disabled
//! (or the backend is switched off at startup), every operation reports
//! [`Error::BackendUnavailable`] under its own routine name — there is no
//! numeric fallback.

pub mod ops;
pub mod scalar;

mod complex;
mod eigen;
mod real;

pub use lapgate_core::{
    native_enabled, set_native_enabled, Diag, EigenJob, EigenRange, Error, MatrixNorm, Result,
    ScaleShape, Side, SvdJob, Transpose, Uplo, Workspace, WORK_QUERY,
};
pub use num_complex::{Complex32, Complex64};
pub use ops::*;
pub use scalar::{ConditionUpdate, LeastSquares, Scalar, SelectedEigen};
