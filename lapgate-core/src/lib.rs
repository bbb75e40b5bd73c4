//! # lapgate-core
//!
//! Shared infrastructure for the lapgate dispatch layer.
//!
//! This crate provides:
//! - **FFI**: raw Fortran declarations for the LAPACK/BLAS entry points the
//!   dispatch layer calls (compiled only with the `lapack` feature).
//! - **Workspace**: typed, call-scoped scratch buffers for kernels with
//!   variable workspace requirements.
//! - **Selectors**: uplo/transpose/side/diag/job/range enums carrying their
//!   Fortran character codes as discriminants.
//! - **Errors**: the uniform status-code classification shared by every
//!   operation.
//! - **Backend**: the native-availability capability, selectable at build
//!   time (cargo feature) and at startup (runtime switch).

pub mod backend;
pub mod error;
pub mod types;
pub mod workspace;

// Raw Fortran bindings (only compiled when --features lapack is enabled)
#[cfg(feature = "lapack")]
pub mod ffi;

pub use backend::{native_enabled, set_native_enabled};
pub use error::{classify, Error, Result};
pub use types::{Diag, EigenJob, EigenRange, MatrixNorm, ScaleShape, Side, SvdJob, Transpose, Uplo};
pub use workspace::{Workspace, WORK_QUERY};
