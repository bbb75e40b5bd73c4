//! Native-backend availability.
//!
//! The `lapack` cargo feature decides whether the Fortran bindings are
//! compiled at all. On top of that a process-wide switch lets a host disable
//! the native path at startup (and lets tests exercise the unavailable path
//! in a native build). Operations consult [`ensure`] before touching FFI and
//! report [`Error::BackendUnavailable`] with their own routine name when the
//! backend is absent.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

static NATIVE_DISABLED: AtomicBool = AtomicBool::new(false);

/// True when the native LAPACK path is compiled in and not disabled.
#[inline]
pub fn native_enabled() -> bool {
    cfg!(feature = "lapack") && !NATIVE_DISABLED.load(Ordering::Relaxed)
}

/// Enable or disable the native path at runtime. Disabling never silently
/// degrades results: every operation fails with its own routine name.
pub fn set_native_enabled(enabled: bool) {
    NATIVE_DISABLED.store(!enabled, Ordering::Relaxed);
}

/// Guard used at the top of every operation.
#[inline]
pub fn ensure(routine: &'static str) -> Result<()> {
    if native_enabled() {
        Ok(())
    } else {
        Err(Error::BackendUnavailable { routine })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the switch is process-wide state, and the harness runs
    // tests concurrently.
    #[test]
    fn test_runtime_switch_controls_ensure() {
        set_native_enabled(false);
        let err = ensure("dgeev").unwrap_err();
        assert_eq!(err, Error::BackendUnavailable { routine: "dgeev" });
        assert_eq!(err.to_string(), "dgeev: native LAPACK backend not available");

        set_native_enabled(true);
        #[cfg(feature = "lapack")]
        assert!(ensure("dgetrf").is_ok());
        #[cfg(not(feature = "lapack"))]
        assert!(ensure("dgetrf").is_err());
    }
}
