//! Status-code classification shared by every operation.
//!
//! The convention is LAPACK's own: info == 0 is success, info < 0 names the
//! illegal argument position, info > 0 is operation-specific and left to the
//! caller (singular pivot, unconverged count, ...). Only the negative case is
//! an error here; positive codes travel back as ordinary outputs because the
//! partial results are still meaningful.

use thiserror::Error;

/// Errors reported by the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The native kernel rejected argument `index` (1-based, in the kernel's
    /// own argument order).
    #[error("{routine}: illegal value for argument {index}")]
    IllegalArgument { routine: &'static str, index: i32 },

    /// The native backend is compiled out or disabled; no numeric fallback
    /// exists, so the call cannot proceed.
    #[error("{routine}: native LAPACK backend not available")]
    BackendUnavailable { routine: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Map a raw info code to the uniform contract: negative becomes
/// [`Error::IllegalArgument`], everything else is handed back unchanged.
#[inline]
pub fn classify(routine: &'static str, info: i32) -> Result<i32> {
    if info < 0 {
        Err(Error::IllegalArgument {
            routine,
            index: -info,
        })
    } else {
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success() {
        assert_eq!(classify("dgetrf", 0), Ok(0));
    }

    #[test]
    fn test_classify_positive_passthrough() {
        // Singular U(2,2) from an LU factorization is not an error here.
        assert_eq!(classify("dgetrf", 2), Ok(2));
    }

    #[test]
    fn test_classify_negative() {
        assert_eq!(
            classify("dpotrf", -4),
            Err(Error::IllegalArgument {
                routine: "dpotrf",
                index: 4
            })
        );
    }

    #[test]
    fn test_error_message_names_routine_and_position() {
        let e = Error::IllegalArgument {
            routine: "zgelss",
            index: 5,
        };
        assert_eq!(e.to_string(), "zgelss: illegal value for argument 5");
    }
}
