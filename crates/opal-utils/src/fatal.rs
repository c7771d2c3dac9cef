//! Classification of unrecoverable errors and panic propagation
//!
//! A generic catch-and-recover path must never swallow conditions the
//! process cannot meaningfully continue from. [`is_fatal`] classifies an
//! error chain against the conditions that exist in Rust: allocation
//! failure and the `OutOfMemory` / `Interrupted` I/O kinds.
//!
//! [`rethrow`] re-raises a caught panic payload of statically unknown
//! type; it is the propagation half for `catch_unwind` interop. Errors
//! modelled as values need no such helper, they travel in `Result`.

use std::any::Any;
use std::collections::TryReserveError;
use std::error::Error;
use std::io;
use std::panic;

/// Returns `true` if any error in the chain is an unrecoverable runtime
/// condition.
///
/// Walks the `source()` chain and classifies allocation failure
/// ([`TryReserveError`]) and the [`io::ErrorKind::OutOfMemory`] /
/// [`io::ErrorKind::Interrupted`] kinds as fatal.
pub fn is_fatal(error: &(dyn Error + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if err.downcast_ref::<TryReserveError>().is_some() {
            return true;
        }
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::OutOfMemory | io::ErrorKind::Interrupted
            ) {
                return true;
            }
        }
        current = err.source();
    }
    false
}

/// Logical negation of [`is_fatal`].
pub fn is_nonfatal(error: &(dyn Error + 'static)) -> bool {
    !is_fatal(error)
}

/// Re-raises a caught panic payload unchanged.
///
/// The payload's concrete type is not statically known at the call site;
/// propagation goes through [`panic::resume_unwind`] so the payload
/// reaches the next `catch_unwind` boundary verbatim.
pub fn rethrow(payload: Box<dyn Any + Send>) -> ! {
    panic::resume_unwind(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    /// Wrapper error carrying a source, for chain-walking tests.
    #[derive(Debug)]
    struct Wrapped {
        source: io::Error,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped: {}", self.source)
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn test_interrupted_is_fatal() {
        let err = io::Error::new(io::ErrorKind::Interrupted, "interrupted wait");
        assert!(is_fatal(&err));
        assert!(!is_nonfatal(&err));
    }

    #[test]
    fn test_out_of_memory_is_fatal() {
        let err = io::Error::new(io::ErrorKind::OutOfMemory, "allocator gave up");
        assert!(is_fatal(&err));
    }

    #[test]
    fn test_ordinary_errors_are_nonfatal() {
        let err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        assert!(is_nonfatal(&err));
    }

    #[test]
    fn test_allocation_failure_is_fatal() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert!(is_fatal(&err));
    }

    #[test]
    fn test_fatal_detected_through_source_chain() {
        let fatal = Wrapped {
            source: io::Error::new(io::ErrorKind::Interrupted, "interrupted wait"),
        };
        assert!(is_fatal(&fatal));

        let benign = Wrapped {
            source: io::Error::new(io::ErrorKind::NotFound, "missing file"),
        };
        assert!(is_nonfatal(&benign));
    }

    #[test]
    fn test_rethrow_roundtrips_payload() {
        let caught = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        let again = panic::catch_unwind(panic::AssertUnwindSafe(|| rethrow(caught))).unwrap_err();
        assert_eq!(again.downcast_ref::<&str>(), Some(&"boom"));
    }
}
