//! Error values returned by strict `Maybe` operations.

use thiserror::Error;

/// Errors that strict container operations return as values.
///
/// Every violation is reported synchronously at the call site. The library
/// performs no retries and no recovery; error-handling policy belongs to
/// the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum MaybeError {
    /// Checked value access on an `Absent` container.
    #[error("no value present in an `Absent` container")]
    EmptyValueAccess,

    /// A strict nullable-interop bind received no container where the
    /// mapper was contractually required to produce one.
    ///
    /// [`Maybe::flat_map_safely`](crate::Maybe::flat_map_safely) is the
    /// designated escape hatch that coerces this condition to `Absent`
    /// instead.
    #[error("bind mapper returned no container where one was required")]
    NullResult,
}
