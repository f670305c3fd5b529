//! Error type for ring buffer operations.

use snafu::Snafu;

use crate::storage::StorageMode;

/// Error returned by fallible ring operations.
///
/// Truncated transfers are not errors: [`put`](crate::ByteRing::put) and
/// [`get`](crate::ByteRing::get) report them through their return count.
#[derive(Debug, Snafu, Clone, Copy, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum RingError {
    /// Owned-mode initialization could not allocate the backing region.
    ///
    /// The ring is left unbound: owned mode, capacity 0. The caller may retry
    /// with a smaller capacity.
    #[snafu(display("allocation of {requested} byte backing region failed"))]
    AllocFailed {
        /// Capacity that was requested.
        requested: usize,
    },

    /// A reset was called against the wrong storage mode.
    ///
    /// Nothing is mutated: this guards against freeing a region the ring does
    /// not own, or leaking one it does.
    #[snafu(display("reset expects {expected} storage, ring is {actual}"))]
    ModeMismatch {
        /// Mode the reset operation applies to.
        expected: StorageMode,
        /// Mode the ring is actually in.
        actual: StorageMode,
    },
}
