//! Mode-tagged backing storage.

use alloc::boxed::Box;
use core::fmt;

/// How a ring's backing region is owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Region is borrowed from the caller, who retains ownership.
    Pool,
    /// Region was allocated by the ring and is freed on reset or drop.
    Owned,
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageMode::Pool => f.write_str("pool"),
            StorageMode::Owned => f.write_str("owned"),
        }
    }
}

/// Backing region, tagged by ownership.
///
/// A reset keeps the mode but swaps the region for an empty one, so a reset
/// ring still answers queries (capacity 0) and can be rebound later.
pub(crate) enum Storage<'a> {
    Pool(&'a mut [u8]),
    Owned(Box<[u8]>),
}

impl Storage<'_> {
    #[inline]
    pub(crate) fn mode(&self) -> StorageMode {
        match self {
            Storage::Pool(_) => StorageMode::Pool,
            Storage::Owned(_) => StorageMode::Owned,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        match self {
            Storage::Pool(region) => region.len(),
            Storage::Owned(region) => region.len(),
        }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Pool(region) => region,
            Storage::Owned(region) => region,
        }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::Pool(region) => region,
            Storage::Owned(region) => region,
        }
    }

    /// Empty region of the same mode. Dropping the old value detaches a
    /// pool borrow or frees an owned allocation.
    #[inline]
    pub(crate) fn detached(&self) -> Storage<'static> {
        match self {
            Storage::Pool(_) => Storage::Pool(Default::default()),
            Storage::Owned(_) => Storage::Owned(Box::default()),
        }
    }
}
