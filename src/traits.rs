//! Producer/consumer seams over a byte ring.

use crate::ring::ByteRing;

/// Write side of a byte ring.
pub trait RingWrite {
    /// Append as much of `data` as fits; returns the byte count moved.
    fn put(&mut self, data: &[u8]) -> usize;

    /// Bytes of free space remaining.
    fn free(&self) -> usize;

    /// Capacity.
    fn capacity(&self) -> usize;

    /// True if no free space remains.
    fn is_full(&self) -> bool {
        self.free() == 0
    }
}

/// Read side of a byte ring.
pub trait RingRead {
    /// Remove up to `dest.len()` bytes into `dest`; returns the count moved.
    fn get(&mut self, dest: &mut [u8]) -> usize;

    /// Bytes currently stored.
    fn len(&self) -> usize;

    /// True if no bytes are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Combined write and read sides.
pub trait RingIo: RingWrite + RingRead {}

impl<R: RingWrite + RingRead> RingIo for R {}

impl RingWrite for ByteRing<'_> {
    #[inline]
    fn put(&mut self, data: &[u8]) -> usize {
        ByteRing::put(self, data)
    }

    #[inline]
    fn free(&self) -> usize {
        ByteRing::free(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        ByteRing::capacity(self)
    }

    #[inline]
    fn is_full(&self) -> bool {
        ByteRing::is_full(self)
    }
}

impl RingRead for ByteRing<'_> {
    #[inline]
    fn get(&mut self, dest: &mut [u8]) -> usize {
        ByteRing::get(self, dest)
    }

    #[inline]
    fn len(&self) -> usize {
        ByteRing::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        ByteRing::is_empty(self)
    }
}
