//! FIFO byte ring over a fixed backing region.

use alloc::vec::Vec;
use core::fmt;

use snafu::ensure;

use crate::error::{AllocFailedSnafu, ModeMismatchSnafu, RingError};
use crate::storage::{Storage, StorageMode};

/// Fixed-capacity, lossy FIFO byte buffer.
///
/// Bytes go in with [`put`](Self::put) and come out with [`get`](Self::get)
/// in arrival order, wrapping around the backing region as needed. Transfers
/// never block and never fail: a request larger than the available space (or
/// data) moves as much as fits and returns the actual count.
///
/// Occupancy is tracked with an explicit byte counter rather than by
/// comparing the cursors, which is what distinguishes a full ring from an
/// empty one when the cursors coincide.
///
/// All mutation goes through `&mut self`; the ring carries no internal
/// synchronization. Cross-thread use requires external mutual exclusion.
pub struct ByteRing<'a> {
    storage: Storage<'a>,
    /// Next offset to read from, in `[0, capacity)`.
    read: usize,
    /// Next offset to write to, in `[0, capacity)`.
    write: usize,
    /// Bytes currently stored, in `[0, capacity]`.
    used: usize,
}

impl<'a> ByteRing<'a> {
    /// Create a ring over a caller-owned region.
    ///
    /// The region is zero-filled and stays borrowed for the ring's lifetime;
    /// the caller keeps ownership and frees it after the ring is gone.
    #[must_use]
    pub fn new_pool(region: &'a mut [u8]) -> Self {
        region.fill(0);
        Self {
            storage: Storage::Pool(region),
            read: 0,
            write: 0,
            used: 0,
        }
    }

    /// Create a ring that allocates its own zero-filled region.
    ///
    /// Fails with [`RingError::AllocFailed`] when the allocator cannot
    /// satisfy the request.
    pub fn new_owned(capacity: usize) -> Result<Self, RingError> {
        let mut ring = Self {
            storage: Storage::Owned(Default::default()),
            read: 0,
            write: 0,
            used: 0,
        };
        ring.bind_owned(capacity)?;
        Ok(ring)
    }

    /// Rebind to a new caller-owned region, zero-filling it.
    ///
    /// Any previous region is detached (pool) or freed (owned) first, and
    /// all bookkeeping restarts from empty.
    pub fn bind_pool(&mut self, region: &'a mut [u8]) {
        region.fill(0);
        self.storage = Storage::Pool(region);
        self.read = 0;
        self.write = 0;
        self.used = 0;
    }

    /// Rebind to a freshly allocated region of `capacity` bytes.
    ///
    /// On allocation failure the ring is left unbound: owned mode, capacity
    /// 0, every transfer returning 0.
    pub fn bind_owned(&mut self, capacity: usize) -> Result<(), RingError> {
        self.storage = Storage::Owned(Default::default());
        self.read = 0;
        self.write = 0;
        self.used = 0;

        let mut region = Vec::new();
        ensure!(
            region.try_reserve_exact(capacity).is_ok(),
            AllocFailedSnafu { requested: capacity }
        );
        region.resize(capacity, 0);
        self.storage = Storage::Owned(region.into_boxed_slice());
        Ok(())
    }

    /// Detach a pool-mode ring from its region.
    ///
    /// The region is not freed; the caller owns it. Afterwards the ring has
    /// capacity 0 until rebound. Fails with [`RingError::ModeMismatch`] on an
    /// owned-mode ring, leaving it untouched.
    pub fn reset_pool(&mut self) -> Result<(), RingError> {
        self.reset(StorageMode::Pool)
    }

    /// Free an owned-mode ring's region.
    ///
    /// Afterwards the ring has capacity 0 until rebound. Fails with
    /// [`RingError::ModeMismatch`] on a pool-mode ring, leaving it untouched.
    pub fn reset_owned(&mut self) -> Result<(), RingError> {
        self.reset(StorageMode::Owned)
    }

    fn reset(&mut self, expected: StorageMode) -> Result<(), RingError> {
        let actual = self.storage.mode();
        ensure!(actual == expected, ModeMismatchSnafu { expected, actual });
        self.storage = self.storage.detached();
        self.read = 0;
        self.write = 0;
        self.used = 0;
        Ok(())
    }

    /// Append as much of `data` as fits, returning the byte count moved.
    ///
    /// The transfer is `min(data.len(), free())` bytes: surplus input is
    /// silently dropped, never an error and never an overwrite of unread
    /// data. A full (or zero-capacity) ring returns 0. Callers needing an
    /// exact-size transfer compare the return value against `data.len()`.
    pub fn put(&mut self, data: &[u8]) -> usize {
        let free = self.free();
        if free == 0 {
            return 0;
        }

        let n = data.len().min(free);
        let tail_run = self.capacity() - self.write;
        let buf = self.storage.as_mut_slice();

        if n < tail_run {
            buf[self.write..self.write + n].copy_from_slice(&data[..n]);
            self.write += n;
        } else {
            // Wraps: fill to the end of the region, remainder at the front.
            buf[self.write..].copy_from_slice(&data[..tail_run]);
            buf[..n - tail_run].copy_from_slice(&data[tail_run..n]);
            self.write = n - tail_run;
        }

        self.used += n;
        n
    }

    /// Remove up to `dest.len()` bytes into `dest`, returning the count moved.
    ///
    /// The transfer is `min(dest.len(), len())` bytes, copied in FIFO order;
    /// only that prefix of `dest` is written. An empty ring returns 0 with
    /// `dest` untouched. Consumed bytes are not cleared in the backing
    /// region; they are merely unreachable until overwritten.
    pub fn get(&mut self, dest: &mut [u8]) -> usize {
        if self.used == 0 {
            return 0;
        }

        let n = dest.len().min(self.used);
        let tail_run = self.capacity() - self.read;
        let buf = self.storage.as_slice();

        if n < tail_run {
            dest[..n].copy_from_slice(&buf[self.read..self.read + n]);
            self.read += n;
        } else {
            dest[..tail_run].copy_from_slice(&buf[self.read..]);
            dest[tail_run..n].copy_from_slice(&buf[..n - tail_run]);
            self.read = n - tail_run;
        }

        self.used -= n;
        n
    }

    /// Bytes currently stored.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.used
    }

    /// Bytes of free space remaining.
    #[inline]
    #[must_use]
    pub fn free(&self) -> usize {
        self.capacity() - self.used
    }

    /// Total size of the backing region.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// True if no bytes are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// True if no free space remains. A zero-capacity ring is always full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.used == self.capacity()
    }

    /// Ownership mode of the backing region.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> StorageMode {
        self.storage.mode()
    }
}

/// An unbound pool-mode ring with capacity 0.
impl Default for ByteRing<'_> {
    fn default() -> Self {
        Self::new_pool(Default::default())
    }
}

impl fmt::Debug for ByteRing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteRing")
            .field("mode", &self.mode())
            .field("capacity", &self.capacity())
            .field("read", &self.read)
            .field("write", &self.write)
            .field("used", &self.used)
            .finish()
    }
}
