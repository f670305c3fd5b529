//! A `no_std` byte ring buffer over borrowed or owned backing storage.
//!
//! [`ByteRing`] moves bytes between a single-threaded writer and reader in
//! strict FIFO order, never blocking and never growing: when a transfer is
//! larger than the space (or data) available, the surplus is truncated and the
//! call reports how many bytes actually moved.
//!
//! # Pool storage
//!
//! The caller supplies the backing region and keeps ownership of it:
//!
//! ```
//! use byte_ring::ByteRing;
//!
//! let mut region = [0u8; 8];
//! let mut ring = ByteRing::new_pool(&mut region);
//!
//! assert_eq!(ring.put(b"hello"), 5);
//!
//! let mut out = [0u8; 8];
//! let n = ring.get(&mut out);
//! assert_eq!(&out[..n], b"hello");
//! ```
//!
//! # Owned storage
//!
//! The ring allocates its own region and frees it on reset or drop:
//!
//! ```
//! use byte_ring::ByteRing;
//!
//! let mut ring = ByteRing::new_owned(64)?;
//! ring.put(b"ping");
//! ring.reset_owned()?;
//! assert_eq!(ring.capacity(), 0);
//! # Ok::<(), byte_ring::RingError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod ring;
mod storage;
mod traits;

#[cfg(feature = "std")]
mod io;


pub use error::RingError;
pub use ring::ByteRing;
pub use storage::StorageMode;
pub use traits::{RingIo, RingRead, RingWrite};
