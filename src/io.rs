//! `std::io` adapters.
//!
//! The ring's lossy contract maps directly onto the short-transfer contract
//! of `Read` and `Write`: a full ring writes 0 bytes, an empty ring reads 0
//! bytes, and neither is an I/O error.

use std::io::{Read, Result, Write};

use crate::ring::ByteRing;

impl Write for ByteRing<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(self.put(buf))
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Read for ByteRing<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.get(buf))
    }
}
