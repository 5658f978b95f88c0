//! Fixed-offset byte regions.
//!
//! Encrypted modules are a fixed binary contract: every field lives at a known
//! offset with a known length. [`Region`] names such a window so layout code
//! reads as `TAG_BLOCK.copy_to(buf, 0x00)` instead of bare slice arithmetic.
//!
//! Most accessors (`slice`, `slice_mut`, `copy_to`, ...) index the buffer
//! directly and panic when the region does not fit. Callers validate the buffer
//! length once up front and then use them freely. [`Region::get`] is the checked
//! form for reads from buffers of unknown length.

use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};

use crate::{Error, Result};

/// A window of `len` bytes starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Start of the region.
    pub offset: usize,
    /// Length of the region in bytes.
    pub len: usize,
}

impl Region {
    /// Create a new region.
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// One past the last byte of the region.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The region as a range, for slicing.
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// The same length placed at another offset.
    #[inline]
    pub const fn at(&self, offset: usize) -> Self {
        Self::new(offset, self.len)
    }

    /// Check whether the region fits in a buffer of `len` bytes.
    #[inline]
    pub const fn fits(&self, len: usize) -> bool {
        self.end() <= len
    }

    /// Borrow the region, failing if the buffer is too short.
    pub fn get<'a>(&self, buf: &'a [u8]) -> Result<&'a [u8]> {
        self.check(buf.len())?;
        Ok(&buf[self.range()])
    }

    /// Borrow the region.
    #[inline]
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.range()]
    }

    /// Mutably borrow the region.
    #[inline]
    pub fn slice_mut<'a>(&self, buf: &'a mut [u8]) -> &'a mut [u8] {
        &mut buf[self.range()]
    }

    /// Copy the region out into a fixed-size array.
    ///
    /// `N` must equal the region length.
    #[inline]
    pub fn snapshot<const N: usize>(&self, buf: &[u8]) -> [u8; N] {
        debug_assert_eq!(N, self.len);
        let mut out = [0u8; N];
        out.copy_from_slice(self.slice(buf));
        out
    }

    /// Overwrite the region with `src`, which must have the region's length.
    #[inline]
    pub fn write(&self, buf: &mut [u8], src: &[u8]) {
        self.slice_mut(buf).copy_from_slice(src);
    }

    /// Copy the region to `dest` within the same buffer.
    ///
    /// Overlapping source and destination behave like `memmove`.
    #[inline]
    pub fn copy_to(&self, buf: &mut [u8], dest: usize) {
        buf.copy_within(self.range(), dest);
    }

    /// Fill the region with `byte`.
    #[inline]
    pub fn fill(&self, buf: &mut [u8], byte: u8) {
        self.slice_mut(buf).fill(byte);
    }

    /// Write a little-endian word at the start of the region.
    #[inline]
    pub fn write_u32(&self, buf: &mut [u8], value: u32) {
        LittleEndian::write_u32(&mut buf[self.offset..self.offset + 4], value);
    }

    fn check(&self, len: usize) -> Result<()> {
        if self.fits(len) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                offset: self.offset,
                end: self.end(),
                len,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_and_end() {
        let block = Region::new(0xD0, 0x80);
        assert_eq!(block.at(0x00), Region::new(0x00, 0x80));
        assert_eq!(block.end(), 0x150);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let data = [0u8; 0x10];
        assert!(Region::new(0x08, 0x08).get(&data).is_ok());
        assert!(matches!(
            Region::new(0x08, 0x09).get(&data),
            Err(Error::OutOfBounds { end: 0x11, len: 0x10, .. })
        ));
    }

    #[test]
    fn test_word_access() {
        let mut data = [0u8; 8];
        Region::new(4, 4).write_u32(&mut data, 0x014C);
        assert_eq!(data[4..8], [0x4C, 0x01, 0x00, 0x00]);
        assert_eq!(LittleEndian::read_u32(Region::new(4, 4).get(&data).unwrap()), 0x014C);
    }

    #[test]
    fn test_copy_to_overlapping() {
        let mut data = *b"abcdefgh";
        Region::new(0, 4).copy_to(&mut data, 2);
        assert_eq!(&data, b"ababcdgh");
    }
}
