//! Bitmap to display RAM transcoding
//!
//! In vertical addressing mode every data byte fills 8 rows of one column, and the
//! controller moves down through the pages of a column before stepping to the next
//! column. The bitmap is therefore sampled as if it were rotated 90° counter-clockwise:
//! output columns run from the bitmap's rightmost column to its leftmost one, and within
//! a column from the top page to the bottom page. Bit `k` of a byte is row `k` of its
//! page.

use crate::{
    bitmap::MonoBitmap,
    error::{Error, Result},
};

/// Iterator over the packed page bytes of a bitmap
#[derive(Debug, Clone)]
pub struct PageBytes<B> {
    bitmap: B,
    width: u32,
    pages: u32,
    index: u32,
}

impl<B: MonoBitmap> PageBytes<B> {
    /// Check that `bitmap` is exactly `width` pixels wide and a whole number of pages
    /// tall, and prepare to stream its bytes
    pub fn new(bitmap: B, width: u32) -> Result<Self> {
        let (w, h) = bitmap.size();
        if w != width || h < 8 || h % 8 != 0 {
            return Err(Error::DimensionMismatch {
                expected: (width, h.max(8).next_multiple_of(8)),
                actual: (w, h),
            });
        }

        Ok(Self {
            bitmap,
            width,
            pages: h / 8,
            index: 0,
        })
    }

    /// Total number of bytes produced, `width * pages`
    pub fn byte_count(&self) -> usize {
        (self.width * self.pages) as usize
    }

    fn byte_at(&self, index: u32) -> u8 {
        let x = self.width - 1 - index / self.pages;
        let top = (index % self.pages) * 8;

        (0..8).fold(0u8, |byte, k| {
            if self.bitmap.pixel(x, top + k) {
                byte | (1u8 << k)
            } else {
                byte
            }
        })
    }
}

impl<B: MonoBitmap> Iterator for PageBytes<B> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.index as usize >= self.byte_count() {
            return None;
        }
        let byte = self.byte_at(self.index);
        self.index += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.byte_count() - self.index as usize;
        (left, Some(left))
    }
}

impl<B: MonoBitmap> ExactSizeIterator for PageBytes<B> {}

/// Transcode `bitmap` into `out`, returning the number of bytes written
///
/// `out` must hold at least `width * height / 8` bytes.
pub fn transcode_into<B: MonoBitmap>(bitmap: B, width: u32, out: &mut [u8]) -> Result<usize> {
    let bytes = PageBytes::new(bitmap, width)?;
    let len = bytes.byte_count();
    if out.len() < len {
        return Err(Error::DimensionMismatch {
            expected: (len as u32, 1),
            actual: (out.len() as u32, 1),
        });
    }
    for (slot, byte) in out.iter_mut().zip(bytes) {
        *slot = byte;
    }

    Ok(len)
}
