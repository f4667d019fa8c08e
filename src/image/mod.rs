//! Validated RGBA buffer views.
//!
//! Every buffer in this crate is tightly packed RGBA: row-major, four bytes per
//! pixel, `stride == width * 4`, no row padding. The view types pair a byte
//! slice with its geometry and check `len == width * height * 4` once at
//! construction, so the matching kernels can index rows without re-validating.

use crate::util::{RgbaMatchError, RgbaMatchResult};

#[cfg(feature = "image-io")]
pub mod io;
mod owned;

pub use owned::OwnedRgba;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Borrowed, read-only RGBA image.
#[derive(Copy, Clone, Debug)]
pub struct RgbaView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

/// Borrowed, mutable RGBA image.
#[derive(Debug)]
pub struct RgbaViewMut<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> RgbaView<'a> {
    /// Wraps a packed RGBA buffer of `width * height` pixels.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> RgbaMatchResult<Self> {
        check_len(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// Returns the backing bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the bytes of row `y`.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride();
        self.data.get(start..start + self.stride())
    }

    /// Returns the `[r, g, b, a]` bytes at `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * BYTES_PER_PIXEL;
        let px = self.data.get(idx..idx + BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Returns `width` bytes-per-pixel-aligned bytes starting at pixel `(x, y)`.
    pub(crate) fn span(&self, x: usize, y: usize, width: usize) -> &'a [u8] {
        let start = (y * self.width + x) * BYTES_PER_PIXEL;
        &self.data[start..start + width * BYTES_PER_PIXEL]
    }

    /// Copies the window `(x, y, width, height)` into `target`.
    ///
    /// `target` is resized to exactly `width * height * 4` bytes; its existing
    /// allocation is reused when the capacity is large enough.
    pub fn crop_into(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        target: &mut Vec<u8>,
    ) -> RgbaMatchResult<()> {
        if width == 0 || height == 0 {
            return Err(RgbaMatchError::InvalidDimensions { width, height });
        }
        let fits_x = x.checked_add(width).is_some_and(|end| end <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|end| end <= self.height);
        if !fits_x || !fits_y {
            return Err(RgbaMatchError::RoiOutOfBounds {
                x,
                y,
                width,
                height,
                img_width: self.width,
                img_height: self.height,
            });
        }

        target.clear();
        target.reserve(width * height * BYTES_PER_PIXEL);
        for row in y..y + height {
            target.extend_from_slice(self.span(x, row, width));
        }
        Ok(())
    }

    /// Copies the window `(x, y, width, height)` into a new owned image.
    pub fn crop(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> RgbaMatchResult<OwnedRgba> {
        let mut data = Vec::new();
        self.crop_into(x, y, width, height, &mut data)?;
        OwnedRgba::new(data, width, height)
    }
}

impl<'a> RgbaViewMut<'a> {
    /// Wraps a mutable packed RGBA buffer of `width * height` pixels.
    pub fn from_slice(data: &'a mut [u8], width: usize, height: usize) -> RgbaMatchResult<Self> {
        check_len(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> RgbaView<'_> {
        RgbaView {
            data: &*self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the backing bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    /// Returns the backing bytes mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}

/// Returns `width * height * 4`, or an error for empty or overflowing geometry.
pub(crate) fn byte_len(width: usize, height: usize) -> RgbaMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(RgbaMatchError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(BYTES_PER_PIXEL))
        .ok_or(RgbaMatchError::InvalidDimensions { width, height })
}

fn check_len(got: usize, width: usize, height: usize) -> RgbaMatchResult<()> {
    let expected = byte_len(width, height)?;
    if got != expected {
        return Err(RgbaMatchError::BufferSizeMismatch { expected, got });
    }
    Ok(())
}

/// Reads the pixel starting at `bytes[0]` as a little-endian word.
///
/// On the little-endian layout `r` lands in the low byte and `a` in the high
/// byte, which is the order masks are converted into.
#[inline]
pub(crate) fn pixel_word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
