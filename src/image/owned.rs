//! Owned RGBA image buffer.

use crate::image::{byte_len, RgbaView, RgbaViewMut};
use crate::util::{RgbaMatchError, RgbaMatchResult};

/// Owned, tightly packed RGBA image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedRgba {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedRgba {
    /// Takes ownership of a packed RGBA buffer of `width * height` pixels.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> RgbaMatchResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(RgbaMatchError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Allocates an image with every pixel set to `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> RgbaMatchResult<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Self::new(data, width, height)
    }

    /// Copies a borrowed view into a new owned image.
    pub fn from_view(view: RgbaView<'_>) -> Self {
        Self {
            data: view.as_bytes().to_vec(),
            width: view.width(),
            height: view.height(),
        }
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the packed RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Overwrites the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> RgbaView<'_> {
        RgbaView {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns a mutable view of the image.
    pub fn view_mut(&mut self) -> RgbaViewMut<'_> {
        RgbaViewMut {
            data: &mut self.data,
            width: self.width,
            height: self.height,
        }
    }
}
