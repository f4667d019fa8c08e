//! Pixel comparison kernels shared by the hash-accelerated search.
//!
//! A kernel decides which bits of a pixel take part in the match: it maps a
//! haystack pixel word to the value fed into the rolling hash, and confirms a
//! hash hit with a full comparison.

use crate::check::{crop_equals, masked_crop_equals};
use crate::image::RgbaView;
use crate::mask::pixel_mask;

/// Kernel trait for hashing and verifying haystack placements.
pub trait Kernel {
    /// Maps a little-endian haystack pixel word to its hashed value.
    fn key(&self, pixel: u32) -> u32;

    /// Confirms that `needle` matches the haystack at `(x, y)`.
    ///
    /// The placement is guaranteed to fit inside the haystack.
    fn confirm(&self, haystack: RgbaView<'_>, needle: RgbaView<'_>, x: usize, y: usize) -> bool;
}

/// Byte-exact comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exact;

/// Comparison under a channel mask; the needle is expected to be pre-masked.
#[derive(Clone, Copy, Debug)]
pub struct Masked {
    word_mask: u32,
}

impl Masked {
    /// Creates a kernel from a `0xRRGGBBAA` mask.
    pub fn new(rgba_mask: u32) -> Self {
        Self {
            word_mask: pixel_mask(rgba_mask),
        }
    }
}

impl Kernel for Exact {
    #[inline]
    fn key(&self, pixel: u32) -> u32 {
        pixel
    }

    fn confirm(&self, haystack: RgbaView<'_>, needle: RgbaView<'_>, x: usize, y: usize) -> bool {
        crop_equals(haystack, needle, x, y)
    }
}

impl Kernel for Masked {
    #[inline]
    fn key(&self, pixel: u32) -> u32 {
        pixel & self.word_mask
    }

    fn confirm(&self, haystack: RgbaView<'_>, needle: RgbaView<'_>, x: usize, y: usize) -> bool {
        masked_crop_equals(haystack, needle, x, y, self.word_mask)
    }
}
