//! Color predicates and per-pixel color filters.

mod hsla;

pub use hsla::rgba_to_hsla;

use crate::image::RgbaViewMut;

/// Inclusive per-channel RGB bounds. Alpha is never inspected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRange {
    pub min_red: u8,
    pub max_red: u8,
    pub min_green: u8,
    pub max_green: u8,
    pub min_blue: u8,
    pub max_blue: u8,
}

impl Default for ColorRange {
    fn default() -> Self {
        Self {
            min_red: 0,
            max_red: 255,
            min_green: 0,
            max_green: 255,
            min_blue: 0,
            max_blue: 255,
        }
    }
}

impl ColorRange {
    /// Creates a range from `(min, max)` pairs for red, green and blue.
    pub fn new(red: (u8, u8), green: (u8, u8), blue: (u8, u8)) -> Self {
        Self {
            min_red: red.0,
            max_red: red.1,
            min_green: green.0,
            max_green: green.1,
            min_blue: blue.0,
            max_blue: blue.1,
        }
    }

    /// Returns true when every channel lies inside its bounds.
    #[inline]
    pub fn contains(&self, r: u8, g: u8, b: u8) -> bool {
        r >= self.min_red
            && r <= self.max_red
            && g >= self.min_green
            && g <= self.max_green
            && b >= self.min_blue
            && b <= self.max_blue
    }

    /// Returns true when the RGB bytes of `px` lie inside the range.
    #[inline]
    pub(crate) fn contains_pixel(&self, px: &[u8]) -> bool {
        self.contains(px[0], px[1], px[2])
    }

    /// Alpha value `threshold` writes for `px`.
    #[inline]
    pub(crate) fn threshold_alpha(&self, px: &[u8]) -> u8 {
        if self.contains_pixel(px) {
            0xff
        } else {
            0
        }
    }
}

/// Replaces each pixel's alpha with 255 inside `range` and 0 outside it.
pub fn threshold(image: &mut RgbaViewMut<'_>, range: ColorRange) {
    for px in image.as_bytes_mut().chunks_exact_mut(4) {
        px[3] = range.threshold_alpha(px);
    }
}
