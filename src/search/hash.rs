//! Two-dimensional polynomial hash over pixel words.
//!
//! A window's hash treats each column as a polynomial in `KY` over its pixel
//! words (top row highest power), then combines the column hashes as a
//! polynomial in `KX` (leftmost column highest power), all modulo `M`. Both
//! polynomials can be rolled by one row or column in O(1).

use crate::image::{pixel_word, RgbaView};
use crate::util::math::{mul_add_mod, mul_mod, pow_mod, sub_mod};

/// Multiplier across column hashes.
pub(crate) const KX: u32 = 1_000_000_007;
/// Multiplier down a column.
pub(crate) const KY: u32 = 1_000_000_007;
/// Hash modulus.
pub(crate) const M: u32 = 2_000_000_011;

/// Computes the needle hash expected by [`crate::find_crop`] and
/// [`crate::find_masked_crop`].
///
/// For masked searches, mask the needle with [`crate::apply_mask`] first.
pub fn needle_hash(needle: RgbaView<'_>) -> u32 {
    let width = needle.width();
    let bytes = needle.as_bytes();
    let mut hash = 0u32;
    for x in 0..width {
        let mut column = 0u32;
        for y in 0..needle.height() {
            let idx = (y * width + x) * 4;
            column = mul_add_mod(column, KY, pixel_word(&bytes[idx..]), M);
        }
        hash = mul_add_mod(hash, KX, column, M);
    }
    hash
}

/// Rolling state for a needle-sized window sliding over a haystack.
///
/// `columns[x]` holds the hash of haystack column `x` over the current band of
/// `needle_height` rows.
pub(crate) struct RollingHash<'s> {
    columns: &'s mut [u32],
    kx_w: u32,
    ky_h: u32,
}

impl<'s> RollingHash<'s> {
    /// Wraps the caller's scratch; `columns.len()` must equal the haystack width.
    pub(crate) fn new(columns: &'s mut [u32], needle_width: usize, needle_height: usize) -> Self {
        Self {
            columns,
            kx_w: pow_mod(KX, needle_width, M),
            ky_h: pow_mod(KY, needle_height, M),
        }
    }

    /// Hashes every column over the first `rows` haystack rows.
    pub(crate) fn seed_columns(
        &mut self,
        haystack: RgbaView<'_>,
        rows: usize,
        key: impl Fn(u32) -> u32,
    ) {
        self.columns.fill(0);
        for y in 0..rows {
            let row = haystack.span(0, y, self.columns.len());
            for (column, px) in self.columns.iter_mut().zip(row.chunks_exact(4)) {
                *column = mul_add_mod(*column, KY, key(pixel_word(px)), M);
            }
        }
    }

    /// Moves every column band down one row: adds row `enter`, drops row `leave`.
    pub(crate) fn roll_down(
        &mut self,
        haystack: RgbaView<'_>,
        enter: usize,
        leave: usize,
        key: impl Fn(u32) -> u32,
    ) {
        let width = self.columns.len();
        let entering = haystack.span(0, enter, width).chunks_exact(4);
        let leaving = haystack.span(0, leave, width).chunks_exact(4);
        for ((column, new_px), old_px) in self.columns.iter_mut().zip(entering).zip(leaving) {
            let added = mul_add_mod(*column, KY, key(pixel_word(new_px)), M);
            *column = sub_mod(added, mul_mod(key(pixel_word(old_px)), self.ky_h, M), M);
        }
    }

    /// Hash of the window whose columns are `0..width`.
    pub(crate) fn first_window(&self, width: usize) -> u32 {
        self.columns[..width]
            .iter()
            .fold(0, |hash, &column| mul_add_mod(hash, KX, column, M))
    }

    /// Slides a window hash one column right, so it covers `enter - width + 1..=enter`.
    pub(crate) fn roll_right(&self, hash: u32, enter: usize, width: usize) -> u32 {
        let added = mul_add_mod(hash, KX, self.columns[enter], M);
        sub_mod(added, mul_mod(self.columns[enter - width], self.kx_w, M), M)
    }
}
