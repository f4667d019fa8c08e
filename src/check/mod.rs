//! Fixed-position containment checks.
//!
//! Each function aligns the needle's top-left corner with `(x, y)` in the
//! haystack. Placements that do not fit are a normal outcome and yield
//! `false` or `0`; buffer geometry was already validated by the views.

use crate::color::ColorRange;
use crate::image::{pixel_word, RgbaView};
use crate::mask::pixel_mask;

/// Returns the placement as unsigned coordinates when the needle fits.
pub(crate) fn placement(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    x: isize,
    y: isize,
) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    if x.checked_add(needle.width())? > haystack.width() {
        return None;
    }
    if y.checked_add(needle.height())? > haystack.height() {
        return None;
    }
    Some((x, y))
}

/// Returns true if `needle` equals the haystack window at `(x, y)` byte for byte.
pub fn check_crop(haystack: RgbaView<'_>, needle: RgbaView<'_>, x: isize, y: isize) -> bool {
    match placement(haystack, needle, x, y) {
        Some((x, y)) => crop_equals(haystack, needle, x, y),
        None => false,
    }
}

/// Returns true if the haystack window at `(x, y)`, masked with `rgba_mask`,
/// equals `needle`.
///
/// The needle is compared as-is; callers mask it beforehand with the same mask.
pub fn check_masked_crop(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    x: isize,
    y: isize,
    rgba_mask: u32,
) -> bool {
    match placement(haystack, needle, x, y) {
        Some((x, y)) => masked_crop_equals(haystack, needle, x, y, pixel_mask(rgba_mask)),
        None => false,
    }
}

/// Sums absolute per-channel differences between the masked haystack window
/// at `(x, y)` and `needle`.
///
/// Returns 0 when the needle does not fit at `(x, y)`.
pub fn diff_masked_crop(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    x: isize,
    y: isize,
    rgba_mask: u32,
) -> i64 {
    let Some((x, y)) = placement(haystack, needle, x, y) else {
        return 0;
    };
    let mask = pixel_mask(rgba_mask);

    let mut diff = 0i64;
    for ty in 0..needle.height() {
        let hay_row = haystack.span(x, y + ty, needle.width());
        let needle_row = needle.span(0, ty, needle.width());
        for (hp, np) in hay_row.chunks_exact(4).zip(needle_row.chunks_exact(4)) {
            let masked = (pixel_word(hp) & mask).to_le_bytes();
            for (h, n) in masked.iter().zip(np) {
                diff += i64::from(h.abs_diff(*n));
            }
        }
    }
    diff
}

/// Counts pixels whose thresholded haystack alpha disagrees with the needle.
///
/// Each haystack pixel in the window maps to alpha 255 when its RGB lies in
/// `range` and 0 otherwise, exactly as [`crate::color::threshold`] would. The
/// needle is expected to be a thresholded crop, so only its alpha channel is
/// read. Returns 0 when the needle does not fit at `(x, y)`.
pub fn diff_threshold_crop(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    x: isize,
    y: isize,
    range: ColorRange,
) -> i32 {
    let Some((x, y)) = placement(haystack, needle, x, y) else {
        return 0;
    };

    let mut mismatches = 0i32;
    for ty in 0..needle.height() {
        let hay_row = haystack.span(x, y + ty, needle.width());
        let needle_row = needle.span(0, ty, needle.width());
        for (hp, np) in hay_row.chunks_exact(4).zip(needle_row.chunks_exact(4)) {
            if range.threshold_alpha(hp) != np[3] {
                mismatches += 1;
            }
        }
    }
    mismatches
}

/// Unchecked body of [`check_crop`]; the placement must fit.
pub(crate) fn crop_equals(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    x: usize,
    y: usize,
) -> bool {
    (0..needle.height())
        .all(|ty| haystack.span(x, y + ty, needle.width()) == needle.span(0, ty, needle.width()))
}

/// Unchecked body of [`check_masked_crop`]; `mask` is in pixel word order.
pub(crate) fn masked_crop_equals(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    x: usize,
    y: usize,
    mask: u32,
) -> bool {
    (0..needle.height()).all(|ty| {
        let hay_row = haystack.span(x, y + ty, needle.width());
        let needle_row = needle.span(0, ty, needle.width());
        hay_row
            .chunks_exact(4)
            .zip(needle_row.chunks_exact(4))
            .all(|(hp, np)| pixel_word(hp) & mask == pixel_word(np))
    })
}
