//! Hash-filtered exhaustive scan over every needle placement.

use crate::image::RgbaView;
use crate::kernel::Kernel;
use crate::search::hash::RollingHash;
use crate::search::MatchResult;
use crate::trace::{trace_event, trace_span};
use crate::util::{RgbaMatchError, RgbaMatchResult};

/// Scans every placement of `needle` inside `haystack` with a rolling hash.
///
/// Placements whose window hash equals `needle_hash` are confirmed with
/// `kernel` before they count, so hash collisions never produce matches.
/// `scratch` must hold at least `haystack.width()` entries; its contents are
/// overwritten.
pub fn scan_with_kernel<K: Kernel>(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    needle_hash: u32,
    kernel: &K,
    scratch: &mut [u32],
) -> RgbaMatchResult<MatchResult> {
    let hay_width = haystack.width();
    let hay_height = haystack.height();
    if scratch.len() < hay_width {
        return Err(RgbaMatchError::ScratchTooSmall {
            needed: hay_width,
            got: scratch.len(),
        });
    }

    let mut result = MatchResult::default();
    let width = needle.width();
    let height = needle.height();
    if width > hay_width || height > hay_height {
        return Ok(result);
    }

    let _span = trace_span!(
        "scan_with_kernel",
        hay_width = hay_width,
        hay_height = hay_height,
        needle_width = width,
        needle_height = height
    )
    .entered();

    let key = |px: u32| kernel.key(px);
    let mut rolling = RollingHash::new(&mut scratch[..hay_width], width, height);
    rolling.seed_columns(haystack, height, key);

    let mut hash_hits = 0usize;
    for top in 0..=hay_height - height {
        if top > 0 {
            rolling.roll_down(haystack, top + height - 1, top - 1, key);
        }
        let mut hash = rolling.first_window(width);
        for left in 0..=hay_width - width {
            if left > 0 {
                hash = rolling.roll_right(hash, left + width - 1, width);
            }
            if hash != needle_hash {
                continue;
            }
            hash_hits += 1;
            if kernel.confirm(haystack, needle, left, top) {
                result.record(left, top);
            }
        }
    }

    trace_event!("scan_done", hash_hits = hash_hits, matches = result.count);
    Ok(result)
}
