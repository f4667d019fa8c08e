//! Needle search over a haystack.
//!
//! The search is a two-dimensional Rabin-Karp scan: a rolling hash filters
//! placements and every hash hit is re-verified before it is counted.

pub(crate) mod hash;
pub(crate) mod scan;

use crate::image::RgbaView;
use crate::kernel::{Exact, Masked};
use crate::util::RgbaMatchResult;

pub use hash::needle_hash;
pub use scan::scan_with_kernel;

/// Outcome of a needle search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Number of confirmed placements.
    pub count: usize,
    /// Column of the last confirmed placement in row-major scan order.
    pub last_x: usize,
    /// Row of the last confirmed placement in row-major scan order.
    pub last_y: usize,
}

impl MatchResult {
    /// Returns the last confirmed placement, or `None` when nothing matched.
    pub fn last_match(&self) -> Option<(usize, usize)> {
        (self.count > 0).then_some((self.last_x, self.last_y))
    }

    fn record(&mut self, x: usize, y: usize) {
        self.count += 1;
        self.last_x = x;
        self.last_y = y;
    }
}

/// Number of `u32` scratch entries a search over `haystack` needs.
pub fn scratch_len(haystack: RgbaView<'_>) -> usize {
    haystack.width()
}

/// Finds every exact occurrence of `needle` in `haystack`.
///
/// `hash` must come from [`needle_hash`] on the same needle. `scratch` holds
/// one column hash per haystack column and must have at least
/// [`scratch_len`] entries.
pub fn find_crop(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    hash: u32,
    scratch: &mut [u32],
) -> RgbaMatchResult<MatchResult> {
    scan_with_kernel(haystack, needle, hash, &Exact, scratch)
}

/// Finds every occurrence of a pre-masked `needle` in `haystack` under `rgba_mask`.
///
/// The needle must already be masked with the same mask (see
/// [`crate::apply_mask`]) before `hash` is computed with [`needle_hash`].
pub fn find_masked_crop(
    haystack: RgbaView<'_>,
    needle: RgbaView<'_>,
    rgba_mask: u32,
    hash: u32,
    scratch: &mut [u32],
) -> RgbaMatchResult<MatchResult> {
    scan_with_kernel(haystack, needle, hash, &Masked::new(rgba_mask), scratch)
}
