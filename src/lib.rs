//! RgbaMatch locates and verifies sub-images inside packed RGBA buffers.
//!
//! The crate covers fixed-position crop checks (exact, masked, and
//! difference-based), a two-dimensional rolling-hash needle search, and
//! color-predicate region detection (flood-filled "puddles" and vertical
//! "pillars"). All functions are synchronous and work on caller-owned
//! buffers; searches never allocate on their inner loops.
//!
//! Buffers are wrapped in [`RgbaView`] / [`RgbaViewMut`], which validate
//! `len == width * height * 4` once at construction.

pub mod check;
pub mod color;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod mask;
pub mod region;
pub mod search;
pub(crate) mod trace;
pub mod util;

pub use crate::check::{check_crop, check_masked_crop, diff_masked_crop, diff_threshold_crop};
pub use crate::color::{rgba_to_hsla, threshold, ColorRange};
pub use crate::image::{OwnedRgba, RgbaView, RgbaViewMut};
pub use crate::mask::{apply_mask, build_mask, FULL_MASK};
pub use crate::region::{
    find_pillars, find_puddle, find_puddle_with, reset_puddles, Connectivity, Pillar, Point,
};
pub use crate::search::{find_crop, find_masked_crop, needle_hash, scratch_len, MatchResult};
pub use crate::util::{RgbaMatchError, RgbaMatchResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
