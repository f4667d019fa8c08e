//! Color-predicate region detection.
//!
//! Puddles are connected regions grown by flood fill; pillars are the tallest
//! vertical runs of matching pixels. Puddle search marks visited pixels by
//! zeroing their alpha byte in place, so the buffer must be restored with
//! [`reset_puddles`] before it is searched again or used for anything that
//! reads alpha.

mod pillar;
mod puddle;

pub use pillar::{find_pillars, Pillar};
pub use puddle::{find_puddle, find_puddle_with};

use crate::image::{RgbaView, RgbaViewMut};
use crate::util::{RgbaMatchError, RgbaMatchResult};

/// Pixel coordinate written by [`find_puddle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Neighborhood used when growing a puddle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Edge neighbors only.
    #[default]
    FourWay,
    /// Edge and corner neighbors.
    EightWay,
}

impl Connectivity {
    pub(crate) fn offsets(self) -> &'static [(isize, isize)] {
        static FOUR: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        static EIGHT: [(isize, isize); 8] = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (-1, 1),
            (1, -1),
            (-1, -1),
        ];
        match self {
            Connectivity::FourWay => &FOUR,
            Connectivity::EightWay => &EIGHT,
        }
    }
}

/// Sets every pixel's alpha to 255, clearing the marks left by [`find_puddle`].
pub fn reset_puddles(image: &mut RgbaViewMut<'_>) {
    for px in image.as_bytes_mut().chunks_exact_mut(4) {
        px[3] = 0xff;
    }
}

/// Region outputs use `i32` coordinates.
fn check_coordinate_range(image: RgbaView<'_>) -> RgbaMatchResult<()> {
    let limit = i32::MAX as usize;
    if image.width() > limit || image.height() > limit {
        return Err(RgbaMatchError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(())
}
