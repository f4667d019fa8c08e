//! Tallest vertical runs ("pillars") of matching pixels.

use std::cmp::Ordering;

use crate::color::ColorRange;
use crate::image::RgbaView;
use crate::region::check_coordinate_range;
use crate::trace::{trace_event, trace_span};
use crate::util::RgbaMatchResult;

/// A maximal vertical run of matching pixels in one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pillar {
    /// Number of pixels in the run; 0 marks an unused output slot.
    pub height: i32,
    /// Column of the run.
    pub x: i32,
    /// First row of the run.
    pub top: i32,
    /// Last row of the run, inclusive.
    pub bottom: i32,
}

impl Pillar {
    /// Returns `[height, x, top, bottom]`.
    pub fn to_array(self) -> [i32; 4] {
        [self.height, self.x, self.top, self.bottom]
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }
}

/// Taller first; among equal heights, earlier in column-major scan order first.
fn pillar_cmp_desc(a: &Pillar, b: &Pillar) -> Ordering {
    b.height
        .cmp(&a.height)
        .then_with(|| a.x.cmp(&b.x))
        .then_with(|| a.top.cmp(&b.top))
}

/// Keeps the best `slots.len()` pillars inside caller-owned storage.
struct PillarSlots<'a> {
    slots: &'a mut [Pillar],
    worst: usize,
}

impl<'a> PillarSlots<'a> {
    fn new(slots: &'a mut [Pillar]) -> Self {
        slots.fill(Pillar::default());
        Self { slots, worst: 0 }
    }

    fn push(&mut self, pillar: Pillar) {
        let worst = &self.slots[self.worst];
        if !worst.is_empty() && pillar_cmp_desc(&pillar, worst) != Ordering::Less {
            return;
        }
        self.slots[self.worst] = pillar;

        // Empty slots sort after every real pillar, so they are filled first.
        let mut worst_idx = 0usize;
        for idx in 1..self.slots.len() {
            if rank_after(&self.slots[idx], &self.slots[worst_idx]) {
                worst_idx = idx;
            }
        }
        self.worst = worst_idx;
    }

    fn finish(self) -> usize {
        self.slots.sort_by(|a, b| match (a.is_empty(), b.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => pillar_cmp_desc(a, b),
        });
        self.slots.iter().take_while(|p| !p.is_empty()).count()
    }
}

fn rank_after(a: &Pillar, b: &Pillar) -> bool {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => !b.is_empty(),
        (false, true) => false,
        (false, false) => pillar_cmp_desc(a, b) == Ordering::Greater,
    }
}

/// Finds the `out.len()` tallest vertical runs of pixels whose RGB lies in `range`.
///
/// Every column is scanned top to bottom; a run ends at a non-matching pixel
/// or at the bottom edge. Ties in height go to the run found first in
/// column-major order (leftmost, then topmost). On return `out` is sorted by
/// descending height with that same tie order, and slots left unused when the
/// image has fewer runs than `out.len()` are zeroed. The buffer is not
/// modified.
///
/// Returns the number of filled slots.
pub fn find_pillars(
    image: RgbaView<'_>,
    range: ColorRange,
    out: &mut [Pillar],
) -> RgbaMatchResult<usize> {
    check_coordinate_range(image)?;
    let mut slots = PillarSlots::new(out);
    if slots.slots.is_empty() {
        return Ok(0);
    }

    let _span = trace_span!(
        "find_pillars",
        width = image.width(),
        height = image.height(),
        k = slots.slots.len()
    )
    .entered();

    let width = image.width();
    let height = image.height();
    let data = image.as_bytes();
    let mut runs = 0usize;
    for x in 0..width {
        let mut run = 0usize;
        for y in 0..=height {
            let inside = y < height && {
                let idx = (y * width + x) * 4;
                range.contains_pixel(&data[idx..idx + 4])
            };
            if inside {
                run += 1;
                continue;
            }
            if run > 0 {
                runs += 1;
                slots.push(Pillar {
                    height: run as i32,
                    x: x as i32,
                    top: (y - run) as i32,
                    bottom: (y - 1) as i32,
                });
            }
            run = 0;
        }
    }

    let filled = slots.finish();
    trace_event!("pillars_done", runs = runs, filled = filled);
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::{find_pillars, Pillar};
    use crate::color::ColorRange;
    use crate::image::OwnedRgba;

    const HIT: [u8; 4] = [250, 180, 60, 255];
    const MISS: [u8; 4] = [10, 10, 10, 255];

    fn range() -> ColorRange {
        ColorRange::new((230, 255), (150, 220), (0, 120))
    }

    fn column(img: &mut OwnedRgba, x: usize, rows: std::ops::Range<usize>) {
        for y in rows {
            img.put_pixel(x, y, HIT);
        }
    }

    #[test]
    fn keeps_tallest_runs_sorted() {
        let mut img = OwnedRgba::filled(4, 6, MISS).unwrap();
        column(&mut img, 0, 0..2);
        column(&mut img, 0, 3..6);
        column(&mut img, 2, 1..5);
        column(&mut img, 3, 5..6);

        let mut out = [Pillar::default(); 2];
        let filled = find_pillars(img.view(), range(), &mut out).unwrap();
        assert_eq!(filled, 2);
        assert_eq!(out[0].to_array(), [4, 2, 1, 4]);
        assert_eq!(out[1].to_array(), [3, 0, 3, 5]);
    }

    #[test]
    fn ties_prefer_leftmost_then_topmost() {
        let mut img = OwnedRgba::filled(3, 5, MISS).unwrap();
        column(&mut img, 2, 0..2);
        column(&mut img, 1, 3..5);
        column(&mut img, 1, 0..2);

        let mut out = [Pillar::default(); 2];
        find_pillars(img.view(), range(), &mut out).unwrap();
        assert_eq!(out[0].to_array(), [2, 1, 0, 1]);
        assert_eq!(out[1].to_array(), [2, 1, 3, 4]);
    }

    #[test]
    fn unused_slots_stay_zeroed() {
        let mut img = OwnedRgba::filled(2, 2, MISS).unwrap();
        img.put_pixel(1, 1, HIT);

        let mut out = [Pillar {
            height: 9,
            x: 9,
            top: 9,
            bottom: 9,
        }; 3];
        let filled = find_pillars(img.view(), range(), &mut out).unwrap();
        assert_eq!(filled, 1);
        assert_eq!(out[0].to_array(), [1, 1, 1, 1]);
        assert!(out[1].is_empty() && out[2].is_empty());
        assert_eq!(out[2], Pillar::default());
    }
}
