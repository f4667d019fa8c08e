//! Flood fill ("puddle") search.

use crate::color::ColorRange;
use crate::image::RgbaViewMut;
use crate::region::{check_coordinate_range, Connectivity, Point};
use crate::trace::{trace_event, trace_span};
use crate::util::RgbaMatchResult;

const ALPHA: usize = 3;

/// Flood-fills the first puddle found at or below `start_row`, 4-connected.
///
/// See [`find_puddle_with`].
pub fn find_puddle(
    image: &mut RgbaViewMut<'_>,
    range: ColorRange,
    start_row: usize,
    out: &mut [Point],
) -> RgbaMatchResult<usize> {
    find_puddle_with(image, range, start_row, Connectivity::FourWay, out)
}

/// Flood-fills the first puddle found at or below `start_row`.
///
/// The seed is the first pixel in row-major order, starting at the beginning
/// of `start_row`, whose RGB lies in `range` and whose alpha is non-zero. The
/// fill grows through neighbors that satisfy the same test. Each pixel written
/// to `out` has its alpha zeroed, and only those pixels do.
///
/// `out` doubles as the breadth-first work queue, so the fill allocates
/// nothing. When `out` is full the fill stops and the partial puddle is
/// returned; for a given buffer state, a smaller `out` always receives a
/// prefix of what a larger one would.
///
/// Returns the number of coordinates written, 0 when no seed exists.
pub fn find_puddle_with(
    image: &mut RgbaViewMut<'_>,
    range: ColorRange,
    start_row: usize,
    connectivity: Connectivity,
    out: &mut [Point],
) -> RgbaMatchResult<usize> {
    check_coordinate_range(image.as_view())?;
    let width = image.width();
    let height = image.height();
    if out.is_empty() || start_row >= height {
        return Ok(0);
    }

    let _span = trace_span!("find_puddle", width = width, height = height, start_row = start_row)
        .entered();

    let data = image.as_bytes_mut();
    let open = |data: &[u8], idx: usize| {
        let px = &data[idx * 4..idx * 4 + 4];
        px[ALPHA] != 0 && range.contains_pixel(px)
    };

    let Some(seed) = (start_row * width..width * height).find(|&idx| open(&*data, idx)) else {
        return Ok(0);
    };
    data[seed * 4 + ALPHA] = 0;
    out[0] = Point::new((seed % width) as i32, (seed / width) as i32);

    let mut len = 1usize;
    let mut head = 0usize;
    let mut truncated = false;
    'fill: while head < len {
        let Point { x, y } = out[head];
        head += 1;
        for &(dx, dy) in connectivity.offsets() {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                continue;
            }
            let idx = ny as usize * width + nx as usize;
            if !open(&*data, idx) {
                continue;
            }
            if len == out.len() {
                truncated = true;
                break 'fill;
            }
            data[idx * 4 + ALPHA] = 0;
            out[len] = Point::new(nx as i32, ny as i32);
            len += 1;
        }
    }

    trace_event!("puddle_done", size = len, truncated = truncated);
    Ok(len)
}
