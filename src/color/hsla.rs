//! Integer RGBA to HSLA conversion.
//!
//! Every output channel uses the full `0..=255` range. Hue is split into six
//! sextants of width 42 with red at 0, green at 84 and blue at 168.

use crate::image::{RgbaView, RgbaViewMut};
use crate::util::{RgbaMatchError, RgbaMatchResult};

/// Converts `src` into HSLA, writing the result into `dst`.
///
/// Alpha is copied through unchanged.
pub fn rgba_to_hsla(src: RgbaView<'_>, dst: &mut RgbaViewMut<'_>) -> RgbaMatchResult<()> {
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(RgbaMatchError::InvalidInput(
            "source and destination dimensions differ",
        ));
    }
    for (rgba, hsla) in src
        .as_bytes()
        .chunks_exact(4)
        .zip(dst.as_bytes_mut().chunks_exact_mut(4))
    {
        let (h, s, l) = hsl(rgba[0], rgba[1], rgba[2]);
        hsla[0] = h;
        hsla[1] = s;
        hsla[2] = l;
        hsla[3] = rgba[3];
    }
    Ok(())
}

fn hsl(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let sum = min + max;
    let diff = max - min;
    let l = sum >> 1;
    if diff == 0 {
        return (0, 0, l as u8);
    }

    let s = if l >= 128 {
        255 * diff / (510 - sum)
    } else {
        255 * diff / sum
    };
    let mut h = if max == r {
        42 * (g - b) / diff
    } else if max == g {
        84 + 42 * (b - r) / diff
    } else {
        168 + 42 * (r - g) / diff
    };
    if h < 0 {
        h += 256;
    }
    (h as u8, s as u8, l as u8)
}

#[cfg(test)]
mod tests {
    use super::{hsl, rgba_to_hsla};
    use crate::image::{RgbaView, RgbaViewMut};

    #[test]
    fn primaries_land_on_sextant_offsets() {
        assert_eq!(hsl(255, 0, 0), (0, 255, 127));
        assert_eq!(hsl(0, 255, 0), (84, 255, 127));
        assert_eq!(hsl(0, 0, 255), (168, 255, 127));
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        assert_eq!(hsl(0, 0, 0), (0, 0, 0));
        assert_eq!(hsl(200, 200, 200), (0, 0, 200));
    }

    #[test]
    fn negative_hue_wraps() {
        // Red-dominant with blue above green.
        let (h, _, _) = hsl(255, 0, 128);
        assert_eq!(h, (256 - 42 * 128 / 255) as u8);
    }

    #[test]
    fn conversion_copies_alpha_and_checks_sizes() {
        let src = [255u8, 0, 0, 9];
        let mut out = [0u8; 4];
        let src_view = RgbaView::from_slice(&src, 1, 1).unwrap();
        let mut dst = RgbaViewMut::from_slice(&mut out, 1, 1).unwrap();
        rgba_to_hsla(src_view, &mut dst).unwrap();
        assert_eq!(out, [0, 255, 127, 9]);

        let wide = [0u8; 8];
        let wide_view = RgbaView::from_slice(&wide, 2, 1).unwrap();
        let mut out = [0u8; 4];
        let mut dst = RgbaViewMut::from_slice(&mut out, 1, 1).unwrap();
        assert!(rgba_to_hsla(wide_view, &mut dst).is_err());
    }
}
