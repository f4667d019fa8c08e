use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rgbamatch::{
    apply_mask, build_mask, check_crop, check_masked_crop, diff_masked_crop, diff_threshold_crop,
    threshold, ColorRange, OwnedRgba,
};

fn noise_image(width: usize, height: usize, seed: u64) -> OwnedRgba {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; width * height * 4];
    rng.fill(&mut data[..]);
    for px in data.chunks_exact_mut(4) {
        px[3] = 255;
    }
    OwnedRgba::new(data, width, height).unwrap()
}

#[test]
fn aligned_crop_matches_and_shifted_crop_does_not() {
    let image = noise_image(160, 120, 1);
    let (x, y, w, h) = (40usize, 70usize, 64usize, 16usize);
    let crop = image.view().crop(x, y, w, h).unwrap();
    let (xi, yi) = (x as isize, y as isize);

    assert!(check_crop(image.view(), crop.view(), xi, yi));
    assert!(!check_crop(image.view(), crop.view(), xi - 1, yi));
    assert!(!check_crop(image.view(), crop.view(), xi, yi + 1));
}

#[test]
fn crop_check_handles_every_corner_and_overhang() {
    let image = noise_image(32, 24, 2);
    let (w, h) = (8usize, 6usize);
    for &(x, y) in &[(0usize, 0usize), (24, 0), (0, 18), (24, 18)] {
        let crop = image.view().crop(x, y, w, h).unwrap();
        assert!(check_crop(image.view(), crop.view(), x as isize, y as isize));
    }

    let crop = image.view().crop(0, 0, w, h).unwrap();
    assert!(!check_crop(image.view(), crop.view(), -1, 0));
    assert!(!check_crop(image.view(), crop.view(), 0, -1));
    assert!(!check_crop(image.view(), crop.view(), 25, 0));
    assert!(!check_crop(image.view(), crop.view(), 0, 19));
}

#[test]
fn masked_crop_round_trip() {
    let image = noise_image(160, 120, 3);
    let (x, y, w, h) = (40usize, 70usize, 64usize, 16usize);
    let (xi, yi) = (x as isize, y as isize);
    let plain = image.view().crop(x, y, w, h).unwrap();

    assert!(check_masked_crop(image.view(), plain.view(), xi, yi, 0xffff_ffff));
    assert!(!check_masked_crop(image.view(), plain.view(), xi - 1, yi, 0xffff_ffff));
    assert!(!check_masked_crop(image.view(), plain.view(), xi, yi + 1, 0xffff_ffff));

    let mask = 0xc0e0_80ff;
    let mut masked = plain.clone().into_raw();
    apply_mask(&mut masked, build_mask(mask));
    let masked = OwnedRgba::new(masked, w, h).unwrap();

    assert!(check_masked_crop(image.view(), masked.view(), xi, yi, mask));
    // An unmasked needle keeps bits the mask strips from the haystack.
    assert!(!check_masked_crop(image.view(), plain.view(), xi, yi, mask));
    assert!(!check_masked_crop(image.view(), masked.view(), xi - 1, yi, mask));
    // The masked needle does not survive a full-mask comparison.
    assert!(!check_masked_crop(image.view(), masked.view(), xi, yi, 0xffff_ffff));
}

#[test]
fn masked_diff_is_zero_only_at_the_source() {
    let image = noise_image(48, 40, 4);
    let mask = 0xf0f0_f0ff;
    let mut needle = image.view().crop(10, 12, 9, 7).unwrap().into_raw();
    apply_mask(&mut needle, build_mask(mask));
    let needle = OwnedRgba::new(needle, 9, 7).unwrap();

    assert_eq!(diff_masked_crop(image.view(), needle.view(), 10, 12, mask), 0);
    assert!(diff_masked_crop(image.view(), needle.view(), 11, 12, mask) > 0);
    assert_eq!(diff_masked_crop(image.view(), needle.view(), 40, 12, mask), 0);
    assert_eq!(diff_masked_crop(image.view(), needle.view(), -3, 12, mask), 0);
}

#[test]
fn masked_diff_matches_per_byte_reference() {
    let image = noise_image(20, 20, 5);
    let needle = noise_image(5, 4, 6);
    let mask = 0xff80_c0ffu32;

    let mut expected = 0i64;
    let mask_bytes = mask.to_be_bytes();
    for ty in 0..4 {
        for tx in 0..5 {
            let hp = image.view().pixel(3 + tx, 2 + ty).unwrap();
            let np = needle.view().pixel(tx, ty).unwrap();
            for c in 0..4 {
                expected += i64::from((hp[c] & mask_bytes[c]).abs_diff(np[c]));
            }
        }
    }
    assert_eq!(diff_masked_crop(image.view(), needle.view(), 3, 2, mask), expected);
}

#[test]
fn threshold_diff_is_zero_against_thresholded_crop() {
    let image = noise_image(64, 48, 7);
    let range = ColorRange::new((100, 255), (0, 200), (50, 250));

    let mut needle = image.view().crop(20, 10, 16, 12).unwrap();
    threshold(&mut needle.view_mut(), range);

    assert_eq!(diff_threshold_crop(image.view(), needle.view(), 20, 10, range), 0);
    assert!(diff_threshold_crop(image.view(), needle.view(), 21, 10, range) > 0);
    assert_eq!(diff_threshold_crop(image.view(), needle.view(), 60, 10, range), 0);

    // An inverted needle disagrees on every pixel.
    let mut inverted = needle.clone().into_raw();
    for px in inverted.chunks_exact_mut(4) {
        px[3] = 255 - px[3];
    }
    let inverted = OwnedRgba::new(inverted, 16, 12).unwrap();
    assert_eq!(
        diff_threshold_crop(image.view(), inverted.view(), 20, 10, range),
        16 * 12
    );
}
