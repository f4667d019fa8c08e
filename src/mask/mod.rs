//! Channel masks for RGBA buffers.
//!
//! Masks are written as `0xRRGGBBAA`. Pixels are read as little-endian words
//! (`r` in the low byte), so a mask is byte-swapped before it is ANDed into a
//! pixel word. The packed form repeats the swapped mask in both halves of a
//! `u64` so two adjacent pixels are masked per operation.

/// Mask that keeps every channel bit.
pub const FULL_MASK: u32 = 0xffff_ffff;

/// Converts a `0xRRGGBBAA` mask into the little-endian pixel word layout.
#[inline]
pub fn pixel_mask(rgba: u32) -> u32 {
    rgba.swap_bytes()
}

/// Builds the packed two-pixel mask consumed by [`apply_mask`].
pub fn build_mask(rgba: u32) -> u64 {
    let argb = u64::from(pixel_mask(rgba));
    argb | (argb << 32)
}

/// ANDs a packed mask into an RGBA buffer, eight bytes at a time.
///
/// When the buffer holds an odd number of pixels, the trailing pixel is
/// masked with the low half of `mask`. Bytes past the last whole pixel are
/// left untouched.
pub fn apply_mask(data: &mut [u8], mask: u64) {
    let mut pairs = data.chunks_exact_mut(8);
    for pair in &mut pairs {
        let mut word = [0u8; 8];
        word.copy_from_slice(pair);
        let masked = u64::from_le_bytes(word) & mask;
        pair.copy_from_slice(&masked.to_le_bytes());
    }

    let tail = pairs.into_remainder();
    if tail.len() >= 4 {
        let low = (mask & 0xffff_ffff) as u32;
        let word = u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]) & low;
        tail[..4].copy_from_slice(&word.to_le_bytes());
    }
}
