//! Error types for rgbamatch.

use thiserror::Error;

/// Result alias for rgbamatch operations.
pub type RgbaMatchResult<T> = std::result::Result<T, RgbaMatchError>;

/// Errors raised when a caller violates a buffer or geometry precondition.
///
/// Placements that simply do not fit inside a haystack are not errors; the
/// matching functions report those as `false`, `0`, or an empty result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RgbaMatchError {
    /// Width or height is zero, or the byte size overflows `usize`.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The buffer length does not equal `width * height * 4`.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// A crop window does not fit inside the source image.
    #[error(
        "roi out of bounds: x={x}, y={y}, width={width}, height={height}, image={img_width}x{img_height}"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The search scratch space holds fewer column hashes than the haystack width.
    #[error("scratch too small: needed {needed} entries, got {got}")]
    ScratchTooSmall { needed: usize, got: usize },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Image decoding or encoding failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
