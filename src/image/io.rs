//! PNG helpers built on the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{OwnedRgba, RgbaView};
use crate::util::{RgbaMatchError, RgbaMatchResult};
use std::path::Path;

/// Creates an owned RGBA image from an `image` crate buffer.
pub fn owned_from_rgba_image(img: &image::RgbaImage) -> RgbaMatchResult<OwnedRgba> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedRgba::new(img.as_raw().clone(), width, height)
}

/// Loads an image from disk and converts it to packed RGBA.
pub fn load_rgba_png<P: AsRef<Path>>(path: P) -> RgbaMatchResult<OwnedRgba> {
    let img = image::open(path).map_err(|err| RgbaMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_rgba_image(&img.to_rgba8())
}

/// Encodes a packed RGBA view as a PNG file.
pub fn save_rgba_png<P: AsRef<Path>>(view: RgbaView<'_>, path: P) -> RgbaMatchResult<()> {
    let width = u32::try_from(view.width()).map_err(|_| RgbaMatchError::InvalidDimensions {
        width: view.width(),
        height: view.height(),
    })?;
    let height = u32::try_from(view.height()).map_err(|_| RgbaMatchError::InvalidDimensions {
        width: view.width(),
        height: view.height(),
    })?;
    let img = image::RgbaImage::from_raw(width, height, view.as_bytes().to_vec())
        .ok_or(RgbaMatchError::InvalidInput("buffer does not match image size"))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|err| RgbaMatchError::ImageIo {
            reason: err.to_string(),
        })
}
