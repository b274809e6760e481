use std::path::Path;

use image::{
    imageops::{self, FilterType},
    DynamicImage, ImageError, ImageReader, RgbImage,
};

/// Pastes the logo at `path` over the center of `canvas`, resized to a `size` x `size` square.
///
/// The logo's own alpha channel is the paste mask, so transparent regions leave the modules
/// underneath visible. Non-square logos are stretched.
pub fn overlay(canvas: &RgbImage, path: &Path, size: u32) -> Result<RgbImage, ImageError> {
    let logo = ImageReader::open(path)?.with_guessed_format()?.decode()?.to_rgba8();
    let logo = imageops::resize(&logo, size, size, FilterType::Lanczos3);

    let (w, h) = canvas.dimensions();
    let x = (w.saturating_sub(size) / 2) as i64;
    let y = (h.saturating_sub(size) / 2) as i64;

    let mut composed = DynamicImage::ImageRgb8(canvas.clone()).into_rgba8();
    imageops::overlay(&mut composed, &logo, x, y);
    Ok(DynamicImage::ImageRgba8(composed).into_rgb8())
}
