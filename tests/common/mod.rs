#![allow(dead_code)]

use std::path::Path;

use image::{Rgba, RgbaImage};

/// Reads the single QR symbol in the image at `path`, returning its version and content.
pub fn decode(path: &Path) -> (usize, String) {
    let img = image::open(path).expect("Failed to open QR image").to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one symbol in {}", path.display());
    let (meta, content) = grids[0].decode().expect("Failed to read QR");
    (meta.version.0, content)
}

pub fn write_logo(path: &Path, color: [u8; 4]) {
    RgbaImage::from_pixel(32, 32, Rgba(color)).save(path).expect("Failed to write logo");
}
