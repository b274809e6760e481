use image::RgbImage;
use qrcode::{Color, QrCode, Version};

use crate::{
    error::{QRError, QRResult},
    params::QRParams,
};

/// Encodes `payload` at the smallest version that both fits the data and is no smaller than
/// the configured minimum.
pub fn fit(payload: &[u8], params: &QRParams) -> QRResult<QrCode> {
    if payload.is_empty() {
        return Err(QRError::EmptyPayload);
    }

    let min = params.get_min_version();
    let ecl = params.get_ec_level();
    let code = QrCode::with_error_correction_level(payload, ecl)?;
    match code.version() {
        Version::Normal(v) if v < min => {
            tracing::debug!("Best fit is version {v}, raising to version {min}");
            Ok(QrCode::with_version(payload, Version::Normal(min), ecl)?)
        }
        _ => Ok(code),
    }
}

pub fn version_number(code: &QrCode) -> i16 {
    match code.version() {
        Version::Normal(v) | Version::Micro(v) => v,
    }
}

/// Draws `code` with `box_size` pixels per module and a `border` module quiet zone.
pub fn render(code: &QrCode, params: &QRParams) -> RgbImage {
    let module_sz = params.get_box_size();
    let qz_sz = params.get_border() * module_sz;
    let qr_sz = code.width() as u32 * module_sz;
    let total_sz = params.image_size(code.width() as u32);
    let (dark, light) = (params.get_foreground(), params.get_background());

    RgbImage::from_fn(total_sz, total_sz, |x, y| {
        if x < qz_sz || x >= qz_sz + qr_sz || y < qz_sz || y >= qz_sz + qr_sz {
            return light;
        }
        let c = ((x - qz_sz) / module_sz) as usize;
        let r = ((y - qz_sz) / module_sz) as usize;
        match code[(c, r)] {
            Color::Dark => dark,
            Color::Light => light,
        }
    })
}
