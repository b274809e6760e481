use image::Rgb;
use qrcode::EcLevel;

use crate::error::{QRError, QRResult};

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Generation parameters shared by every symbol a [`Composer`](crate::Composer) produces.
///
/// The defaults are the values the command line always uses: minimum version 5, error
/// correction level H, 10 pixels per module, a 4 module quiet zone, black on white, and a logo
/// a quarter of the image wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QRParams {
    min_version: i16,
    ec_level: EcLevel,
    box_size: u32,
    border: u32,
    foreground: Rgb<u8>,
    background: Rgb<u8>,
    logo_ratio: f32,
}

impl Default for QRParams {
    fn default() -> Self {
        Self {
            min_version: 5,
            ec_level: EcLevel::H,
            box_size: 10,
            border: 4,
            foreground: BLACK,
            background: WHITE,
            logo_ratio: 0.25,
        }
    }
}

impl QRParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest version to encode with. Payloads that do not fit grow the version.
    pub fn min_version(&mut self, min_version: i16) -> &mut Self {
        self.min_version = min_version;
        self
    }

    pub fn ec_level(&mut self, ec_level: EcLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    /// Pixels per module side.
    pub fn box_size(&mut self, box_size: u32) -> &mut Self {
        self.box_size = box_size;
        self
    }

    /// Quiet zone width in modules.
    pub fn border(&mut self, border: u32) -> &mut Self {
        self.border = border;
        self
    }

    pub fn foreground(&mut self, foreground: Rgb<u8>) -> &mut Self {
        self.foreground = foreground;
        self
    }

    pub fn background(&mut self, background: Rgb<u8>) -> &mut Self {
        self.background = background;
        self
    }

    /// Logo side as a fraction of the image width.
    pub fn logo_ratio(&mut self, logo_ratio: f32) -> &mut Self {
        self.logo_ratio = logo_ratio;
        self
    }

    pub fn get_min_version(&self) -> i16 {
        self.min_version
    }

    pub fn get_ec_level(&self) -> EcLevel {
        self.ec_level
    }

    pub fn get_box_size(&self) -> u32 {
        self.box_size
    }

    pub fn get_border(&self) -> u32 {
        self.border
    }

    pub fn get_foreground(&self) -> Rgb<u8> {
        self.foreground
    }

    pub fn get_background(&self) -> Rgb<u8> {
        self.background
    }

    pub fn get_logo_ratio(&self) -> f32 {
        self.logo_ratio
    }

    /// Side in pixels of the image rendered for a symbol `width` modules wide.
    pub fn image_size(&self, width: u32) -> u32 {
        (width + 2 * self.border) * self.box_size
    }

    /// Side in pixels of the logo pasted onto an image `image_width` pixels wide.
    pub fn logo_size(&self, image_width: u32) -> u32 {
        (image_width as f32 * self.logo_ratio) as u32
    }

    pub fn validate(&self) -> QRResult<()> {
        if !(1..=40).contains(&self.min_version) {
            return Err(QRError::InvalidParams("minimum version must be within 1..=40"));
        }
        if self.box_size == 0 {
            return Err(QRError::InvalidParams("box size must be positive"));
        }
        if !(self.logo_ratio > 0.0 && self.logo_ratio <= 1.0) {
            return Err(QRError::InvalidParams("logo ratio must be within (0, 1]"));
        }
        Ok(())
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Min version: {}, Ec level: {:?}, Box size: {}, Border: {} }}",
            self.min_version, self.ec_level, self.box_size, self.border
        )
    }
}
