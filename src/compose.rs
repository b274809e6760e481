use std::{
    fs,
    path::{Path, PathBuf},
};

use image::RgbImage;

use crate::{
    encode::{fit, render, version_number},
    error::{QRError, QRResult},
    logo::overlay,
    params::QRParams,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoOutcome {
    /// No logo was asked for, or the path does not name a regular file.
    NotRequested,
    Applied,
    /// The logo could not be loaded or pasted. The QR was saved without it.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeReport {
    pub destination: PathBuf,
    pub version: i16,
    pub logo: LogoOutcome,
}

/// Turns payloads into finished QR images on disk.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    params: QRParams,
}

impl Composer {
    pub fn new(params: QRParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &QRParams {
        &self.params
    }

    /// Encodes and draws `payload` in memory, returning the image and the version used.
    pub fn render(&self, payload: &str) -> QRResult<(RgbImage, i16)> {
        self.params.validate()?;

        tracing::debug!("Generating QR {}...", self.params.metadata());
        let code = fit(payload.as_bytes(), &self.params)?;
        let version = version_number(&code);
        tracing::debug!("Encoded {} bytes at version {version}", payload.len());

        Ok((render(&code, &self.params), version))
    }

    /// Renders `payload`, pastes `logo` over the center when it names an existing file, and
    /// saves the result to `destination` in the format implied by its extension.
    ///
    /// A logo that cannot be loaded or pasted does not fail the call: the QR is saved without
    /// it and the cause is returned in [`ComposeReport::logo`].
    pub fn compose(
        &self,
        payload: &str,
        destination: &Path,
        logo: Option<&Path>,
    ) -> QRResult<ComposeReport> {
        let (mut img, version) = self.render(payload)?;

        let mut outcome = LogoOutcome::NotRequested;
        if let Some(path) = logo.filter(|p| p.is_file()) {
            let size = self.params.logo_size(img.width());
            tracing::debug!("Pasting {} logo at {size}x{size}...", path.display());
            match overlay(&img, path, size) {
                Ok(composed) => {
                    img = composed;
                    outcome = LogoOutcome::Applied;
                }
                Err(e) => {
                    tracing::debug!("Logo skipped for {}: {e}", destination.display());
                    outcome = LogoOutcome::Failed(e.to_string());
                }
            }
        }

        let dir = match destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .map_err(|source| QRError::CreateDir { path: dir.to_path_buf(), source })?;

        img.save(destination)
            .map_err(|source| QRError::Save { path: destination.to_path_buf(), source })?;
        tracing::info!("QR code saved: {}", destination.display());

        Ok(ComposeReport { destination: destination.to_path_buf(), version, logo: outcome })
    }
}
