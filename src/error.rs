use std::{io, path::PathBuf};

use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum QRError {
    // Composer
    #[error("Empty payload")]
    EmptyPayload,
    #[error("Invalid parameters: {0}")]
    InvalidParams(&'static str),
    #[error("Could not encode payload: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Could not create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Could not save {}: {source}", path.display())]
    Save { path: PathBuf, source: image::ImageError },

    // Batch
    #[error("CSV file not found: {}", .0.display())]
    BatchFileNotFound(PathBuf),
    #[error("CSV missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unusable file name: {0:?}")]
    InvalidFileName(String),

    // Interactive
    #[error("Empty file name")]
    EmptyFileName,

    // Shared
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type QRResult<T> = Result<T, QRError>;
