//! # easyqr
//!
//! Generates QR code images for text or URLs, optionally with a logo pasted over the center,
//! either one at a time or for every row of a CSV file.
//!
//! Symbols are encoded at error correction level H, so a logo covering the middle of the code
//! leaves it readable. Version 5 is the smallest version used; longer payloads get a larger
//! symbol instead of an error.
//!
//! ## Quick Start
//!
//! ### Single QR code
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use easyqr::Composer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let composer = Composer::default();
//! let report = composer.compose(
//!     "https://example.com",
//!     Path::new("qr/example.png"),       // Parent directories are created
//!     Some(Path::new("assets/logo.png")), // Ignored if the file does not exist
//! )?;
//! println!("Saved {} at version {}", report.destination.display(), report.version);
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom parameters
//!
//! ```rust
//! use easyqr::{Composer, EcLevel, QRParams};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut params = QRParams::default();
//! params
//!     .min_version(1)            // Smallest symbol - if not provided, defaults to 5
//!     .ec_level(EcLevel::M)      // Error correction level - if not provided, defaults to H
//!     .box_size(4)               // Pixels per module - if not provided, defaults to 10
//!     .border(2);                // Quiet zone in modules - if not provided, defaults to 4
//!
//! let (img, version) = Composer::new(params).render("Hello, World!")?;
//! assert_eq!(version, 1);
//! assert_eq!(img.width(), (21 + 2 * 2) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### Batch
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use easyqr::{batch::{run_batch, BatchOptions}, Composer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // links.csv needs Platform, URL and Logos columns; writes output/<Platform>.png per row
//! let summary =
//!     run_batch(Path::new("links.csv"), &Composer::default(), &BatchOptions::default(), &mut ())?;
//! for failure in &summary.failures {
//!     eprintln!("line {}: {}", failure.line, failure.error);
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod cli;
pub mod compose;
pub mod encode;
pub mod error;
pub mod interactive;
pub mod logger;
pub mod logo;
pub mod params;

pub use compose::{ComposeReport, Composer, LogoOutcome};
pub use error::{QRError, QRResult};
pub use params::QRParams;
pub use qrcode::EcLevel;
