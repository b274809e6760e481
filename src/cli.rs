use std::path::PathBuf;

use clap::Parser;

/// Generate QR code images, optionally with a logo in the middle.
///
/// Without arguments, asks for the text, a file name and an optional logo, and writes
/// `<filename>.png` to the current directory.
#[derive(Debug, Parser)]
#[command(name = "easyqr", version, about)]
pub struct Cli {
    /// CSV file with Platform, URL and Logos columns; writes one `<Platform>.png` per row
    #[arg(long, value_name = "CSV_FILE")]
    pub batch: Option<PathBuf>,

    /// Directory batch output is written to
    #[arg(long, value_name = "DIR", default_value = "output", requires = "batch")]
    pub output_dir: PathBuf,

    /// Log every step
    #[arg(short, long)]
    pub verbose: bool,
}
