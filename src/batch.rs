use std::{
    fs::File,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

use crate::{
    compose::{Composer, LogoOutcome},
    error::{QRError, QRResult},
};

pub const REQUIRED_COLUMNS: [&str; 3] = ["Platform", "URL", "Logos"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchRow {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Logos")]
    pub logos: String,
}

impl BatchRow {
    fn trimmed(self) -> Self {
        Self {
            platform: self.platform.trim().to_string(),
            url: self.url.trim().to_string(),
            logos: self.logos.trim().to_string(),
        }
    }

    /// Logo path to hand to the composer, if the Logos cell names an existing file.
    pub fn logo_path(&self) -> Option<&Path> {
        Some(Path::new(&self.logos)).filter(|p| p.is_file())
    }
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("output") }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// 1-based line in the CSV file, header included.
    pub line: u64,
    pub platform: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub failures: Vec<RowFailure>,
    pub logo_warnings: usize,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Receives progress from [`run_batch`] as rows are processed.
pub trait BatchObserver {
    fn row_saved(&mut self, _row: &BatchRow, _destination: &Path, _logo: &LogoOutcome) {}
    fn row_failed(&mut self, _failure: &RowFailure) {}
}

impl BatchObserver for () {}

/// Replaces characters that are unsafe in a file name with `_`.
///
/// Returns `None` when nothing usable is left, i.e. an empty name or one made only of dots.
pub fn sanitize_file_stem(stem: &str) -> Option<String> {
    let clean: String = stem
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if clean.chars().all(|c| c == '.') {
        return None;
    }
    Some(clean)
}

/// Required columns absent from `headers`, in the order they are required.
pub fn missing_columns(headers: &StringRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect()
}

/// Generates one QR per CSV row into `options.output_dir`, named after the Platform column.
///
/// Fails before touching any row if the file is missing or lacks a required column. After
/// that, a row that cannot be produced is recorded in the summary and the next row is tried.
pub fn run_batch(
    csv_path: &Path,
    composer: &Composer,
    options: &BatchOptions,
    observer: &mut impl BatchObserver,
) -> QRResult<BatchSummary> {
    if !csv_path.is_file() {
        return Err(QRError::BatchFileNotFound(csv_path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(File::open(csv_path)?);
    let headers: StringRecord = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
        .collect();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(QRError::MissingColumns(missing));
    }
    tracing::debug!("Reading rows from {}...", csv_path.display());

    let mut summary = BatchSummary::default();
    let mut record = StringRecord::new();
    loop {
        let line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let failure = RowFailure { line, platform: String::new(), error: e.to_string() };
                tracing::debug!("Skipping line {line}: {}", failure.error);
                observer.row_failed(&failure);
                summary.failures.push(failure);
                continue;
            }
        }
        let line = record.position().map_or(line, |p| p.line());

        let row = match record.deserialize::<BatchRow>(Some(&headers)) {
            Ok(row) => row.trimmed(),
            Err(e) => {
                let failure = RowFailure { line, platform: String::new(), error: e.to_string() };
                tracing::debug!("Skipping line {line}: {}", failure.error);
                observer.row_failed(&failure);
                summary.failures.push(failure);
                continue;
            }
        };

        match compose_row(&row, composer, options) {
            Ok((destination, logo)) => {
                if matches!(logo, LogoOutcome::Failed(_)) {
                    summary.logo_warnings += 1;
                }
                observer.row_saved(&row, &destination, &logo);
                summary.written.push(destination);
            }
            Err(e) => {
                let failure =
                    RowFailure { line, platform: row.platform.clone(), error: e.to_string() };
                tracing::debug!("Skipping line {line} ({}): {}", row.platform, failure.error);
                observer.row_failed(&failure);
                summary.failures.push(failure);
            }
        }
    }

    tracing::info!(
        "Batch finished: {} written, {} failed, {} logo warnings",
        summary.written.len(),
        summary.failures.len(),
        summary.logo_warnings
    );
    Ok(summary)
}

fn compose_row(
    row: &BatchRow,
    composer: &Composer,
    options: &BatchOptions,
) -> QRResult<(PathBuf, LogoOutcome)> {
    let stem = sanitize_file_stem(&row.platform)
        .ok_or_else(|| QRError::InvalidFileName(row.platform.clone()))?;
    let destination = options.output_dir.join(format!("{stem}.png"));
    let report = composer.compose(&row.url, &destination, row.logo_path())?;
    Ok((report.destination, report.logo))
}
