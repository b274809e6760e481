use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use crate::{
    compose::{ComposeReport, Composer},
    error::{QRError, QRResult},
};

pub const PAYLOAD_PROMPT: &str = "Enter the link (or text) for the QR code: ";
pub const FILENAME_PROMPT: &str = "Enter the filename to save (without extension): ";
pub const LOGO_PROMPT: &str = "Enter the logo file path (leave blank for no logo): ";

/// Answers collected from the three prompts, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub payload: String,
    pub filename: String,
    pub logo: Option<PathBuf>,
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> io::Result<String> {
    output.write_all(question.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before answering"));
    }
    Ok(line.trim().to_string())
}

pub fn ask(input: &mut impl BufRead, output: &mut impl Write) -> QRResult<Answers> {
    let payload = prompt(input, output, PAYLOAD_PROMPT)?;
    let filename = prompt(input, output, FILENAME_PROMPT)?;
    let logo = prompt(input, output, LOGO_PROMPT)?;
    Ok(Answers { payload, filename, logo: (!logo.is_empty()).then(|| PathBuf::from(logo)) })
}

/// Asks for a payload, a file name and an optional logo, then writes `<filename>.png` under
/// `base_dir`.
pub fn run_interactive(
    input: &mut impl BufRead,
    output: &mut impl Write,
    composer: &Composer,
    base_dir: &Path,
) -> QRResult<ComposeReport> {
    let answers = ask(input, output)?;
    if answers.filename.is_empty() {
        return Err(QRError::EmptyFileName);
    }

    let destination = base_dir.join(format!("{}.png", answers.filename));
    composer.compose(&answers.payload, &destination, answers.logo.as_deref())
}
