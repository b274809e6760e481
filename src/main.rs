use std::{
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;

use easyqr::{
    batch::{run_batch, BatchObserver, BatchOptions, BatchRow, RowFailure},
    cli::Cli,
    interactive::run_interactive,
    logger, Composer, LogoOutcome,
};

struct ConsoleReporter;

fn report_saved(destination: &Path, logo: &LogoOutcome) {
    match logo {
        LogoOutcome::NotRequested => {}
        LogoOutcome::Applied => println!("✅ Logo added to {}", destination.display()),
        LogoOutcome::Failed(e) => {
            eprintln!("⚠️ Could not add logo to {}: {e}", destination.display())
        }
    }
    println!("✅ QR code saved: {}", destination.display());
}

impl BatchObserver for ConsoleReporter {
    fn row_saved(&mut self, _row: &BatchRow, destination: &Path, logo: &LogoOutcome) {
        report_saved(destination, logo);
    }

    fn row_failed(&mut self, failure: &RowFailure) {
        eprintln!("❌ Line {} ({}): {}", failure.line, failure.platform, failure.error);
    }
}

fn batch_mode(
    composer: &Composer,
    csv_file: &Path,
    output_dir: PathBuf,
) -> anyhow::Result<ExitCode> {
    let options = BatchOptions { output_dir };
    let summary = run_batch(csv_file, composer, &options, &mut ConsoleReporter)?;

    if summary.is_success() {
        println!("Done: {} QR codes written", summary.written.len());
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "Done: {} QR codes written, {} rows failed",
            summary.written.len(),
            summary.failures.len()
        );
        Ok(ExitCode::FAILURE)
    }
}

fn interactive_mode(composer: &Composer) -> anyhow::Result<ExitCode> {
    let report =
        run_interactive(&mut io::stdin().lock(), &mut io::stdout(), composer, Path::new(""))?;
    report_saved(&report.destination, &report.logo);
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let composer = Composer::default();
    let res = match cli.batch {
        Some(ref csv_file) => batch_mode(&composer, csv_file, cli.output_dir.clone()),
        None => interactive_mode(&composer),
    };

    match res {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}
