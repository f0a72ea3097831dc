use std::error::Error;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mission_report::{compose, ReportRequest};

/// Generates a post-mission analysis PDF from a JSON payload.
///
/// Fonts must be present under `assets/fonts` or discoverable through the
/// `MISSION_REPORT_FONTS_DIR` environment variable; on most Linux systems
/// the installed DejaVu Sans family is picked up automatically.
#[derive(Parser)]
#[command(author, version, about = "Renders mission data into a PDF report")]
struct Cli {
    /// Path to the JSON report request.
    input: PathBuf,

    /// Path the finished PDF is written to.
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    // Clap exits with status 2 on usage errors by default; the invocation
    // contract is exit code 1 for every failure.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let raw = match std::fs::read_to_string(&cli.input) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            eprintln!("Error: input file '{}' not found", cli.input.display());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Error reading input file '{}': {}", cli.input.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let request: ReportRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(err) => {
            eprintln!(
                "Error: invalid JSON in input file '{}': {}",
                cli.input.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    match compose(&request, &cli.output) {
        Ok(path) => {
            println!("Report generated successfully: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error generating report: {}", err);
            print_error_sources(&err);
            ExitCode::FAILURE
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
