//! End-to-end tests for the command line binary.
//!
//! Every failure path must exit with status 1 and leave no output file
//! behind.  The failure paths below trip before font resolution, so they run
//! on hosts without any installed fonts; only the success path is skipped
//! when no font family is available.

use std::io::Write;
use std::process::{Command, Output};

use mission_report::fonts;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mission-report"))
        .args(args)
        .output()
        .expect("run report binary")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_input_file_exits_with_failure() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("no-such-request.json");
    let destination = dir.path().join("report.pdf");

    let output = run(&[
        input.to_str().expect("input path"),
        destination.to_str().expect("output path"),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(
        message.contains("not found"),
        "unexpected stderr: {message}"
    );
    assert!(!destination.exists(), "no output may be written on failure");
}

#[test]
fn malformed_json_exits_with_failure() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("request.json");
    let destination = dir.path().join("report.pdf");

    let mut file = std::fs::File::create(&input).expect("create input file");
    file.write_all(b"{ this is not json").expect("write input file");
    drop(file);

    let output = run(&[
        input.to_str().expect("input path"),
        destination.to_str().expect("output path"),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(
        message.contains("invalid JSON"),
        "unexpected stderr: {message}"
    );
    assert!(!destination.exists(), "no output may be written on failure");
}

#[test]
fn missing_arguments_exit_with_failure() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(message.contains("Usage"), "unexpected stderr: {message}");
}

#[test]
fn valid_payload_reports_success() {
    if !fonts::default_fonts_available() {
        eprintln!(
            "Skipping valid_payload_reports_success: no font family available. \
             Set MISSION_REPORT_FONTS_DIR or install DejaVu Sans."
        );
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("request.json");
    let destination = dir.path().join("report.pdf");
    std::fs::write(&input, "{}").expect("write input file");

    let output = run(&[
        input.to_str().expect("input path"),
        destination.to_str().expect("output path"),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let message = String::from_utf8_lossy(&output.stdout);
    assert!(
        message.contains("Report generated successfully"),
        "unexpected stdout: {message}"
    );
    assert!(destination.exists());
}
