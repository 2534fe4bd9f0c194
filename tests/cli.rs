//! Integration tests for the sheetgrid command line

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sheetgrid"))
        // Tests must be deterministic and not depend on a user's ~/.config/sheetgrid/sheet.toml.
        .arg("--no-config")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_single_cell() {
    let (stdout, _, code) = run_command(&["-r", "20", "-c", "20", "B5"]);
    assert_eq!(stdout.trim(), "B5 row=5 column=2 rows=1 columns=1");
    assert_eq!(code, 0);
}

#[test]
fn test_whole_column_uses_sheet_size() {
    let (stdout, _, code) = run_command(&["-r", "20", "-c", "20", "A:A"]);
    assert_eq!(stdout.trim(), "A1:A20 row=1 column=1 rows=20 columns=1");
    assert_eq!(code, 0);
}

#[test]
fn test_reversed_span() {
    let (stdout, _, code) = run_command(&["-r", "20", "-c", "20", "B5:A1"]);
    assert_eq!(stdout.trim(), "A1:B5 row=1 column=1 rows=5 columns=2");
    assert_eq!(code, 0);
}

#[test]
fn test_multiple_areas_and_arguments() {
    let (stdout, _, code) = run_command(&["--rows", "10", "--columns", "4", "A1,3:3", "C2:D"]);
    assert_eq!(
        stdout.trim(),
        "A1 row=1 column=1 rows=1 columns=1\n\
         A3:D3 row=3 column=1 rows=1 columns=4\n\
         C2:D10 row=2 column=3 rows=9 columns=2"
    );
    assert_eq!(code, 0);
}

#[test]
fn test_coordinates_output() {
    let (stdout, _, code) = run_command(&["--coordinates", "A1:C,8:8"]);
    assert_eq!(stdout.trim(), "[[1,1],[-1,3]]\n[8,-1]");
    assert_eq!(code, 0);
}

#[test]
fn test_invalid_notation() {
    let (stdout, stderr, code) = run_command(&["-r", "20", "-c", "20", "A1:B2:C3"]);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: could not resolve 'A1:B2:C3'"));
    assert_eq!(code, 1);
}

#[test]
fn test_range_outside_sheet() {
    let (_, stderr, code) = run_command(&["-r", "5", "-c", "5", "A6"]);
    assert!(stderr.contains("Out of bounds"));
    assert_eq!(code, 1);
}

#[test]
fn test_missing_notation() {
    let (_, stderr, code) = run_command(&[]);
    assert!(stderr.contains("at least one A1 notation is required"));
    assert_eq!(code, 1);
}

#[test]
fn test_bad_dimension() {
    let (_, stderr, code) = run_command(&["--rows", "zero", "A1"]);
    assert!(stderr.contains("--rows requires a positive number"));
    assert_eq!(code, 1);
}

#[test]
fn test_unknown_option() {
    let (_, stderr, code) = run_command(&["--frobnicate", "A1"]);
    assert!(stderr.contains("Unknown option: --frobnicate"));
    assert_eq!(code, 1);
}

#[test]
fn test_config_file() {
    let path = std::env::temp_dir().join(format!("sheetgrid-cli-{}.toml", std::process::id()));
    std::fs::write(&path, "num_rows = 7\nnum_columns = 3\n").unwrap();

    let (stdout, _, code) = run_command(&["--config", path.to_str().unwrap(), "B:B"]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(stdout.trim(), "B1:B7 row=1 column=2 rows=7 columns=1");
    assert_eq!(code, 0);
}

#[test]
fn test_help() {
    let (_, stderr, code) = run_command(&["--help"]);
    assert!(stderr.contains("Usage: sheetgrid"));
    assert_eq!(code, 0);
}
