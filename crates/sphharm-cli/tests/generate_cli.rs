use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

#[test]
fn generate_writes_json_surface_to_output_file() {
    let temp = TempDir::new().expect("tempdir should be created");
    let output_path = temp.path().join("surface/y10.json");
    fs::create_dir_all(output_path.parent().unwrap()).expect("output dir should be created");

    let output = run_cli(&[
        "generate",
        "--degree",
        "1",
        "--order",
        "0",
        "--resolution",
        "4",
        "--output",
        output_path.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "stdout should stay empty");

    let parsed: Value =
        serde_json::from_str(&fs::read_to_string(&output_path).expect("output should be readable"))
            .expect("output JSON should parse");
    assert_eq!(parsed["quantum_numbers"]["degree"], 1);
    assert_eq!(parsed["quantum_numbers"]["order"], 0);
    assert_eq!(parsed["x"]["rows"], 8);
    assert_eq!(parsed["x"]["cols"], 4);
    assert_eq!(parsed["color"]["values"].as_array().map(Vec::len), Some(32));
}

#[test]
fn generate_streams_contour_table_to_stdout() {
    let output = run_cli(&[
        "generate",
        "--degree=2",
        "--order=-1",
        "--resolution=3",
        "--mode",
        "contour",
        "--format",
        "text",
    ]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("# Y(2, -1) profile=compressed_magnitude mode=contour shape=6x3 columns=phi,theta,color")
    );
    assert_eq!(lines.count(), 18);
}

#[test]
fn generate_reads_config_and_lets_flags_override() {
    let temp = TempDir::new().expect("tempdir should be created");
    let config_path = temp.path().join("render.json");
    write_file(
        &config_path,
        r#"{ "degree": 4, "order": 3, "resolution": 2, "mode": "surface" }"#,
    );

    let output = run_cli(&[
        "generate",
        "--config",
        config_path.to_str().unwrap(),
        "--order=-4",
        "--format=text",
    ]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("# Y(4, -4) profile=compressed_magnitude mode=surface shape=4x2"),
        "unexpected header: {stdout}"
    );
}

#[test]
fn invalid_quantum_numbers_exit_with_input_validation_code() {
    let output = run_cli(&["generate", "--degree", "2", "--order", "3"]);

    assert_eq!(
        output.status.code(),
        Some(2),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [INPUT.QUANTUM_NUMBERS] invalid quantum numbers Y(2, 3)"));
    assert!(stderr.contains("FATAL EXIT CODE: 2"));
}

#[test]
fn zero_resolution_is_rejected_as_input_error() {
    let output = run_cli(&["generate", "--degree", "1", "--resolution", "0"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[INPUT.RESOLUTION]"));
}

#[test]
fn malformed_config_is_reported_with_its_path() {
    let temp = TempDir::new().expect("tempdir should be created");
    let config_path = temp.path().join("broken.json");
    write_file(&config_path, "{ not json");

    let output = run_cli(&["generate", "--config", config_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[INPUT.CONFIG_PARSE]"));
    assert!(stderr.contains("broken.json"));
}

#[test]
fn unwritable_output_path_exits_with_io_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let output_path = temp.path().join("missing-dir/surface.json");

    let output = run_cli(&[
        "generate",
        "--resolution",
        "2",
        "--output",
        output_path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [IO.OUTPUT_WRITE] failed to write surface output"));
    assert!(stderr.contains("missing-dir"));
    assert!(stderr.contains("FATAL EXIT CODE: 3"));
}

#[test]
fn check_accepts_valid_pair_and_rejects_invalid_one() {
    let valid = run_cli(&["check", "--degree", "3", "--order=-3"]);
    assert!(valid.status.success());
    assert_eq!(
        String::from_utf8_lossy(&valid.stdout).trim(),
        "Y(3, -3) is a valid spherical harmonic."
    );

    let invalid = run_cli(&["check", "--degree=-1", "--order", "0"]);
    assert_eq!(invalid.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&invalid.stderr).contains("Y(-1, 0)"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let output = run_cli(&["plot"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[INPUT.CLI_USAGE]"));
}

fn run_cli(args: &[&str]) -> Output {
    let binary_path = env!("CARGO_BIN_EXE_sphharm-rs");
    Command::new(binary_path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("CLI should run")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should be created");
    }
    fs::write(path, content).expect("file should be written");
}
