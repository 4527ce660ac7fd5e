//! Integration tests for the sponsor-countries binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sponsor-countries"));
    cmd.env_remove("SPONSOR_COUNTRIES_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_paths_relative_to_working_dir() {
    let root = TempDir::new().unwrap();
    let work = root.path().join("scripts");
    let data = root.path().join("json_results_from_browser");
    fs::create_dir_all(&work).unwrap();
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("institutions_and_fellowship_sponsors.json"),
        r#"{"institutions_and_fellowship_sponsors":[{"Country":"France"},{"Country":"Canada"},{"Country":"France"}]}"#,
    )
    .unwrap();

    let output = bin().current_dir(&work).arg("--no-color").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Extracted 2 countries"));
    assert!(stdout.contains("./countries.txt"));
    assert_eq!(
        fs::read_to_string(work.join("countries.txt")).unwrap(),
        "Canada\nFrance\n"
    );
}

#[test]
fn test_json_summary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.txt");
    fs::write(
        &input,
        r#"{"institutions_and_fellowship_sponsors":[{"Country":"Peru"}]}"#,
    )
    .unwrap();

    let output = bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["countries"], 1);
    assert_eq!(summary["records"], 1);
}

#[test]
fn test_schema_error_exits_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.txt");
    fs::write(&input, r#"{"other_key":[]}"#).unwrap();

    let output = bin()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .arg("--no-color")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Missing top-level key 'institutions_and_fellowship_sponsors'"));
    assert!(!out.exists());
}

#[test]
fn test_missing_input_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    let output = bin()
        .arg("--input")
        .arg(dir.path().join("absent.json"))
        .arg("--output")
        .arg(dir.path().join("out.txt"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input file not found"));
}

#[test]
fn test_config_file_from_environment() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("from_env.txt");
    let config = dir.path().join("extractor.toml");
    fs::write(
        &input,
        r#"{"sponsors":[{"Country":"Chile"},{"Country":"Peru"}]}"#,
    )
    .unwrap();
    fs::write(
        &config,
        format!(
            "input_path = {:?}\noutput_path = {:?}\ncollection_key = \"sponsors\"\n",
            input.to_str().unwrap(),
            out.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = bin()
        .env("SPONSOR_COUNTRIES_CONFIG", &config)
        .arg("--no-color")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("from_env.txt"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "Chile\nPeru\n");
}
