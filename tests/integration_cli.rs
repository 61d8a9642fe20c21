use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_drift-ballistics"))
}

const REFERENCE_ARGS: &[&str] = &[
    "trajectory",
    "--velocity", "823",
    "--bc", "0.462",
    "--weight", "10.9",
    "--zero", "91",
    "--distance", "457",
    "--wind-speed", "4.5",
    "--wind-angle", "90",
    "--sight-height", "38",
];

#[test]
fn test_cli_trajectory_table() {
    let output = cli()
        .args(REFERENCE_ARGS)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Drop(mm)"), "Should contain table header: {}", stdout);
    assert!(stdout.contains("823"), "Should contain muzzle velocity");
}

#[test]
fn test_cli_output_format_json() {
    let output = cli()
        .args(REFERENCE_ARGS)
        .args(["--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    let rows = rows.as_array().expect("JSON array");
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["velocity"], 823);
    assert_eq!(rows[9]["distance"], 450);
    assert!(rows[9]["windDrift"].as_i64().unwrap() > 0);
}

#[test]
fn test_cli_output_format_csv() {
    let output = cli()
        .args(REFERENCE_ARGS)
        .args(["--output", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("distance_m,"));
    assert_eq!(lines.next(), Some("0,823,3691,-38,0,0.000,0.0,0.0"));
}

#[test]
fn test_cli_imperial_units() {
    let output = cli()
        .args([
            "trajectory",
            "--units", "imperial",
            "--velocity", "2700",
            "--bc", "0.462",
            "--weight", "168",
            "--zero", "100",
            "--distance", "500",
            "--wind-speed", "10",
            "--sight-height", "1.5",
            "--temperature", "59",
            "--output", "csv",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("distance_yd,velocity_fps"));
    // 2700 fps survives the metric round trip within rounding
    let muzzle = stdout.lines().nth(1).unwrap();
    let velocity: f64 = muzzle.split(',').nth(1).unwrap().parse().unwrap();
    assert!((velocity - 2700.0).abs() < 3.0, "muzzle row was {}", muzzle);
}

#[test]
fn test_cli_rejects_invalid_input() {
    let output = cli()
        .args(["trajectory", "--velocity", "0", "--bc", "0.462", "--weight", "10.9"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Zero velocity should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("muzzleVelocity"), "stderr: {}", stderr);
}

#[test]
fn test_cli_strict_zero() {
    let base = ["trajectory", "--velocity", "823", "--bc", "0.462", "--weight", "10.9", "--zero", "0"];

    let output = cli()
        .args(base)
        .arg("--strict-zero")
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success(), "Strict zero should reject a zero range of 0");

    let output = cli()
        .args(base)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Default policy falls back to a parallel sight line");
}

#[test]
fn test_cli_help() {
    let output = cli().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trajectory"), "Should list trajectory command");
    assert!(stdout.contains("serve"), "Should list serve command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_cli_invalid_command() {
    let output = cli().arg("invalid-command").output().expect("Failed to execute command");
    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_cli_missing_required_args() {
    let output = cli().arg("trajectory").output().expect("Failed to execute command");
    assert!(!output.status.success(), "Should fail with missing args");
}
