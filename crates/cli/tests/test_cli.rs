use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

/// Write a file into the temp dir, unique per test, and get its path
fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("terra-plot-bin-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

fn terra_plot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_terra-plot"))
        .args(args)
        .output()
        .unwrap()
}

/// Check that the process failed with a diagnostic that includes `message`
fn assert_fails(output: &Output, message: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(stderr.contains("Error: "), "stderr: {}", stderr);
    assert!(stderr.contains(message), "stderr: {}", stderr);
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("terra-plot-bin-nonexistent.bin");
    let output = terra_plot(&[path.to_str().unwrap()]);
    assert_fails(&output, "error opening world file");
}

#[test]
fn test_malformed_bin() {
    let path = temp_file("malformed.bin", &[0xff, 0x00]);
    let output = terra_plot(&[path.to_str().unwrap()]);
    fs::remove_file(&path).unwrap();
    assert_fails(&output, "error deserializing world");
}

#[test]
fn test_missing_tiles() {
    let path = temp_file("no-tiles.json", br#"{"map": []}"#);
    let output = terra_plot(&[path.to_str().unwrap(), "--format", "json"]);
    fs::remove_file(&path).unwrap();
    assert_fails(&output, "tiles");
}

#[test]
fn test_missing_elevation() {
    let path = temp_file(
        "no-elevation.json",
        br#"{"tiles": [{"elevation": 4}, {"rainfall": 1}]}"#,
    );
    let output = terra_plot(&[path.to_str().unwrap(), "--format", "json"]);
    fs::remove_file(&path).unwrap();
    assert_fails(&output, "tile 1 has no elevation value");
}

#[test]
fn test_missing_world_arg() {
    let output = terra_plot(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_svg_output() {
    let world = temp_file(
        "world.json",
        br#"{"tiles": [{"elevation": 10}, {"elevation": 20}, {"elevation": 10}]}"#,
    );
    let config = temp_file("config.toml", b"bins = 5\n");
    let svg_path = std::env::temp_dir()
        .join(format!("terra-plot-bin-{}-out.svg", std::process::id()));

    let output = terra_plot(&[
        world.to_str().unwrap(),
        "--format",
        "json",
        "--config",
        config.to_str().unwrap(),
        "--output",
        svg_path.to_str().unwrap(),
        "--log-level",
        "off",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let svg = fs::read_to_string(&svg_path).unwrap();
    for path in &[&world, &config, &svg_path] {
        fs::remove_file(path).unwrap();
    }
    assert!(svg.contains("3 tiles in 5 bins"));
    assert_eq!(svg.matches("<rect").count(), 3);
}
