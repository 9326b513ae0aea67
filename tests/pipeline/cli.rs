use clap::{CommandFactory, Parser};
use stabkit::cli::{run, Cli};
use tempfile::TempDir;

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("stabkit.toml");
    std::fs::write(
        &config_path,
        "[extraction]\nuse_circles = true\n[output]\ndebug = false\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "stabkit",
        "drawing.svg",
        "-c",
        config_path.to_str().unwrap(),
        "--paths",
        "--no-circles",
        "--debug",
    ]);
    let config = cli.load_config().unwrap();

    assert!(config.extraction.use_paths);
    assert!(!config.extraction.use_circles);
    assert!(config.output.debug);
}

#[test]
fn test_run_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("drawing.svg");
    let output = dir.path().join("drawing.gcode");
    let config_path = dir.path().join("stabkit.toml");
    std::fs::write(
        &input,
        r#"<svg><circle id="a" cx="1" cy="2" r="1"/></svg>"#,
    )
    .unwrap();
    std::fs::write(&config_path, "").unwrap();

    let cli = Cli::parse_from([
        "stabkit",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-c",
        config_path.to_str().unwrap(),
        "--debug",
    ]);
    run(&cli).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("G54 (A4 centre reference)\n"));
    assert!(written.contains("(a)\nG0 X1.00 Y2.00\n"));
    assert!(written.ends_with("G53 X-5 Y-5 (return to home)\n"));
}

#[test]
fn test_run_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.svg");
    let output = dir.path().join("broken.gcode");
    let config_path = dir.path().join("stabkit.toml");
    std::fs::write(&input, r#"<svg><circle cx="1" cy="2"/></svg>"#).unwrap();
    std::fs::write(&config_path, "").unwrap();

    let cli = Cli::parse_from([
        "stabkit",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-c",
        config_path.to_str().unwrap(),
    ]);
    let err = run(&cli).unwrap_err();

    assert!(format!("{:#}", err).contains("attribute 'r'"));
    assert!(!output.exists());
}
