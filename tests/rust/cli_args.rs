use clap::Parser;
use std::path::PathBuf;

use city_search::cli::args::CliArgs;
use city_search::core::errors::CoreError;
use city_search::core::metric::DistanceMetric;

#[test]
fn defaults_run_interactive_shell() {
    let args = CliArgs::try_parse_from(["city-search"]).unwrap();

    assert_eq!(args.norm, DistanceMetric::L2);
    assert!(args.one_shot_request().unwrap().is_none());

    let config = args.resolve_config().unwrap();
    assert_eq!(config.data_path, PathBuf::from("data.txt"));
}

#[test]
fn overrides_replace_config_values() {
    let args = CliArgs::try_parse_from([
        "city-search",
        "--data",
        "nordic.txt",
        "--log-level",
        "debug",
    ])
    .unwrap();

    let config = args.resolve_config().unwrap();
    assert_eq!(config.data_path, PathBuf::from("nordic.txt"));
    assert_eq!(config.log_level, "debug");
}

#[test]
fn one_shot_request_carries_norm_tag() {
    let args = CliArgs::try_parse_from([
        "city-search",
        "--city",
        "Oslo",
        "--radius",
        "4.5",
        "--norm",
        "manhattan",
    ])
    .unwrap();

    let request = args.one_shot_request().unwrap().unwrap();
    assert_eq!(request.city, "Oslo");
    assert_eq!(request.radius, 4.5);
    assert_eq!(request.norm, 2);
}

#[test]
fn city_without_radius_is_invalid_argument() {
    let args = CliArgs::try_parse_from(["city-search", "--city", "Oslo"]).unwrap();
    assert!(matches!(
        args.one_shot_request(),
        Err(CoreError::InvalidArgument(_))
    ));
}

#[test]
fn unknown_norm_is_rejected_by_parser() {
    assert!(CliArgs::try_parse_from(["city-search", "--norm", "9"]).is_err());
}

#[test]
fn load_failure_is_reported_once_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_city-search"))
        .arg("--data")
        .arg(&missing)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("파일 열기 실패").count(), 1, "stderr: {}", stderr);
}
