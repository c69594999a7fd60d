use rstest::rstest;
use std::io::Write;
use std::path::PathBuf;

use city_search::core::config::CitySearchConfig;
use city_search::core::errors::CoreError;

#[test]
fn empty_object_uses_defaults() {
    let config = CitySearchConfig::from_json("{}").unwrap();
    assert_eq!(config, CitySearchConfig::default());
    assert_eq!(config.data_path, PathBuf::from("data.txt"));
    assert_eq!(config.exit_sentinel, "0");
}

#[test]
fn load_reads_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"data_path": "cities.txt", "log_level": "debug", "exit_sentinel": "quit"}}"#
    )
    .unwrap();

    let config = CitySearchConfig::load(file.path()).unwrap();
    assert_eq!(config.data_path, PathBuf::from("cities.txt"));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.exit_sentinel, "quit");
}

#[rstest]
#[case(r#"{"exit_sentinel": ""}"#)]
#[case(r#"{"log_level": "  "}"#)]
#[case(r#"{"data_path": ""}"#)]
fn empty_fields_are_invalid_config(#[case] raw: &str) {
    assert!(matches!(
        CitySearchConfig::from_json(raw),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn malformed_json_is_serialization_error() {
    assert!(matches!(
        CitySearchConfig::from_json("{ data_path"),
        Err(CoreError::Serialization(_))
    ));
}
