// Config persistence round-trips and defaulting.

use pole_core::{rgb_to_normalized, ConfigError, PoleConfig, PoleOffset};

#[test]
fn defaults_match_shipped_values() {
    let config = PoleConfig::default();
    assert_eq!(config.transparency, 1.0);
    assert_eq!(config.height, 10.0);
    assert_eq!(config.color, [130, 80, 230]);
    assert_eq!(config.size, 0.2);
    assert!(config.base_station_serial.is_none());
    assert_eq!(config.offset(), PoleOffset::default());
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = PoleConfig::default();
    config.size = 0.35;
    config.base_station_serial = Some("LHB-32E3676B".to_string());
    config.set_offset(&PoleOffset::new(1.7, 0.0, 1.73));

    config.save(&path).unwrap();
    let loaded = PoleConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn load_or_create_writes_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    assert!(!path.exists());

    let config = PoleConfig::load_or_create(&path).unwrap();
    assert_eq!(config, PoleConfig::default());
    assert!(path.exists(), "missing file must be created with defaults");
}

#[test]
fn load_or_create_prefers_the_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut custom = PoleConfig::default();
    custom.height = 2.5;
    custom.save(&path).unwrap();

    let loaded = PoleConfig::load_or_create(&path).unwrap();
    assert_eq!(loaded.height, 2.5);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"x": 1.7, "base_station_serial": "LHB-1"}"#).unwrap();

    let config = PoleConfig::load(&path).unwrap();
    assert_eq!(config.x, 1.7);
    assert_eq!(config.base_station_serial.as_deref(), Some("LHB-1"));
    assert_eq!(config.height, 10.0);
    assert_eq!(config.color, [130, 80, 230]);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json {{{").unwrap();

    let err = PoleConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PoleConfig::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.json");

    PoleConfig::default().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn offset_accessors_round_trip() {
    let mut config = PoleConfig::default();
    let offset = PoleOffset::new(-0.5, 0.25, 3.0);
    config.set_offset(&offset);
    assert_eq!(config.offset(), offset);
    assert_eq!(config.x, -0.5);
    assert_eq!(config.y, 0.25);
    assert_eq!(config.z, 3.0);
}

#[test]
fn rgb_normalization_rounds_to_one_decimal() {
    assert_eq!(rgb_to_normalized([130, 80, 230]), [0.5, 0.3, 0.9]);
    assert_eq!(rgb_to_normalized([255, 255, 255]), [1.0, 1.0, 1.0]);
    assert_eq!(rgb_to_normalized([0, 0, 0]), [0.0, 0.0, 0.0]);
    assert_eq!(rgb_to_normalized([128, 128, 128]), [0.5, 0.5, 0.5]);
}
