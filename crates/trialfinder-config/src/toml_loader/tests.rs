//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{HostKind, LocationMode, TrialFinderConfig, DEFAULT_WIDGET_ID};
use std::path::Path;
use trialfinder_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_trialfinder_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[widget]
id = "oncology-west"

[bridge]
host = "frame"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.widget.id, "oncology-west");
    assert_eq!(config.bridge.host, HostKind::Frame);
    // Defaults preserved
    assert_eq!(config.bridge.fallback_height, 600);
    assert_eq!(config.location.mode, LocationMode::Ip);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[widget\nid = ").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_out_of_range_values_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[widget]
id = "custom"

[location]
mode = "fixed"
latitude = 123.0
longitude = 0.0
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.widget.id, DEFAULT_WIDGET_ID);
    assert_eq!(config.location.mode, LocationMode::Ip);
}

#[test]
fn create_default_config_writes_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.widget.id, DEFAULT_WIDGET_ID);
}

#[test]
fn default_template_parses_to_default_config() {
    let config: TrialFinderConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.widget.id, DEFAULT_WIDGET_ID);
    assert_eq!(config.window.header_height, 96);
}

#[test]
fn default_config_path_ends_with_config_toml() {
    let path = default_config_path().unwrap();
    assert_eq!(path.file_name().unwrap(), "config.toml");
    assert!(path.parent().unwrap().ends_with("trialfinder"));
}
