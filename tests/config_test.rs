//! Integration tests for Settings config loading.
//!
//! Precedence: defaults < settings file < RSHIER_* env vars. These tests cover
//! defaults and file merging with no RSHIER_* variables set; the environment
//! layer is tested in config_env_test.rs.

use std::fs;

use tempfile::TempDir;

use rshier::config::Settings;
use rshier::errors::HierarchyError;
use rshier::{HierarchyExt, TreeBuilder};

#[test]
fn given_no_settings_file_when_load_then_uses_defaults() {
    let settings = Settings::load(None).expect("load settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.delimiter, '.');
    assert_eq!(settings.max_depth, None);
}

#[test]
fn given_settings_file_when_load_then_file_values_override_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rshier.toml");
    fs::write(&path, "delimiter = \"/\"\nmax_depth = 32\n").unwrap();

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.delimiter, '/');
    assert_eq!(settings.max_depth, Some(32));
}

#[test]
fn given_partial_settings_file_when_load_then_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rshier.toml");
    fs::write(&path, "max_depth = 4\n").unwrap();

    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    assert_eq!(settings.delimiter, '.');
    assert_eq!(settings.max_depth, Some(4));
}

#[test]
fn given_missing_settings_file_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = Settings::load(Some(path.as_path()));

    assert!(matches!(result, Err(HierarchyError::Config { .. })));
}

#[test]
fn given_malformed_settings_file_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rshier.toml");
    fs::write(&path, "delimiter = \"::\"\n").unwrap();

    let result = Settings::load(Some(path.as_path()));

    let err = result.unwrap_err();
    assert!(matches!(err, HierarchyError::Config { .. }));
    assert!(err.to_string().contains("rshier.toml"));
}

#[test]
fn given_zero_max_depth_when_load_then_rejects_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rshier.toml");
    fs::write(&path, "max_depth = 0\n").unwrap();

    let result = Settings::load(Some(path.as_path()));

    assert!(matches!(result, Err(HierarchyError::InvalidArgument(_))));
}

#[test]
fn given_template_when_parsing_then_yields_defaults() {
    let settings = Settings::from_toml_str(&Settings::template()).expect("parse template");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_settings_when_rendering_toml_then_parses_back() {
    let settings = Settings {
        delimiter: ':',
        max_depth: Some(3),
    };

    let rendered = settings.to_toml().expect("render toml");

    assert!(rendered.contains("delimiter = \":\""));
    assert_eq!(Settings::from_toml_str(&rendered).unwrap(), settings);
}

#[test]
fn given_loaded_settings_when_building_and_walking_then_both_honor_them() {
    let settings = Settings::from_toml_str("delimiter = \"/\"\nmax_depth = 1\n").unwrap();

    let tree = TreeBuilder::from_settings(&settings).build(["a/b"]);
    assert_eq!(tree.leaf_paths_with(settings.delimiter), vec!["a/b"]);

    let items = [(1, 0), (2, 1), (3, 2)];
    let hierarchy = items
        .hierarchy(|c: &(i32, i32), p: &(i32, i32)| c.1 == p.0)
        .with_settings(&settings);
    assert_eq!(
        hierarchy.descendants_all(&items[0]),
        Err(HierarchyError::DepthLimitExceeded { limit: 1 })
    );
}
