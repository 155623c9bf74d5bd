//! Tests for layered settings

use std::path::PathBuf;

use tempfile::TempDir;

use rstree::config::{config_template, local_config_path, Settings};
use rstree::TreeError;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("rstree.toml");
    std::fs::write(&path, content).expect("write config file");
    path
}

#[test]
fn given_no_sources_then_compiled_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.max_depth, 128);
    assert!(!settings.no_color);
}

#[test]
fn given_config_file_when_loading_then_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "max_depth = 16\nno_color = true\n");

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.max_depth, 16);
    assert!(settings.no_color);
}

#[test]
fn given_partial_config_file_when_loading_then_rest_stays_default() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "no_color = true\n");

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.max_depth, 128);
    assert!(settings.no_color);
}

#[test]
fn given_template_when_loading_then_matches_defaults() {
    // The shipped template only contains commented-out values
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, &config_template());

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_malformed_config_file_when_loading_then_errors() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "max_depth = \"not a number\"\n");

    let result = Settings::load_from(&path);

    assert!(matches!(result, Err(TreeError::InvalidConfig { .. })));
}

#[test]
fn given_missing_config_file_when_loading_then_io_error() {
    let result = Settings::load_from(&PathBuf::from("/nonexistent/rstree.toml"));

    assert!(matches!(result, Err(TreeError::Io(_))));
}

#[test]
fn local_config_path_is_hidden_toml() {
    assert_eq!(local_config_path(), PathBuf::from(".rstree.toml"));
}
