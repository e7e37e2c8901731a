//! Tests for config loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_explicit_file_is_loaded() {
    let file = write_config("[service]\nbase_url = \"http://box:1234\"\n");

    let config = load(Some(file.path())).unwrap();

    assert_eq!(config.service.base_url, "http://box:1234");
}

#[test]
fn test_partial_file_keeps_the_other_defaults() {
    let file = write_config("[service]\ntimeout_ms = 500\n");

    let config = load(Some(file.path())).unwrap();

    assert_eq!(config.service.base_url, "http://localhost:5000");
    assert_eq!(config.service.timeout_ms, Some(500));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = load(Some(Path::new("/nonexistent/omnibar.toml")));

    assert!(matches!(result, Err(OmnibarError::ConfigRead { .. })));
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let file = write_config("[service\nbase_url = 3");

    let result = load(Some(file.path()));

    assert!(matches!(result, Err(OmnibarError::ConfigParse { .. })));
}

#[test]
fn test_no_explicit_path_never_fails() {
    // With or without a real user config on the machine, startup
    // must not error from the default lookup.
    assert!(load(None).is_ok());
}

#[test]
fn test_default_path_ends_with_the_app_folder() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("omnibar/config.toml"));
    }
}
