use super::*;
use curtain_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_curtain_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[sequence]
reveal_delay_ms = 500
status_delay_ms = 1500

[overlay]
title = "Acme"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.sequence.reveal_delay_ms, 500);
    assert_eq!(config.sequence.status_delay_ms, 1500);
    assert_eq!(config.overlay.title, "Acme");
    // Defaults preserved
    assert_eq!(config.sequence.complete_delay_ms, 3400);
    assert_eq!(config.overlay.status_text, "SYSTEM_ARMED");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[sequence\nreveal_delay_ms = ").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn out_of_order_delays_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[sequence]\nreveal_delay_ms = 3000\nstatus_delay_ms = 1000\n[overlay]\ntitle = \"Acme\"\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.sequence.reveal_delay_ms, 800);
    assert_eq!(config.overlay.title, "QwertyDeveloper");
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[sequence]"));
    assert!(written.contains("complete_delay_ms = 3400"));
}

#[test]
fn template_parses_to_defaults() {
    let config: crate::schema::CurtainConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.sequence.reveal_delay_ms, 800);
    assert_eq!(config.overlay.frame_rate, 30);
}

#[test]
fn default_path_ends_with_curtain_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("curtain/config.toml"));
    }
}
