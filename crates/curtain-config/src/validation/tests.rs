//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = CurtainConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_reveal_after_status() {
    let mut config = CurtainConfig::default();
    config.sequence.reveal_delay_ms = 2500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sequence.reveal_delay_ms (2500)"));
}

#[test]
fn catches_equal_status_and_complete() {
    let mut config = CurtainConfig::default();
    config.sequence.status_delay_ms = 3400;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sequence.status_delay_ms (3400)"));
}

#[test]
fn zero_reveal_delay_is_allowed() {
    let mut config = CurtainConfig::default();
    config.sequence.reveal_delay_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_delay_over_a_minute() {
    let mut config = CurtainConfig::default();
    config.sequence.complete_delay_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sequence.complete_delay_ms"));
}

#[test]
fn catches_empty_title() {
    let mut config = CurtainConfig::default();
    config.overlay.title = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.title"));
}

#[test]
fn catches_negative_exit_duration() {
    let mut config = CurtainConfig::default();
    config.overlay.exit_duration = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.exit_duration"));
}

#[test]
fn catches_nan_opacity() {
    let mut config = CurtainConfig::default();
    config.overlay.status_opacity = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.status_opacity"));
}

#[test]
fn catches_zero_frame_rate() {
    let mut config = CurtainConfig::default();
    config.overlay.frame_rate = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.frame_rate"));
}

#[test]
fn catches_bad_accent_color() {
    let mut config = CurtainConfig::default();
    config.colors.accent = "electric blue".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.accent"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = CurtainConfig::default();
    config.overlay.frame_rate = 500;
    config.colors.text = "".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.frame_rate"));
    assert!(err.contains("colors.text"));
    assert!(err.contains("; "));
}
