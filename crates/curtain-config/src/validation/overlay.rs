//! Overlay content and motion validation.

use crate::schema::CurtainConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_overlay(errors: &mut Vec<String>, config: &CurtainConfig) {
    let overlay = &config.overlay;

    if overlay.title.trim().is_empty() {
        errors.push("overlay.title must not be empty".into());
    }

    for (name, value) in [
        ("overlay.reveal_duration", overlay.reveal_duration),
        ("overlay.tracking_duration", overlay.tracking_duration),
        ("overlay.status_duration", overlay.status_duration),
        ("overlay.exit_duration", overlay.exit_duration),
    ] {
        validate_range_f64(errors, name, value, 0.0, 10.0);
    }

    validate_range_f64(
        errors,
        "overlay.atmosphere_period",
        overlay.atmosphere_period,
        0.5,
        60.0,
    );
    validate_range_f64(
        errors,
        "overlay.status_opacity",
        overlay.status_opacity,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "overlay.frame_opacity",
        overlay.frame_opacity,
        0.0,
        1.0,
    );
    validate_range(
        errors,
        "overlay.frame_rate",
        u64::from(overlay.frame_rate),
        1,
        120,
    );
}
