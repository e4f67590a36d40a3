//! Overlay content and motion configuration.

use serde::{Deserialize, Serialize};

/// What the overlay shows and how its layers move.
///
/// Durations are in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub title: String,
    /// Trailing mark drawn after the title in the accent color.
    pub title_mark: String,
    pub status_text: String,
    pub reveal_duration: f64,
    pub tracking_duration: f64,
    pub status_duration: f64,
    pub exit_duration: f64,
    /// Period of the background glow pulse.
    pub atmosphere_period: f64,
    pub status_opacity: f64,
    pub frame_opacity: f64,
    /// Redraw rate of the host loop (valid range: 1-120).
    pub frame_rate: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "QwertyDeveloper".into(),
            title_mark: ".".into(),
            status_text: "SYSTEM_ARMED".into(),
            reveal_duration: 1.0,
            tracking_duration: 1.8,
            status_duration: 0.3,
            exit_duration: 1.4,
            atmosphere_period: 5.0,
            status_opacity: 0.6,
            frame_opacity: 0.1,
            frame_rate: 30,
        }
    }
}
