//! Types for the intro overlay.

use curtain_common::{Color, Phase, RenderError};
use curtain_config::{parse_color, CurtainConfig};

/// Overlay text, colors and motion timings.
///
/// Extracted from `CurtainConfig` at startup. Durations are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub title: String,
    pub title_mark: String,
    pub status_text: String,
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub glow: Color,
    pub reveal_duration: f32,
    pub tracking_duration: f32,
    pub status_duration: f32,
    pub exit_duration: f32,
    pub atmosphere_period: f32,
    pub status_opacity: f32,
    pub frame_opacity: f32,
}

impl OverlayStyle {
    pub fn from_config(config: &CurtainConfig) -> Result<Self, RenderError> {
        let color = |s: &str| parse_color(s).map_err(|e| RenderError::Color(e.to_string()));
        let overlay = &config.overlay;

        Ok(Self {
            title: overlay.title.clone(),
            title_mark: overlay.title_mark.clone(),
            status_text: overlay.status_text.clone(),
            background: color(&config.colors.background)?,
            text: color(&config.colors.text)?,
            accent: color(&config.colors.accent)?,
            glow: color(&config.colors.glow)?,
            reveal_duration: overlay.reveal_duration as f32,
            tracking_duration: overlay.tracking_duration as f32,
            status_duration: overlay.status_duration as f32,
            exit_duration: overlay.exit_duration as f32,
            atmosphere_period: overlay.atmosphere_period as f32,
            status_opacity: overlay.status_opacity as f32,
            frame_opacity: overlay.frame_opacity as f32,
        })
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            title: "QwertyDeveloper".into(),
            title_mark: ".".into(),
            status_text: "SYSTEM_ARMED".into(),
            background: Color::BLACK,
            text: Color::WHITE,
            accent: Color::from_rgba(37, 99, 235, 255), // #2563eb
            glow: Color::from_rgba(37, 99, 235, 51),
            reveal_duration: 1.0,
            tracking_duration: 1.8,
            status_duration: 0.3,
            exit_duration: 1.4,
            atmosphere_period: 5.0,
            status_opacity: 0.6,
            frame_opacity: 0.1,
        }
    }
}

/// Composed visual state of the overlay at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub phase: Phase,
    /// Whole-overlay opacity; drops to 0 during the exit.
    pub opacity: f32,
    pub scale: f32,
    /// Whole-overlay blur radius in px.
    pub blur: f32,
    pub atmosphere: AtmosphereLayer,
    /// Opacity of the rounded frame boundary.
    pub frame_opacity: f32,
    pub title: Option<TitleLayer>,
    pub status: Option<StatusLayer>,
}

/// Pulsing radial glow behind the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereLayer {
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleLayer {
    pub opacity: f32,
    pub blur: f32,
    /// Vertical offset in px; positive is below the resting position.
    pub offset_y: f32,
    pub letter_spacing_em: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusLayer {
    pub opacity: f32,
    pub offset_y: f32,
    pub indicator_opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_default_config() {
        let from_config = OverlayStyle::from_config(&CurtainConfig::default()).unwrap();
        assert_eq!(from_config, OverlayStyle::default());
    }

    #[test]
    fn from_config_rejects_bad_color() {
        let mut config = CurtainConfig::default();
        config.colors.text = "chartreuse".into();
        let err = OverlayStyle::from_config(&config).unwrap_err();
        assert!(matches!(err, RenderError::Color(_)));
        assert!(err.to_string().contains("chartreuse"));
    }

    #[test]
    fn from_config_copies_text() {
        let mut config = CurtainConfig::default();
        config.overlay.title = "Acme".into();
        config.overlay.status_text = "READY".into();
        let style = OverlayStyle::from_config(&config).unwrap();
        assert_eq!(style.title, "Acme");
        assert_eq!(style.status_text, "READY");
    }
}
