//! Overlay color configuration.

use serde::{Deserialize, Serialize};

/// Overlay colors as `#RRGGBB`, `#RRGGBBAA` or `rgba(r,g,b,a)` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub glow: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#000000".into(),
            text: "#ffffff".into(),
            accent: "#2563eb".into(),
            glow: "rgba(37,99,235,0.2)".into(),
        }
    }
}
