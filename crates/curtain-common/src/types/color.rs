use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::from_rgba(255, 255, 255, 255);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Composite `self` over an opaque `backdrop` at the given opacity.
    ///
    /// The color's own alpha multiplies `opacity`. The result is opaque.
    pub fn over(&self, backdrop: Color, opacity: f32) -> Color {
        let alpha = (opacity.clamp(0.0, 1.0) * (self.a as f32 / 255.0)).clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (bg as f32 + (fg as f32 - bg as f32) * alpha).round() as u8
        };
        Color {
            r: mix(self.r, backdrop.r),
            g: mix(self.g, backdrop.g),
            b: mix(self.b, backdrop.b),
            a: 255,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_six_and_eight_digits() {
        assert_eq!(
            Color::from_hex("#2563eb"),
            Some(Color::from_rgba(0x25, 0x63, 0xeb, 255))
        );
        assert_eq!(
            Color::from_hex("ffffff80"),
            Some(Color::from_rgba(255, 255, 255, 0x80))
        );
        assert_eq!(Color::from_hex("#abc"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
    }

    #[test]
    fn to_hex_omits_opaque_alpha() {
        assert_eq!(Color::from_rgba(37, 99, 235, 255).to_hex(), "#2563eb");
        assert_eq!(Color::from_rgba(0, 0, 0, 16).to_hex(), "#00000010");
    }

    #[test]
    fn over_endpoints() {
        let blue = Color::from_rgba(37, 99, 235, 255);
        assert_eq!(blue.over(Color::BLACK, 0.0), Color::BLACK);
        assert_eq!(blue.over(Color::BLACK, 1.0), blue);
    }

    #[test]
    fn over_halfway_on_black() {
        let mid = Color::WHITE.over(Color::BLACK, 0.5);
        assert_eq!(mid, Color::from_rgba(128, 128, 128, 255));
    }

    #[test]
    fn over_respects_own_alpha() {
        let translucent = Color::from_rgba(255, 255, 255, 0);
        assert_eq!(translucent.over(Color::BLACK, 1.0), Color::BLACK);
    }
}
