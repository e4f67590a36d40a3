//! Color format validation.

use crate::colors::validate_color;
use crate::schema::CurtainConfig;

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &CurtainConfig) {
    let colors = &config.colors;
    for (name, value) in [
        ("colors.background", &colors.background),
        ("colors.text", &colors.text),
        ("colors.accent", &colors.accent),
        ("colors.glow", &colors.glow),
    ] {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }
}
