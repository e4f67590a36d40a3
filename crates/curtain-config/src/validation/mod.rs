//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod colors;
mod helpers;
mod overlay;
mod sequence;

#[cfg(test)]
mod tests;

use crate::schema::CurtainConfig;
use curtain_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CurtainConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sequence::validate_sequence(&mut errors, config);
    overlay::validate_overlay(&mut errors, config);
    colors::validate_colors(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
