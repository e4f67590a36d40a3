//! Configuration schema types for Curtain.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stock intro timing and look.

mod colors;
mod overlay;
mod sequence;
mod system;

pub use colors::*;
pub use overlay::*;
pub use sequence::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Curtain.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct CurtainConfig {
    pub sequence: SequenceConfig,
    pub overlay: OverlayConfig,
    pub colors: ColorConfig,
    pub logging: LoggingConfig,
}
