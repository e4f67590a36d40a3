//! Intro sequence timing configuration.

use serde::{Deserialize, Serialize};

/// Upper bound on any step offset (one minute).
pub const MAX_DELAY_MS: u64 = 60_000;

/// Offsets from activation, in milliseconds, for the three sequence steps.
///
/// Must satisfy `reveal_delay_ms < status_delay_ms < complete_delay_ms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Title reveal.
    pub reveal_delay_ms: u64,
    /// Status indicator reveal.
    pub status_delay_ms: u64,
    /// Completion hand-off to the host.
    pub complete_delay_ms: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 800,
            status_delay_ms: 2200,
            complete_delay_ms: 3400,
        }
    }
}
