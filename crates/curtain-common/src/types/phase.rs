//! Intro sequence phase definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Intro sequence phase.
///
/// Phases only ever move forward: `Idle` -> `Revealed` -> `Armed`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Nothing revealed yet.
    #[default]
    Idle = 0,
    /// Title revealed.
    Revealed = 1,
    /// Status indicator revealed.
    Armed = 2,
}

impl Phase {
    /// Numeric step index (0, 1 or 2).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Phase::Idle),
            1 => Some(Phase::Revealed),
            2 => Some(Phase::Armed),
            _ => None,
        }
    }

    /// The following phase, or `None` from `Armed`.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Revealed => "revealed",
            Phase::Armed => "armed",
        };
        f.write_str(name)
    }
}
