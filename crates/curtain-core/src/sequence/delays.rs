//! Step offsets of an intro sequence.

use std::time::Duration;

use curtain_common::{Phase, SequenceError};
use curtain_config::schema::{SequenceConfig, MAX_DELAY_MS};

/// Longest offset a step may have.
pub const MAX_DELAY: Duration = Duration::from_millis(MAX_DELAY_MS);

/// Offsets from activation at which the sequence reveals the title,
/// reveals the status line, and completes.
///
/// Always ordered `reveal < status < complete`, none beyond [`MAX_DELAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceDelays {
    reveal: Duration,
    status: Duration,
    complete: Duration,
}

impl SequenceDelays {
    pub fn new(
        reveal: Duration,
        status: Duration,
        complete: Duration,
    ) -> Result<Self, SequenceError> {
        if !(reveal < status && status < complete) {
            return Err(SequenceError::OutOfOrder {
                reveal,
                status,
                complete,
            });
        }
        // Ordered, so `complete` is the largest.
        if complete > MAX_DELAY {
            return Err(SequenceError::TooLong {
                delay: complete,
                max: MAX_DELAY,
            });
        }
        Ok(Self {
            reveal,
            status,
            complete,
        })
    }

    pub fn from_millis(reveal: u64, status: u64, complete: u64) -> Result<Self, SequenceError> {
        Self::new(
            Duration::from_millis(reveal),
            Duration::from_millis(status),
            Duration::from_millis(complete),
        )
    }

    pub fn reveal(&self) -> Duration {
        self.reveal
    }

    pub fn status(&self) -> Duration {
        self.status
    }

    pub fn complete(&self) -> Duration {
        self.complete
    }

    /// Offset at which `phase` is entered.
    pub fn offset_of(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Idle => Duration::ZERO,
            Phase::Revealed => self.reveal,
            Phase::Armed => self.status,
        }
    }

    /// Phase a sequence shows `elapsed` after activation.
    pub fn phase_at(&self, elapsed: Duration) -> Phase {
        if elapsed >= self.status {
            Phase::Armed
        } else if elapsed >= self.reveal {
            Phase::Revealed
        } else {
            Phase::Idle
        }
    }

    /// Whether completion is due `elapsed` after activation.
    pub fn is_complete_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.complete
    }
}

impl Default for SequenceDelays {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(800),
            status: Duration::from_millis(2200),
            complete: Duration::from_millis(3400),
        }
    }
}

impl TryFrom<&SequenceConfig> for SequenceDelays {
    type Error = SequenceError;

    fn try_from(config: &SequenceConfig) -> Result<Self, Self::Error> {
        Self::from_millis(
            config.reveal_delay_ms,
            config.status_delay_ms,
            config.complete_delay_ms,
        )
    }
}
