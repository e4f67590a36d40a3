use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Phase;

/// Observable actions of an intro sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SequenceEvent {
    PhaseChanged { from: Phase, to: Phase },
    Completed,
    TornDown,
}

pub struct EventBus {
    sender: broadcast::Sender<SequenceEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SequenceEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of receivers the event reached.
    pub fn publish(&self, event: SequenceEvent) -> usize {
        let reached = self.sender.send(event).unwrap_or(0);
        tracing::trace!(?event, reached, "event published");
        reached
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}
