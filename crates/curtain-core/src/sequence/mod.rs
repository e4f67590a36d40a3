//! Intro sequence timing and phase transitions.

mod delays;
mod sequencer;


pub use delays::{SequenceDelays, MAX_DELAY};
pub use sequencer::IntroSequencer;
