//! Intro sequence core.
//!
//! [`IntroSequencer`] owns the intro phase and the three one-shot timers
//! that advance it and finally hand control back to the host.

pub mod sequence;

pub use sequence::{IntroSequencer, SequenceDelays, MAX_DELAY};
