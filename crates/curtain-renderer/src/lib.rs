//! Presentation layer for the intro overlay.
//!
//! [`IntroOverlay`] turns the sequence phase and the clock into an
//! [`OverlayFrame`]; a [`Presenter`] draws frames somewhere.

pub mod easing;
pub mod overlay;
pub mod terminal;

pub use overlay::{IntroOverlay, OverlayFrame, OverlayStyle};
pub use terminal::{Presenter, TerminalPresenter};
