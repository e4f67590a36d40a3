mod color;
mod phase;

pub use color::*;
pub use phase::*;
