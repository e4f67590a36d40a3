pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, CurtainError, RenderError, SequenceError};
pub use events::{EventBus, SequenceEvent};
pub use id::{new_correlation_id, ActivationId};
pub use types::{Color, Phase};

pub type Result<T> = std::result::Result<T, CurtainError>;
