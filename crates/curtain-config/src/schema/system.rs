//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "curtain=trace",
            LogLevel::Debug => "curtain=debug",
            LogLevel::Info => "curtain=info",
            LogLevel::Warning => "curtain=warn",
            LogLevel::Error => "curtain=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_target_curtain() {
        assert_eq!(LogLevel::Info.as_directive(), "curtain=info");
        assert_eq!(LogLevel::Warning.as_directive(), "curtain=warn");
    }
}
