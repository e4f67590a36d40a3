use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error(
        "sequence delays must satisfy reveal < status < complete \
         (got {reveal:?}, {status:?}, {complete:?})"
    )]
    OutOfOrder {
        reveal: Duration,
        status: Duration,
        complete: Duration,
    },

    #[error("sequence delay {delay:?} exceeds the {max:?} limit")]
    TooLong { delay: Duration, max: Duration },
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid color: {0}")]
    Color(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CurtainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("sequence.reveal_delay_ms".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sequence.reveal_delay_ms"
        );
    }

    #[test]
    fn sequence_error_display_names_all_delays() {
        let err = SequenceError::OutOfOrder {
            reveal: Duration::from_millis(900),
            status: Duration::from_millis(800),
            complete: Duration::from_millis(3400),
        };
        let msg = err.to_string();
        assert!(msg.contains("reveal < status < complete"));
        assert!(msg.contains("900ms"));
        assert!(msg.contains("3.4s"));
    }

    #[test]
    fn sequence_error_display_too_long() {
        let err = SequenceError::TooLong {
            delay: Duration::from_secs(90),
            max: Duration::from_secs(60),
        };
        assert_eq!(err.to_string(), "sequence delay 90s exceeds the 60s limit");
    }

    #[test]
    fn render_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RenderError = io_err.into();
        assert!(matches!(err, RenderError::Io(_)));
        assert_eq!(err.to_string(), "render io error: pipe closed");
    }

    #[test]
    fn curtain_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: CurtainError = config_err.into();
        assert!(matches!(err, CurtainError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn curtain_error_from_sequence() {
        let seq_err = SequenceError::OutOfOrder {
            reveal: Duration::ZERO,
            status: Duration::ZERO,
            complete: Duration::ZERO,
        };
        let err: CurtainError = seq_err.into();
        assert!(matches!(err, CurtainError::Sequence(_)));
    }

    #[test]
    fn curtain_error_from_render_and_io() {
        let err: CurtainError = RenderError::Color("#zzz".into()).into();
        assert_eq!(err.to_string(), "invalid color: #zzz");

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CurtainError = io_err.into();
        assert!(matches!(err, CurtainError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn curtain_error_other() {
        let err = CurtainError::Other("runtime unavailable".into());
        assert_eq!(err.to_string(), "runtime unavailable");
    }
}
