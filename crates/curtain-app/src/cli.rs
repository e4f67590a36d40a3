use std::path::PathBuf;

use clap::Parser;

/// Curtain: plays a timed intro overlay, then hands the screen back.
#[derive(Parser, Debug)]
#[command(name = "curtain", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log directive override (e.g. `curtain=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Dismiss the intro after this many milliseconds, as a host would.
    #[arg(long, value_name = "MS")]
    pub dismiss_after: Option<u64>,

    /// Print visible text only, without escape codes.
    #[arg(long)]
    pub plain: bool,

    /// Redraw rate override (frames per second).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: Option<u32>,

    /// Terminal width in columns.
    #[arg(long, env = "COLUMNS", default_value_t = 80)]
    pub cols: u16,

    /// Terminal height in rows.
    #[arg(long, env = "LINES", default_value_t = 24)]
    pub rows: u16,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["curtain", "--cols", "80", "--rows", "24"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.dismiss_after.is_none());
        assert!(!args.plain);
        assert!(args.fps.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "curtain",
            "--config",
            "/tmp/c.toml",
            "--dismiss-after",
            "1000",
            "--plain",
            "--fps",
            "60",
            "--cols",
            "120",
            "--rows",
            "40",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("/tmp/c.toml")));
        assert_eq!(args.dismiss_after, Some(1000));
        assert!(args.plain);
        assert_eq!(args.fps, Some(60));
        assert_eq!((args.cols, args.rows), (120, 40));
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(Args::try_parse_from(["curtain", "--fps", "0"]).is_err());
    }
}
