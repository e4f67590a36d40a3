mod cli;
mod host;

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use curtain_common::{CurtainError, EventBus};
use curtain_config::CurtainConfig;
use curtain_core::SequenceDelays;
use curtain_renderer::{OverlayStyle, TerminalPresenter};
use tracing_subscriber::EnvFilter;

use host::{HostOptions, HostOutcome};

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Give the cursor back before the panic message lands.
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x1b[0m\x1b[?25h\n");
        let _ = stdout.flush();
        default_hook(info);
    }));
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();

    // Config is loaded before logging so its level can seed the filter.
    let loaded = curtain_config::load_config(args.config.as_deref());
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => CurtainConfig::default(),
    };

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_directive());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("Curtain v{} starting...", env!("CARGO_PKG_VERSION"));
    match &loaded {
        Ok(_) => match &args.config {
            Some(path) => tracing::info!("Config loaded from {}", path.display()),
            None => tracing::info!("Config loaded"),
        },
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config)) {
        Ok(outcome) => {
            match outcome {
                HostOutcome::Completed => tracing::info!("Intro complete, application revealed"),
                HostOutcome::Dismissed => tracing::info!("Intro dismissed"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Intro failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args, config: CurtainConfig) -> Result<HostOutcome, CurtainError> {
    let delays = SequenceDelays::try_from(&config.sequence)?;
    let style = OverlayStyle::from_config(&config)?;
    let fps = args.fps.unwrap_or(config.overlay.frame_rate);

    tracing::debug!(
        reveal_ms = delays.reveal().as_millis() as u64,
        status_ms = delays.status().as_millis() as u64,
        complete_ms = delays.complete().as_millis() as u64,
        fps,
        "Intro configured"
    );

    let events = EventBus::default();
    let mut event_rx = events.subscribe();
    let logger = tokio::spawn(async move {
        while let Ok(event) = event_rx.recv().await {
            tracing::debug!(?event, "sequence event");
        }
    });

    let options = HostOptions {
        delays,
        frame_interval: HostOptions::frame_interval_for(fps),
        dismiss_after: args.dismiss_after.map(Duration::from_millis),
    };
    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let stdout = std::io::stdout();
    let outcome = if args.plain {
        let mut presenter = TerminalPresenter::plain(stdout.lock(), args.cols, args.rows);
        host::run_intro(options, style, &mut presenter, events, shutdown).await
    } else {
        let mut presenter = TerminalPresenter::new(stdout.lock(), args.cols, args.rows);
        host::run_intro(options, style, &mut presenter, events, shutdown).await
    };

    logger.abort();
    outcome
}
