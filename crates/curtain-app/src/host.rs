//! Host loop: runs one intro sequence and draws it until it is done.
//!
//! Activates an [`IntroSequencer`], redraws the overlay on a fixed frame
//! interval, plays the exit transition once the sequence completes and
//! then tears everything down. A dismissal or shutdown signal ends the
//! intro early.

use std::future::Future;
use std::time::Duration;

use curtain_common::{CurtainError, EventBus, Phase};
use curtain_core::{IntroSequencer, SequenceDelays};
use curtain_renderer::{IntroOverlay, OverlayStyle, Presenter};
use tokio::sync::oneshot;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::info;

/// How an intro run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOutcome {
    /// The sequence completed and its exit transition played out.
    Completed,
    /// The host dismissed the intro before it completed.
    Dismissed,
}

pub struct HostOptions {
    pub delays: SequenceDelays,
    pub frame_interval: Duration,
    /// Dismiss the intro this long after activation.
    pub dismiss_after: Option<Duration>,
}

impl HostOptions {
    pub fn frame_interval_for(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }
}

/// Play the intro on `presenter`.
///
/// `shutdown` resolving before completion dismisses the intro.
pub async fn run_intro<P, S>(
    options: HostOptions,
    style: OverlayStyle,
    presenter: &mut P,
    events: EventBus,
    shutdown: S,
) -> Result<HostOutcome, CurtainError>
where
    P: Presenter,
    S: Future<Output = ()>,
{
    let delays = options.delays;
    let (done_tx, mut done_rx) = oneshot::channel();
    let mut sequencer = IntroSequencer::activate_with_events(
        delays,
        move || {
            let _ = done_tx.send(());
        },
        events,
    );
    let mut phase_rx = sequencer.subscribe();
    let mut overlay = IntroOverlay::new(style);

    let mut ticker = interval(options.frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let dismiss = async {
        match options.dismiss_after {
            Some(after) => sleep(after).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(dismiss);
    tokio::pin!(shutdown);

    let mut completed = false;
    let outcome = loop {
        tokio::select! {
            Ok(()) = phase_rx.changed() => {
                let phase = *phase_rx.borrow_and_update();
                sync_overlay(&mut overlay, &delays, phase);
            }
            Ok(()) = &mut done_rx, if !completed => {
                completed = true;
                start_exit(&mut overlay, &delays);
            }
            () = &mut dismiss, if !completed => {
                // Completion may have landed in the same tick.
                if sequencer.is_complete() {
                    completed = true;
                    start_exit(&mut overlay, &delays);
                    continue;
                }
                info!(phase = %sequencer.phase(), "intro dismissed by host");
                break HostOutcome::Dismissed;
            }
            () = &mut shutdown, if !completed => {
                if sequencer.is_complete() {
                    completed = true;
                    start_exit(&mut overlay, &delays);
                    continue;
                }
                info!(phase = %sequencer.phase(), "intro interrupted");
                break HostOutcome::Dismissed;
            }
            _ = ticker.tick() => {
                let now = sequencer.elapsed();
                presenter.present(&overlay.compose(now), overlay.style())?;
                if overlay.is_exited(now) {
                    break HostOutcome::Completed;
                }
            }
        }
    };

    sequencer.teardown();
    presenter.clear()?;
    Ok(outcome)
}

/// Record every step up to `phase` at its scheduled offset, so motion
/// starts at the deadline rather than when the host noticed.
fn sync_overlay(overlay: &mut IntroOverlay, delays: &SequenceDelays, phase: Phase) {
    let mut step = Phase::Idle;
    while let Some(next) = step.next().filter(|next| *next <= phase) {
        overlay.set_phase(next, delays.offset_of(next));
        step = next;
    }
}

fn start_exit(overlay: &mut IntroOverlay, delays: &SequenceDelays) {
    sync_overlay(overlay, delays, Phase::Armed);
    overlay.begin_exit(delays.complete());
}

#[cfg(test)]
mod tests {
    use super::*;
    use curtain_common::SequenceEvent;
    use curtain_renderer::TerminalPresenter;

    fn options(dismiss_after: Option<u64>) -> HostOptions {
        HostOptions {
            delays: SequenceDelays::default(),
            frame_interval: HostOptions::frame_interval_for(30),
            dismiss_after: dismiss_after.map(Duration::from_millis),
        }
    }

    #[test]
    fn frame_interval_from_fps() {
        assert_eq!(HostOptions::frame_interval_for(50), Duration::from_millis(20));
        assert_eq!(HostOptions::frame_interval_for(0), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn full_run_completes_after_exit() {
        let start = tokio::time::Instant::now();
        let mut presenter = TerminalPresenter::plain(Vec::new(), 80, 24);
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        let outcome = run_intro(
            options(None),
            OverlayStyle::default(),
            &mut presenter,
            bus,
            std::future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(outcome, HostOutcome::Completed);
        // 3.4 s sequence + 1.4 s exit
        assert!(start.elapsed() >= Duration::from_millis(4800));

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.contains("QwertyDeveloper."));
        assert!(out.contains("SYSTEM_ARMED"));

        let events: Vec<SequenceEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(events.last(), Some(&SequenceEvent::Completed));
        assert!(!events.contains(&SequenceEvent::TornDown));
    }

    #[tokio::test(start_paused = true)]
    async fn dismissal_stops_before_status() {
        let mut presenter = TerminalPresenter::plain(Vec::new(), 80, 24);
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        let outcome = run_intro(
            options(Some(2000)),
            OverlayStyle::default(),
            &mut presenter,
            bus,
            std::future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(outcome, HostOutcome::Dismissed);
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.contains("QwertyDeveloper."));
        assert!(!out.contains("SYSTEM_ARMED"));

        let events: Vec<SequenceEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert!(events.contains(&SequenceEvent::TornDown));
        assert!(!events.contains(&SequenceEvent::Completed));
    }

    #[test]
    fn overlay_steps_start_at_their_deadlines() {
        let delays = SequenceDelays::default();
        let mut overlay = IntroOverlay::new(OverlayStyle::default());

        // Noticed late, and both steps at once.
        sync_overlay(&mut overlay, &delays, Phase::Armed);

        let at_status = overlay.compose(delays.status());
        let title = at_status.title.unwrap();
        // 1.4 s into the title reveal, not its first frame.
        assert!(title.opacity > 0.5);
        assert!(title.offset_y.abs() < 1e-3);
        assert!(at_status.status.unwrap().opacity.abs() < 1e-3);
    }

    #[test]
    fn exit_starts_at_completion_deadline() {
        let delays = SequenceDelays::default();
        let mut overlay = IntroOverlay::new(OverlayStyle::default());
        start_exit(&mut overlay, &delays);

        assert_eq!(overlay.phase(), Phase::Armed);
        assert!(!overlay.is_exited(Duration::from_millis(4700)));
        assert!(overlay.is_exited(Duration::from_millis(5000)));
    }

    #[tokio::test(start_paused = true)]
    async fn dismissal_at_completion_reports_what_happened() {
        for _ in 0..20 {
            let mut presenter = TerminalPresenter::plain(Vec::new(), 80, 24);
            let bus = EventBus::new(16);
            let mut rx = bus.subscribe();

            let outcome = run_intro(
                options(Some(3400)),
                OverlayStyle::default(),
                &mut presenter,
                bus,
                std::future::pending(),
            )
            .await
            .unwrap();

            let events: Vec<SequenceEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
            let completed = events.contains(&SequenceEvent::Completed);
            assert_eq!(outcome == HostOutcome::Completed, completed, "{events:?}");
            assert_ne!(completed, events.contains(&SequenceEvent::TornDown));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_signal_dismisses() {
        let mut presenter = TerminalPresenter::new(Vec::new(), 40, 10);

        let outcome = run_intro(
            options(None),
            OverlayStyle::default(),
            &mut presenter,
            EventBus::default(),
            sleep(Duration::from_millis(500)),
        )
        .await
        .unwrap();

        assert_eq!(outcome, HostOutcome::Dismissed);
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        // Screen is cleared and the cursor restored on the way out.
        assert!(out.ends_with("\x1b[0m\x1b[2J\x1b[H\x1b[?25h"));
    }
}
