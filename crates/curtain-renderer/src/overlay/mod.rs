//! Intro overlay composition.
//!
//! The overlay is a black curtain with a pulsing glow and a thin frame.
//! Reaching `Revealed` fades the title in from below while its letter
//! spacing settles; reaching `Armed` brings in the status line with a
//! breathing indicator. Once the sequence completes the whole overlay
//! fades, grows slightly and blurs away.

mod types;


pub use types::{AtmosphereLayer, OverlayFrame, OverlayStyle, StatusLayer, TitleLayer};

use std::time::Duration;

use curtain_common::Phase;

use crate::easing::{
    ease_out_cubic, lerp, ping_pong, EASE_IN_OUT, EXIT_CURVE, PULSE_CURVE, REVEAL_CURVE,
};

const ATMOSPHERE_OPACITY: (f32, f32) = (0.05, 0.12);
const ATMOSPHERE_SCALE: (f32, f32) = (1.0, 1.15);
const FRAME_FADE_SECS: f32 = 0.3;
const TITLE_BLUR_PX: f32 = 10.0;
const TITLE_RISE_PX: f32 = 20.0;
const TITLE_SPACING_EM: (f32, f32) = (-0.05, 0.02);
const STATUS_RISE_PX: f32 = 10.0;
const INDICATOR_PERIOD_SECS: f32 = 2.0;
const INDICATOR_DIM: f32 = 0.5;
const EXIT_SCALE: f32 = 1.05;
const EXIT_BLUR_PX: f32 = 40.0;

/// Tracks when each visual step started and composes frames from it.
///
/// All instants are offsets from sequence activation.
pub struct IntroOverlay {
    style: OverlayStyle,
    phase: Phase,
    revealed_at: Option<Duration>,
    armed_at: Option<Duration>,
    exit_started_at: Option<Duration>,
}

impl IntroOverlay {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            phase: Phase::Idle,
            revealed_at: None,
            armed_at: None,
            exit_started_at: None,
        }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Record that the sequence reached `phase` at `now`.
    ///
    /// Earlier phases are ignored. Skipped steps start at `now` too.
    pub fn set_phase(&mut self, phase: Phase, now: Duration) {
        if phase <= self.phase {
            return;
        }
        if phase >= Phase::Revealed && self.revealed_at.is_none() {
            self.revealed_at = Some(now);
        }
        if phase >= Phase::Armed && self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
        tracing::trace!(from = %self.phase, to = %phase, "overlay phase");
        self.phase = phase;
    }

    /// Start the exit transition. Later calls keep the first start time.
    pub fn begin_exit(&mut self, now: Duration) {
        if self.exit_started_at.is_none() {
            tracing::debug!(at_ms = now.as_millis() as u64, "overlay exit started");
            self.exit_started_at = Some(now);
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.exit_started_at.is_some()
    }

    /// Whether the exit transition has fully played by `now`.
    pub fn is_exited(&self, now: Duration) -> bool {
        self.exit_started_at
            .is_some_and(|start| secs_since(start, now) >= self.style.exit_duration)
    }

    /// Visual state at `now`.
    pub fn compose(&self, now: Duration) -> OverlayFrame {
        let t = now.as_secs_f32();
        let style = &self.style;

        let exit = self
            .exit_started_at
            .map(|start| EXIT_CURVE.ease(progress(secs_since(start, now), style.exit_duration)))
            .unwrap_or(0.0);

        let pulse = ping_pong(t, style.atmosphere_period, EASE_IN_OUT);
        let atmosphere = AtmosphereLayer {
            opacity: lerp(ATMOSPHERE_OPACITY.0, ATMOSPHERE_OPACITY.1, pulse),
            scale: lerp(ATMOSPHERE_SCALE.0, ATMOSPHERE_SCALE.1, pulse),
        };

        OverlayFrame {
            phase: self.phase,
            opacity: 1.0 - exit,
            scale: lerp(1.0, EXIT_SCALE, exit),
            blur: EXIT_BLUR_PX * exit,
            atmosphere,
            frame_opacity: style.frame_opacity * ease_out_cubic(progress(t, FRAME_FADE_SECS)),
            title: self.revealed_at.map(|at| self.title_layer(secs_since(at, now))),
            status: self.armed_at.map(|at| self.status_layer(secs_since(at, now))),
        }
    }

    fn title_layer(&self, since: f32) -> TitleLayer {
        let shown = REVEAL_CURVE.ease(progress(since, self.style.reveal_duration));
        let tracked = REVEAL_CURVE.ease(progress(since, self.style.tracking_duration));
        TitleLayer {
            // Opacity is driven by both the container and the tracking span.
            opacity: shown * tracked,
            blur: TITLE_BLUR_PX * (1.0 - shown),
            offset_y: TITLE_RISE_PX * (1.0 - shown),
            letter_spacing_em: lerp(TITLE_SPACING_EM.0, TITLE_SPACING_EM.1, tracked),
        }
    }

    fn status_layer(&self, since: f32) -> StatusLayer {
        let shown = ease_out_cubic(progress(since, self.style.status_duration));
        StatusLayer {
            opacity: self.style.status_opacity * shown,
            offset_y: STATUS_RISE_PX * (1.0 - shown),
            indicator_opacity: lerp(
                1.0,
                INDICATOR_DIM,
                ping_pong(since, INDICATOR_PERIOD_SECS, PULSE_CURVE),
            ),
        }
    }
}

fn secs_since(start: Duration, now: Duration) -> f32 {
    now.saturating_sub(start).as_secs_f32()
}

/// Linear progress of an animation of `duration` seconds, 0.0–1.0.
fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}
