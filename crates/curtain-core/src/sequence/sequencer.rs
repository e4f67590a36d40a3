//! Timer-driven intro sequencer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use curtain_common::{ActivationId, EventBus, Phase, SequenceEvent};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use super::delays::SequenceDelays;

type CompletionHook = Box<dyn FnOnce() + Send + 'static>;

/// Drives the intro phase through `Idle -> Revealed -> Armed` and then
/// invokes the host's completion hook exactly once.
///
/// Each step is its own spawned one-shot task sleeping until an absolute
/// deadline measured from activation. [`IntroSequencer::teardown`] (also run
/// on drop) cancels whatever has not fired yet.
pub struct IntroSequencer {
    id: ActivationId,
    delays: SequenceDelays,
    started: Instant,
    shared: Arc<Shared>,
    phase_rx: watch::Receiver<Phase>,
    timers: Vec<JoinHandle<()>>,
}

struct Shared {
    id: ActivationId,
    state: Mutex<State>,
    phase_tx: watch::Sender<Phase>,
    events: Option<EventBus>,
}

struct State {
    /// Cleared by teardown and by completion; callbacks do nothing once false.
    live: bool,
    completed: bool,
    on_complete: Option<CompletionHook>,
}

impl IntroSequencer {
    /// Start a sequence now. Must be called within a tokio runtime.
    pub fn activate<F>(delays: SequenceDelays, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::start(delays, Box::new(on_complete), None)
    }

    /// Like [`IntroSequencer::activate`], also publishing every transition
    /// on `events`.
    pub fn activate_with_events<F>(delays: SequenceDelays, on_complete: F, events: EventBus) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::start(delays, Box::new(on_complete), Some(events))
    }

    fn start(delays: SequenceDelays, on_complete: CompletionHook, events: Option<EventBus>) -> Self {
        let id = ActivationId::new();
        let started = Instant::now();
        let (phase_tx, phase_rx) = watch::channel(Phase::Idle);

        let shared = Arc::new(Shared {
            id: id.clone(),
            state: Mutex::new(State {
                live: true,
                completed: false,
                on_complete: Some(on_complete),
            }),
            phase_tx,
            events,
        });

        let timers = vec![
            spawn_step(&shared, started + delays.reveal(), |s| {
                s.advance(Phase::Revealed)
            }),
            spawn_step(&shared, started + delays.status(), |s| {
                s.advance(Phase::Armed)
            }),
            spawn_step(&shared, started + delays.complete(), Shared::complete),
        ];

        info!(
            activation = %id,
            reveal_ms = delays.reveal().as_millis() as u64,
            status_ms = delays.status().as_millis() as u64,
            complete_ms = delays.complete().as_millis() as u64,
            "intro sequence activated"
        );

        Self {
            id,
            delays,
            started,
            shared,
            phase_rx,
            timers,
        }
    }

    pub fn id(&self) -> &ActivationId {
        &self.id
    }

    pub fn delays(&self) -> SequenceDelays {
        self.delays
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        *self.phase_rx.borrow()
    }

    /// Receiver notified on every phase change.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase_rx.clone()
    }

    /// Time since activation.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whether the completion hook has been invoked.
    pub fn is_complete(&self) -> bool {
        self.shared.lock().completed
    }

    /// Whether timers may still fire: not torn down and not complete.
    pub fn is_active(&self) -> bool {
        self.shared.lock().live
    }

    /// Cancel every pending timer. Idempotent.
    ///
    /// Once this returns, no phase change or completion call happens.
    pub fn teardown(&mut self) {
        let was_live = {
            let mut state = self.shared.lock();
            let was_live = state.live;
            state.live = false;
            state.on_complete = None;
            was_live
        };

        for timer in self.timers.drain(..) {
            timer.abort();
        }

        if was_live {
            info!(activation = %self.id, phase = %self.phase(), "intro sequence torn down early");
            self.shared.publish(SequenceEvent::TornDown);
        }
    }
}

impl Drop for IntroSequencer {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: SequenceEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    /// Move the phase forward to `to`. Never moves it backward.
    fn advance(&self, to: Phase) {
        let state = self.lock();
        if state.live {
            self.advance_locked(to);
        }
    }

    /// Caller holds the state lock. Steps skipped because their timers were
    /// polled late are still reported in order.
    fn advance_locked(&self, to: Phase) {
        let mut from = Phase::Idle;
        let moved = self.phase_tx.send_if_modified(|current| {
            from = *current;
            if to > *current {
                *current = to;
                true
            } else {
                false
            }
        });
        if !moved {
            return;
        }

        let mut step = from;
        while let Some(next) = step.next().filter(|next| *next <= to) {
            debug!(activation = %self.id, from = %step, to = %next, "intro phase advanced");
            self.publish(SequenceEvent::PhaseChanged {
                from: step,
                to: next,
            });
            step = next;
        }
    }

    fn complete(&self) {
        let hook = {
            let mut state = self.lock();
            if !state.live {
                return;
            }
            self.advance_locked(Phase::Armed);
            state.live = false;
            state.completed = true;
            state.on_complete.take()
        };

        info!(activation = %self.id, "intro sequence complete");
        self.publish(SequenceEvent::Completed);
        if let Some(hook) = hook {
            hook();
        }
    }
}

fn spawn_step<F>(shared: &Arc<Shared>, deadline: Instant, step: F) -> JoinHandle<()>
where
    F: FnOnce(&Shared) + Send + 'static,
{
    let shared = Arc::clone(shared);
    tokio::spawn(async move {
        sleep_until(deadline).await;
        step(&shared);
    })
}
