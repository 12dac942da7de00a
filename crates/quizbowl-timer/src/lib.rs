//! Single-slot phase timer for Quiz Bowl clients.
//!
//! A client session has exactly one pending timer at a time: the intro
//! countdown, the per-second question tick, or the reveal pause. Arming
//! replaces whatever was pending and cancelling clears it, so a timer that
//! belongs to a phase the session already left can never fire.
//!
//! # Disarmed mode
//!
//! When nothing is armed, [`PhaseTimer::wait`] pends forever. That lets the
//! timer sit in a `tokio::select!` loop unconditionally:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         Some(input) = input_rx.recv() => { /* user command */ }
//!         kind = timer.wait() => { /* feed TimerFired(kind) to the machine */ }
//!     }
//! }
//! ```
//!
//! `wait` is cancel safe: if the `select!` picks another branch, the armed
//! deadline stays in place and the next call keeps waiting for it.

use std::fmt;
use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::trace;

// ---------------------------------------------------------------------------
// Timer kinds
// ---------------------------------------------------------------------------

/// Which phase a timer belongs to.
///
/// The state machine only reacts to the kind that matches its current
/// phase; anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Lobby → question countdown after the player readies up.
    Intro,
    /// One-second countdown step while a question is open.
    Tick,
    /// Pause on the revealed answer before moving on.
    Reveal,
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Tick => "tick",
            Self::Reveal => "reveal",
        };
        f.write_str(name)
    }
}

/// A request to arm the timer: fire `kind` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    pub kind: TimerKind,
    pub delay: Duration,
}

impl TimerSpec {
    pub fn new(kind: TimerKind, delay: Duration) -> Self {
        Self { kind, delay }
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Counters kept by a [`PhaseTimer`] over its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerMetrics {
    /// Calls to [`PhaseTimer::arm`].
    pub armed: u64,
    /// Timers that ran to completion.
    pub fired: u64,
    /// Pending timers dropped by [`PhaseTimer::cancel`].
    pub cancelled: u64,
    /// Pending timers dropped because a new one was armed over them.
    pub replaced: u64,
}

// ---------------------------------------------------------------------------
// Timer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Pending {
    kind: TimerKind,
    deadline: Instant,
}

/// One cancellable, one-shot timer slot.
///
/// Deadlines use Tokio's clock, so tests can drive the timer with
/// `#[tokio::test(start_paused = true)]`.
#[derive(Debug, Default)]
pub struct PhaseTimer {
    pending: Option<Pending>,
    metrics: TimerMetrics,
}

impl PhaseTimer {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot, replacing any pending timer.
    ///
    /// A zero delay fires on the next poll of [`wait`](Self::wait).
    pub fn arm(&mut self, spec: TimerSpec) {
        if let Some(old) = self.pending.take() {
            self.metrics.replaced += 1;
            trace!(old = %old.kind, new = %spec.kind, "phase timer replaced");
        }
        self.metrics.armed += 1;
        self.pending = Some(Pending {
            kind: spec.kind,
            deadline: Instant::now() + spec.delay,
        });
        trace!(kind = %spec.kind, delay_ms = spec.delay.as_millis() as u64, "phase timer armed");
    }

    /// Drops the pending timer, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(old) = self.pending.take() {
            self.metrics.cancelled += 1;
            trace!(kind = %old.kind, "phase timer cancelled");
        }
    }

    /// Waits for the pending timer and returns its kind.
    ///
    /// The slot is disarmed once the timer fires. With nothing armed this
    /// future never resolves.
    pub async fn wait(&mut self) -> TimerKind {
        let Some(Pending { kind, deadline }) = self.pending else {
            std::future::pending::<()>().await;
            unreachable!()
        };

        time::sleep_until(deadline).await;

        self.pending = None;
        self.metrics.fired += 1;
        trace!(%kind, "phase timer fired");
        kind
    }

    /// Kind of the pending timer, or `None` when disarmed.
    pub fn armed(&self) -> Option<TimerKind> {
        self.pending.map(|p| p.kind)
    }

    /// Time left until the pending timer fires, saturating at zero.
    pub fn remaining(&self) -> Option<Duration> {
        self.pending
            .map(|p| p.deadline.saturating_duration_since(Instant::now()))
    }

    pub fn metrics(&self) -> &TimerMetrics {
        &self.metrics
    }
}
