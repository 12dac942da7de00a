//! Session runtime: one Tokio task per player driving the [`Machine`].
//!
//! The task owns the state, the machine and the single [`PhaseTimer`].
//! Player input arrives over an mpsc channel from a [`SessionHandle`];
//! timer firings come from the timer. Both become [`Event`]s that are
//! processed one at a time:
//!
//! ```text
//! SessionHandle ──mpsc──→ ┌──────────────┐ ──watch──→ subscribers
//!                         │ session task │
//! PhaseTimer ──fired────→ └──────────────┘
//!                               ▲
//! loader task ──RoundLoaded─────┘ (once, at spawn)
//! ```
//!
//! After every event the timer command is applied and the new
//! [`GameState`] is published on a watch channel.

use quizbowl_timer::PhaseTimer;
use tokio::sync::{mpsc, watch};

use crate::{
    ClientConfig, ClientError, Event, GameState, Machine, RoundFetcher,
    TimerCommand, load_round,
};

enum SessionCommand {
    Event(Event),
    Shutdown,
}

/// Handle to a running session. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionCommand>,
    snapshots: watch::Receiver<GameState>,
}

impl std::fmt::Debug for SessionCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Event(event) => f.debug_tuple("Event").field(event).finish(),
            Self::Shutdown => f.write_str("Shutdown"),
        }
    }
}

impl SessionHandle {
    /// Updates the team name typed on the welcome screen.
    pub async fn set_team_name(&self, name: impl Into<String>) -> Result<(), ClientError> {
        self.send(Event::TeamNameChanged(name.into())).await
    }

    /// Submits the join form with `code`.
    pub async fn submit_code(&self, code: impl Into<String>) -> Result<(), ClientError> {
        self.send(Event::SubmitCode(code.into())).await
    }

    /// Presses the ready button.
    pub async fn toggle_ready(&self) -> Result<(), ClientError> {
        self.send(Event::ToggleReady).await
    }

    /// Picks the answer at 0-based `position`.
    pub async fn select_option(&self, position: usize) -> Result<(), ClientError> {
        self.send(Event::SelectOption(position)).await
    }

    /// A receiver that sees every published state.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.snapshots.clone()
    }

    /// The most recently published state.
    pub fn snapshot(&self) -> GameState {
        self.snapshots.borrow().clone()
    }

    /// Stops the session task. Pending timers are dropped with it.
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        self.sender
            .send(SessionCommand::Shutdown)
            .await
            .map_err(|_| ClientError::SessionClosed)
    }

    async fn send(&self, event: Event) -> Result<(), ClientError> {
        self.sender
            .send(SessionCommand::Event(event))
            .await
            .map_err(|_| ClientError::SessionClosed)
    }
}

struct SessionActor {
    machine: Machine,
    state: GameState,
    timer: PhaseTimer,
    receiver: mpsc::Receiver<SessionCommand>,
    snapshots: watch::Sender<GameState>,
}

impl SessionActor {
    async fn run(mut self) {
        tracing::info!("client session started");

        loop {
            let event = tokio::select! {
                cmd = self.receiver.recv() => match cmd {
                    Some(SessionCommand::Event(event)) => event,
                    Some(SessionCommand::Shutdown) | None => break,
                },
                kind = self.timer.wait() => Event::TimerFired(kind),
            };
            self.handle(event);
        }

        self.timer.cancel();
        tracing::info!(
            phase = %self.state.phase,
            timers_fired = self.timer.metrics().fired,
            "client session stopped"
        );
    }

    fn handle(&mut self, event: Event) {
        tracing::trace!(?event, "session event");

        let before = self.state.phase;
        let current = std::mem::take(&mut self.state);
        let (next, timer) = self.machine.transition(current, event);

        match timer {
            TimerCommand::Keep => {}
            TimerCommand::Cancel => self.timer.cancel(),
            TimerCommand::Arm(spec) => self.timer.arm(spec),
        }

        if next.phase != before {
            tracing::info!(from = %before, to = %next.phase, "phase transition");
        }

        self.state = next;
        let state = &self.state;
        self.snapshots.send_if_modified(|published| {
            if published == state {
                false
            } else {
                published.clone_from(state);
                true
            }
        });
    }
}

/// Spawns a session and its one-shot round loader.
///
/// The loader asks `fetcher` for the configured difficulty and delivers
/// the result (or the fallback round) as a `RoundLoaded` event.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_session<F: RoundFetcher>(fetcher: F, config: ClientConfig) -> SessionHandle {
    let (tx, rx) = mpsc::channel(config.channel_size.max(1));

    let machine = Machine::new(config);
    let state = machine.initial_state();
    let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());

    let loader_tx = tx.clone();
    let difficulty = machine.config().difficulty.clone();
    tokio::spawn(async move {
        let round = load_round(&fetcher, &difficulty).await;
        if loader_tx
            .send(SessionCommand::Event(Event::RoundLoaded(round)))
            .await
            .is_err()
        {
            tracing::debug!("session closed before the round arrived");
        }
    });

    let actor = SessionActor {
        machine,
        state,
        timer: PhaseTimer::new(),
        receiver: rx,
        snapshots: snapshot_tx,
    };
    tokio::spawn(actor.run());

    SessionHandle {
        sender: tx,
        snapshots: snapshot_rx,
    }
}
