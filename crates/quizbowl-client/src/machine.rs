//! The round state machine.
//!
//! Everything a player sees is driven by [`Machine::transition`], a pure
//! function from the current [`GameState`] and one [`Event`] to the next
//! state plus a [`TimerCommand`] for the session's single timer slot.
//! Nothing here sleeps or spawns; the session runtime owns the clock.
//!
//! ```text
//! welcome ──code ok──→ lobby ──ready──→ intro ──intro timer──→ question
//!                        ↑                │                      │  ↺ tick
//!                        └────unready─────┘                 tick @ 0
//!                                                                ▼
//!                  complete ←──last question──  reveal timer ── reveal
//!                                         next question ─→ question
//! ```
//!
//! Every timer carries a [`TimerKind`]. A firing is only acted on when
//! its kind belongs to the current phase, so a late timer from a phase
//! the session already left is a no-op even if the runtime missed a
//! cancel.

use std::fmt;
use std::time::Duration;

use quizbowl_protocol::{AnswerLetter, Question, Round};
use quizbowl_timer::{TimerKind, TimerSpec};

use crate::ClientConfig;
use crate::config::{CODE_ACCEPTED_MESSAGE, DEFAULT_TIME_LIMIT_SECS};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Welcome,
    Lobby,
    Intro,
    Question,
    Reveal,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Welcome => "welcome",
            Self::Lobby => "lobby",
            Self::Intro => "intro",
            Self::Question => "question",
            Self::Reveal => "reveal",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Everything the view needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    /// Team name as typed (untrimmed).
    pub team_name: String,
    /// Join code as typed on the welcome screen.
    pub code_input: String,
    /// Feedback under the join form.
    pub helper_message: Option<String>,
    /// Normalized code the player joined with.
    pub joined_room: Option<String>,
    pub ready: bool,
    /// The loaded round, once the loader has delivered it.
    pub round: Option<Round>,
    pub question_index: usize,
    /// Seconds left on the current question.
    pub time_remaining: u32,
    pub selected: Option<AnswerLetter>,
    /// Set while the correct answer is on screen; selection is locked.
    pub revealed: bool,
}

impl GameState {
    /// A fresh session on the welcome screen.
    pub fn new(default_time_limit: u32) -> Self {
        Self {
            phase: Phase::Welcome,
            team_name: String::new(),
            code_input: String::new(),
            helper_message: None,
            joined_room: None,
            ready: false,
            round: None,
            question_index: 0,
            time_remaining: default_time_limit,
            selected: None,
            revealed: false,
        }
    }

    /// The question currently in play, if the round is loaded.
    pub fn current_question(&self) -> Option<&Question> {
        self.round.as_ref()?.question(self.question_index)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}

// ---------------------------------------------------------------------------
// Events and effects
// ---------------------------------------------------------------------------

/// Something that happened to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The loader delivered a round (fetched or fallback).
    RoundLoaded(Round),
    /// The team name field changed.
    TeamNameChanged(String),
    /// The join form was submitted with this code.
    SubmitCode(String),
    /// The ready button was pressed.
    ToggleReady,
    /// The answer at this 0-based position was picked.
    SelectOption(usize),
    /// The session's timer fired.
    TimerFired(TimerKind),
}

/// What the runtime must do with its timer slot after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave the slot as it is.
    Keep,
    /// Clear the slot.
    Cancel,
    /// Replace whatever is in the slot.
    Arm(TimerSpec),
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

/// The transition function, parameterized by client configuration.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    config: ClientConfig,
}

impl Machine {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The state a new session starts in.
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.config.default_time_limit)
    }

    /// Applies `event` to `state`.
    ///
    /// Events that make no sense in the current phase return the state
    /// unchanged with [`TimerCommand::Keep`].
    pub fn transition(
        &self,
        mut state: GameState,
        event: Event,
    ) -> (GameState, TimerCommand) {
        let timer = match (state.phase, event) {
            (_, Event::RoundLoaded(round)) => self.on_round_loaded(&mut state, round),

            (Phase::Welcome, Event::TeamNameChanged(name)) => {
                state.team_name = name;
                TimerCommand::Keep
            }

            (Phase::Welcome, Event::SubmitCode(code)) => {
                self.on_submit_code(&mut state, code);
                TimerCommand::Keep
            }

            (Phase::Lobby, Event::ToggleReady) => {
                state.ready = !state.ready;
                if state.ready {
                    state.phase = Phase::Intro;
                    self.arm(TimerKind::Intro, self.config.intro_delay)
                } else {
                    TimerCommand::Keep
                }
            }

            (Phase::Intro, Event::ToggleReady) => {
                state.ready = false;
                state.phase = Phase::Lobby;
                TimerCommand::Cancel
            }

            (Phase::Intro, Event::TimerFired(TimerKind::Intro)) => {
                self.open_question(&mut state);
                self.first_tick(&state)
            }

            (Phase::Question, Event::TimerFired(TimerKind::Tick)) => {
                self.on_tick(&mut state)
            }

            (Phase::Question, Event::SelectOption(position)) => {
                self.on_select(&mut state, position);
                TimerCommand::Keep
            }

            (Phase::Reveal, Event::TimerFired(TimerKind::Reveal)) => {
                let next = state.question_index + 1;
                let has_next = state
                    .round
                    .as_ref()
                    .is_some_and(|round| round.question(next).is_some());

                if has_next {
                    state.question_index = next;
                    self.open_question(&mut state);
                    self.first_tick(&state)
                } else {
                    state.phase = Phase::Complete;
                    TimerCommand::Cancel
                }
            }

            _ => TimerCommand::Keep,
        };

        (state, timer)
    }

    // -- Individual transitions ---------------------------------------------

    fn on_round_loaded(&self, state: &mut GameState, round: Round) -> TimerCommand {
        if state.round.is_some() {
            tracing::debug!(round = %round.id, "round already loaded, ignoring");
            return TimerCommand::Keep;
        }

        // No countdown can be running yet: ticks are only armed once a
        // round is present.
        state.time_remaining = self.limit_for(Some(&round));
        state.round = Some(round);

        if state.phase == Phase::Question {
            self.arm(TimerKind::Tick, self.config.tick_interval)
        } else {
            TimerCommand::Keep
        }
    }

    fn on_submit_code(&self, state: &mut GameState, code: String) {
        let normalized = code.trim().to_uppercase();
        state.code_input = code;

        if normalized == self.config.accepted_code.trim().to_uppercase() {
            state.helper_message = Some(CODE_ACCEPTED_MESSAGE.to_string());
            state.joined_room = Some(normalized);
            state.phase = Phase::Lobby;
        } else {
            state.helper_message = Some(self.config.invalid_code_message());
        }
    }

    fn on_tick(&self, state: &mut GameState) -> TimerCommand {
        if state.round.is_none() {
            return TimerCommand::Keep;
        }

        if state.time_remaining == 0 {
            state.revealed = true;
            state.phase = Phase::Reveal;
            return self.arm(TimerKind::Reveal, self.config.reveal_delay);
        }

        state.time_remaining = state.time_remaining.saturating_sub(1);
        let delay = if state.time_remaining == 0 {
            Duration::ZERO
        } else {
            self.config.tick_interval
        };
        self.arm(TimerKind::Tick, delay)
    }

    fn on_select(&self, state: &mut GameState, position: usize) {
        if state.revealed {
            return;
        }
        let options = state
            .current_question()
            .map_or(AnswerLetter::ALL.len(), |q| q.options.len());
        if position >= options {
            return;
        }
        if let Some(letter) = AnswerLetter::from_index(position) {
            state.selected = Some(letter);
        }
    }

    // -- Helpers ------------------------------------------------------------

    fn open_question(&self, state: &mut GameState) {
        state.phase = Phase::Question;
        state.time_remaining = self.limit_for(state.round.as_ref());
        state.selected = None;
        state.revealed = false;
    }

    /// The tick that starts a question's countdown. Held back until the
    /// round has arrived.
    fn first_tick(&self, state: &GameState) -> TimerCommand {
        if state.round.is_some() {
            self.arm(TimerKind::Tick, self.config.tick_interval)
        } else {
            TimerCommand::Cancel
        }
    }

    fn limit_for(&self, round: Option<&Round>) -> u32 {
        round
            .map(|r| r.time_limit_seconds)
            .filter(|&secs| secs > 0)
            .unwrap_or(self.config.default_time_limit)
    }

    fn arm(&self, kind: TimerKind, delay: Duration) -> TimerCommand {
        TimerCommand::Arm(TimerSpec::new(kind, delay))
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Naming convention: `test_{phase or trigger}_{scenario}_{expected}`.

    use super::*;
    use crate::fallback_round;

    fn machine() -> Machine {
        Machine::default()
    }

    fn step(state: GameState, event: Event) -> (GameState, TimerCommand) {
        machine().transition(state, event)
    }

    /// Applies a sequence of events and returns the final state.
    fn run(events: Vec<Event>) -> GameState {
        let m = machine();
        events
            .into_iter()
            .fold(m.initial_state(), |state, event| m.transition(state, event).0)
    }

    fn round_with_limit(limit: u32) -> Round {
        Round {
            time_limit_seconds: limit,
            ..fallback_round()
        }
    }

    fn in_lobby() -> GameState {
        run(vec![
            Event::RoundLoaded(fallback_round()),
            Event::SubmitCode("QZ-7HK".into()),
        ])
    }

    fn in_question() -> GameState {
        run(vec![
            Event::RoundLoaded(fallback_round()),
            Event::SubmitCode("QZ-7HK".into()),
            Event::ToggleReady,
            Event::TimerFired(TimerKind::Intro),
        ])
    }

    fn tick() -> Event {
        Event::TimerFired(TimerKind::Tick)
    }

    fn armed(kind: TimerKind, millis: u64) -> TimerCommand {
        TimerCommand::Arm(TimerSpec::new(kind, Duration::from_millis(millis)))
    }

    // =====================================================================
    // Welcome
    // =====================================================================

    #[test]
    fn test_initial_state_is_welcome() {
        let state = machine().initial_state();
        assert_eq!(state.phase, Phase::Welcome);
        assert_eq!(state.time_remaining, 15);
        assert!(state.round.is_none());
        assert!(!state.ready);
    }

    #[test]
    fn test_submit_code_any_case_and_whitespace_joins_lobby() {
        for code in ["QZ-7HK", "qz-7hk", "  Qz-7Hk\t"] {
            let (state, timer) =
                step(GameState::default(), Event::SubmitCode(code.into()));
            assert_eq!(state.phase, Phase::Lobby, "{code:?} should be accepted");
            assert_eq!(state.joined_room.as_deref(), Some("QZ-7HK"));
            assert_eq!(
                state.helper_message.as_deref(),
                Some("Code accepted. Welcome to Quiz Bowl!")
            );
            assert_eq!(timer, TimerCommand::Keep);
        }
    }

    #[test]
    fn test_submit_code_wrong_code_stays_with_error() {
        let (state, timer) =
            step(GameState::default(), Event::SubmitCode("QZ-0000".into()));

        assert_eq!(state.phase, Phase::Welcome);
        assert_eq!(
            state.helper_message.as_deref(),
            Some("Invalid code. Please use QZ-7HK.")
        );
        assert!(state.joined_room.is_none());
        assert_eq!(timer, TimerCommand::Keep);
    }

    #[test]
    fn test_team_name_changed_in_welcome_is_stored() {
        let (state, _) =
            step(GameState::default(), Event::TeamNameChanged(" Owls ".into()));
        assert_eq!(state.team_name, " Owls ");
        assert_eq!(state.phase, Phase::Welcome);
    }

    #[test]
    fn test_team_name_changed_after_joining_is_ignored() {
        let lobby = in_lobby();
        let (state, _) = step(lobby.clone(), Event::TeamNameChanged("Late".into()));
        assert_eq!(state, lobby);
    }

    #[test]
    fn test_welcome_ignores_ready_and_selection() {
        let start = GameState::default();
        for event in [Event::ToggleReady, Event::SelectOption(0), tick()] {
            let (state, timer) = step(start.clone(), event);
            assert_eq!(state, start);
            assert_eq!(timer, TimerCommand::Keep);
        }
    }

    // =====================================================================
    // Lobby / Intro
    // =====================================================================

    #[test]
    fn test_toggle_ready_in_lobby_enters_intro_and_arms_intro_timer() {
        let (state, timer) = step(in_lobby(), Event::ToggleReady);

        assert_eq!(state.phase, Phase::Intro);
        assert!(state.ready);
        assert_eq!(timer, armed(TimerKind::Intro, 1_500));
    }

    #[test]
    fn test_toggle_ready_in_intro_returns_to_lobby_and_cancels() {
        let (intro, _) = step(in_lobby(), Event::ToggleReady);

        let (state, timer) = step(intro, Event::ToggleReady);

        assert_eq!(state.phase, Phase::Lobby);
        assert!(!state.ready);
        assert_eq!(timer, TimerCommand::Cancel);
    }

    #[test]
    fn test_toggle_ready_off_in_lobby_only_flips_flag() {
        let mut lobby = in_lobby();
        lobby.ready = true;

        let (state, timer) = step(lobby, Event::ToggleReady);

        assert_eq!(state.phase, Phase::Lobby);
        assert!(!state.ready);
        assert_eq!(timer, TimerCommand::Keep);
    }

    #[test]
    fn test_intro_timer_opens_first_question_with_round_limit() {
        let (intro, _) = step(in_lobby(), Event::ToggleReady);

        let (state, timer) = step(intro, Event::TimerFired(TimerKind::Intro));

        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.question_index, 0);
        assert_eq!(state.time_remaining, 15);
        assert_eq!(state.selected, None);
        assert!(!state.revealed);
        assert_eq!(timer, armed(TimerKind::Tick, 1_000));
    }

    #[test]
    fn test_unready_then_ready_restarts_with_fresh_limit() {
        let m = machine();
        let (intro, _) = m.transition(in_lobby(), Event::ToggleReady);
        let (lobby, _) = m.transition(intro, Event::ToggleReady);
        let (intro, timer) = m.transition(lobby, Event::ToggleReady);
        assert_eq!(timer, armed(TimerKind::Intro, 1_500));

        let (state, _) = m.transition(intro, Event::TimerFired(TimerKind::Intro));

        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.time_remaining, 15);
    }

    #[test]
    fn test_stale_intro_timer_in_lobby_is_ignored() {
        let (intro, _) = step(in_lobby(), Event::ToggleReady);
        let (lobby, _) = step(intro, Event::ToggleReady);

        let (state, timer) = step(lobby.clone(), Event::TimerFired(TimerKind::Intro));

        assert_eq!(state, lobby);
        assert_eq!(timer, TimerCommand::Keep);
    }

    // =====================================================================
    // Question
    // =====================================================================

    #[test]
    fn test_tick_decrements_and_rearms() {
        let (state, timer) = step(in_question(), tick());
        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.time_remaining, 14);
        assert_eq!(timer, armed(TimerKind::Tick, 1_000));
    }

    #[test]
    fn test_tick_at_one_reaches_zero_then_next_tick_reveals() {
        let mut question = in_question();
        question.time_remaining = 1;

        let (state, timer) = step(question, tick());
        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.time_remaining, 0);
        assert_eq!(timer, armed(TimerKind::Tick, 0));

        let (state, timer) = step(state, tick());
        assert_eq!(state.phase, Phase::Reveal);
        assert!(state.revealed);
        assert_eq!(timer, armed(TimerKind::Reveal, 2_500));
    }

    #[test]
    fn test_full_countdown_takes_limit_plus_one_ticks() {
        let m = machine();
        let mut state = in_question();
        let mut ticks = 0;
        while state.phase == Phase::Question {
            state = m.transition(state, tick()).0;
            ticks += 1;
        }
        assert_eq!(ticks, 16);
        assert_eq!(state.phase, Phase::Reveal);
    }

    #[test]
    fn test_select_option_records_letter_and_overwrites() {
        let (state, timer) = step(in_question(), Event::SelectOption(1));
        assert_eq!(state.selected, Some(AnswerLetter::B));
        assert_eq!(state.phase, Phase::Question);
        assert_eq!(timer, TimerCommand::Keep);

        let (state, _) = step(state, Event::SelectOption(3));
        assert_eq!(state.selected, Some(AnswerLetter::D));
    }

    #[test]
    fn test_select_option_out_of_range_is_ignored() {
        let (state, _) = step(in_question(), Event::SelectOption(2));
        let (state, _) = step(state, Event::SelectOption(4));
        assert_eq!(state.selected, Some(AnswerLetter::C));
    }

    #[test]
    fn test_select_option_outside_question_is_ignored() {
        let (state, _) = step(in_lobby(), Event::SelectOption(0));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_select_option_after_reveal_is_locked() {
        let mut question = in_question();
        question.time_remaining = 0;
        let (question, _) = step(question, Event::SelectOption(0));
        let (reveal, _) = step(question, tick());

        let (state, _) = step(reveal, Event::SelectOption(2));

        assert_eq!(state.phase, Phase::Reveal);
        assert_eq!(state.selected, Some(AnswerLetter::A));
    }

    #[test]
    fn test_stale_intro_timer_in_question_is_ignored() {
        let question = in_question();
        let (state, timer) =
            step(question.clone(), Event::TimerFired(TimerKind::Intro));
        assert_eq!(state, question);
        assert_eq!(timer, TimerCommand::Keep);
    }

    // =====================================================================
    // Reveal
    // =====================================================================

    fn in_reveal(question_index: usize) -> GameState {
        let mut state = in_question();
        state.question_index = question_index;
        state.time_remaining = 0;
        step(state, tick()).0
    }

    #[test]
    fn test_reveal_timer_with_next_question_advances() {
        let mut reveal = in_reveal(0);
        reveal.selected = Some(AnswerLetter::B);

        let (state, timer) = step(reveal, Event::TimerFired(TimerKind::Reveal));

        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.question_index, 1);
        assert_eq!(state.time_remaining, 15);
        assert_eq!(state.selected, None);
        assert!(!state.revealed);
        assert_eq!(timer, armed(TimerKind::Tick, 1_000));
    }

    #[test]
    fn test_reveal_timer_on_last_question_completes() {
        let reveal = in_reveal(1);

        let (state, timer) = step(reveal, Event::TimerFired(TimerKind::Reveal));

        assert_eq!(state.phase, Phase::Complete);
        assert_eq!(timer, TimerCommand::Cancel);
    }

    #[test]
    fn test_complete_ignores_everything() {
        let (done, _) = step(in_reveal(1), Event::TimerFired(TimerKind::Reveal));
        for event in [
            Event::ToggleReady,
            Event::SelectOption(0),
            tick(),
            Event::TimerFired(TimerKind::Reveal),
            Event::RoundLoaded(fallback_round()),
        ] {
            let (state, timer) = step(done.clone(), event);
            assert_eq!(state, done);
            assert_eq!(timer, TimerCommand::Keep);
        }
    }

    // =====================================================================
    // Round loading
    // =====================================================================

    #[test]
    fn test_round_loaded_sets_limit_before_play() {
        let (state, timer) =
            step(GameState::default(), Event::RoundLoaded(round_with_limit(20)));
        assert_eq!(state.time_remaining, 20);
        assert!(state.round.is_some());
        assert_eq!(timer, TimerCommand::Keep);
    }

    #[test]
    fn test_round_loaded_zero_limit_uses_default() {
        let (state, _) =
            step(GameState::default(), Event::RoundLoaded(round_with_limit(0)));
        assert_eq!(state.time_remaining, 15);
    }

    #[test]
    fn test_round_loaded_twice_keeps_first() {
        let (state, _) =
            step(GameState::default(), Event::RoundLoaded(round_with_limit(20)));
        let (state, timer) = step(state, Event::RoundLoaded(round_with_limit(30)));
        assert_eq!(state.round.as_ref().map(|r| r.time_limit_seconds), Some(20));
        assert_eq!(state.time_remaining, 20);
        assert_eq!(timer, TimerCommand::Keep);
    }

    #[test]
    fn test_question_before_round_waits_then_starts_countdown() {
        let state = run(vec![
            Event::SubmitCode("QZ-7HK".into()),
            Event::ToggleReady,
        ]);
        let (state, timer) = step(state, Event::TimerFired(TimerKind::Intro));
        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.time_remaining, 15);
        assert_eq!(timer, TimerCommand::Cancel);
        assert!(state.current_question().is_none());

        // Ticks without a round do nothing.
        let (state, timer) = step(state, tick());
        assert_eq!(state.time_remaining, 15);
        assert_eq!(timer, TimerCommand::Keep);

        let (state, timer) = step(state, Event::RoundLoaded(round_with_limit(20)));
        assert_eq!(state.time_remaining, 20);
        assert_eq!(timer, armed(TimerKind::Tick, 1_000));
    }

    #[test]
    fn test_select_option_without_round_accepts_any_of_four() {
        let state = run(vec![
            Event::SubmitCode("QZ-7HK".into()),
            Event::ToggleReady,
            Event::TimerFired(TimerKind::Intro),
            Event::SelectOption(3),
        ]);
        assert_eq!(state.selected, Some(AnswerLetter::D));

        let (state, _) = step(state, Event::SelectOption(4));
        assert_eq!(state.selected, Some(AnswerLetter::D));
    }

    #[test]
    fn test_custom_accepted_code_is_honored() {
        let m = Machine::new(ClientConfig {
            accepted_code: "ab-123".into(),
            ..ClientConfig::default()
        });
        let (state, _) = m.transition(m.initial_state(), Event::SubmitCode("QZ-7HK".into()));
        assert_eq!(
            state.helper_message.as_deref(),
            Some("Invalid code. Please use ab-123.")
        );
        let (state, _) = m.transition(state, Event::SubmitCode("AB-123".into()));
        assert_eq!(state.phase, Phase::Lobby);
    }
}
