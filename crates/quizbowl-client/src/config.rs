//! Client configuration.

use std::time::Duration;

/// The join code the client accepts on the welcome screen.
///
/// This is a fixed literal; it is not checked against room codes issued
/// by the server.
pub const ACCEPTED_JOIN_CODE: &str = "QZ-7HK";

/// Seconds per question when the round does not say (or says 0).
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 15;

/// Difficulty requested from the server at session start.
pub const DEFAULT_DIFFICULTY: &str = "easy";

/// How long a round request may take before it counts as failed.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Helper message shown after a successful join.
pub const CODE_ACCEPTED_MESSAGE: &str = "Code accepted. Welcome to Quiz Bowl!";

/// Configuration for a client session.
///
/// Durations are plain [`Duration`]s so tests can run the session on
/// Tokio's paused clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Join code accepted on the welcome screen (compared
    /// case-insensitively after trimming).
    pub accepted_code: String,
    /// Difficulty id fetched at start.
    pub difficulty: String,
    /// Pause between readying up and the first question.
    pub intro_delay: Duration,
    /// Countdown step while a question is open.
    pub tick_interval: Duration,
    /// How long the correct answer stays on screen.
    pub reveal_delay: Duration,
    /// Per-question limit used when the round has none.
    pub default_time_limit: u32,
    /// Capacity of the session's input channel.
    pub channel_size: usize,
    /// Upper bound on the round request, connect to last byte.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            accepted_code: ACCEPTED_JOIN_CODE.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            intro_delay: Duration::from_millis(1_500),
            tick_interval: Duration::from_secs(1),
            reveal_delay: Duration::from_millis(2_500),
            default_time_limit: DEFAULT_TIME_LIMIT_SECS,
            channel_size: 32,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Helper message shown when a submitted code is rejected.
    pub fn invalid_code_message(&self) -> String {
        format!("Invalid code. Please use {}.", self.accepted_code)
    }
}
