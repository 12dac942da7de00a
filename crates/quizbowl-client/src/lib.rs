//! Quiz Bowl client.
//!
//! The player's side of the game: a pure round state machine, a Tokio
//! session that drives it from user input and a single phase timer, the
//! round loader with its built-in fallback, and a plain-text view.
//!
//! # Key types
//!
//! - [`Machine`] / [`GameState`] / [`Event`]: the transition function
//! - [`spawn_session`] / [`SessionHandle`]: the running session
//! - [`RoundFetcher`] / [`HttpRoundFetcher`] / [`load_round`]: loading
//! - [`render`]: text screens
//!
//! # Example
//!
//! ```ignore
//! let session = spawn_session(
//!     HttpRoundFetcher::new("http://localhost:5000")?,
//!     ClientConfig::default(),
//! );
//! session.submit_code("QZ-7HK").await?;
//! session.toggle_ready().await?;
//! ```

mod config;
mod error;
mod fallback;
mod fetch;
mod machine;
mod session;
mod view;

pub use config::{
    ACCEPTED_JOIN_CODE, CODE_ACCEPTED_MESSAGE, ClientConfig, DEFAULT_DIFFICULTY,
    DEFAULT_REQUEST_TIMEOUT, DEFAULT_TIME_LIMIT_SECS,
};
pub use error::ClientError;
pub use fallback::fallback_round;
pub use fetch::{HttpRoundFetcher, RoundFetcher, load_round};
pub use machine::{Event, GameState, Machine, Phase, TimerCommand};
pub use session::{SessionHandle, spawn_session};
pub use view::{format_time, render};

// Timer types appear in `Event` and `TimerCommand`.
pub use quizbowl_timer::{TimerKind, TimerSpec};
