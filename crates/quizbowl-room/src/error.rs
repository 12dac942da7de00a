//! Error types for the room layer.

use quizbowl_protocol::RoomCode;

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The team name is shorter than 2 or longer than 20 characters
    /// after trimming. Nothing was stored.
    #[error("teamName must be 2-20 characters")]
    InvalidTeamName,

    /// No room exists for this code.
    #[error("room {0} not found")]
    NotFound(RoomCode),

    /// The registry actor's command channel is full or closed.
    #[error("room registry is unavailable")]
    Unavailable,
}
