use quizbowl_protocol::ProtocolError;

/// Errors raised by the client's question loader and session handle.
///
/// None of these reach the player: a failed fetch is replaced by the
/// built-in round, and a closed session simply stops rendering.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body was not a valid round.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The server returned a round with no questions.
    #[error("round {0} has no questions")]
    EmptyRound(String),

    /// The session task has stopped.
    #[error("session closed")]
    SessionClosed,
}
