//! Error types for the protocol layer.
//!
//! Each crate in Quiz Bowl defines its own error enum. When you see a
//! `ProtocolError`, you know the problem is in serialization or in a
//! value that does not fit the wire format, not in room storage or the
//! client state machine.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a Rust type).
    ///
    /// Common causes: malformed JSON, missing required fields, an answer
    /// that is not one of `"A"`..`"D"`, or a truncated body.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A character that does not name one of the four answer options.
    #[error("invalid answer letter: {0:?}")]
    InvalidLetter(char),
}
