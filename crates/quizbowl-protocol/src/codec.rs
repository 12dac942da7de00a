//! Codec trait and implementations for serializing/deserializing bodies.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! Callers that hold raw bytes (the client's question loader reads the
//! response body as bytes) go through the [`Codec`] trait instead of
//! calling `serde_json` directly, so the wire format is chosen in one
//! place.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// `Send + Sync + 'static` lets a codec live inside long-running tokio
/// tasks and be shared between them.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use quizbowl_protocol::{AnswerLetter, Codec, JsonCodec, Question};
///
/// let codec = JsonCodec;
///
/// let question = Question {
///     id: "easy-1".into(),
///     prompt: "What does CPU stand for?".into(),
///     options: vec![
///         "Central Processing Unit".into(),
///         "Computer Personal Unit".into(),
///         "Central Program Utility".into(),
///         "Core Processing User".into(),
///     ],
///     answer: AnswerLetter::A,
/// };
///
/// let bytes = codec.encode(&question).unwrap();
/// let decoded: Question = codec.decode(&bytes).unwrap();
/// assert_eq!(question, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
