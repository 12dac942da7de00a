//! Wire protocol for Quiz Bowl.
//!
//! This crate defines the "language" that the server and its clients
//! speak over HTTP:
//!
//! - **Types** ([`Round`], [`Question`], [`Room`], [`RoomCode`], etc.):
//!   the JSON bodies of the API.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how those bodies are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]): what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer knows nothing about HTTP routing, room storage or
//! timers. Both the server (`quizbowl`) and the client
//! (`quizbowl-client`) depend on it so the JSON shape is defined once.
//!
//! ```text
//! Question bank / Room registry → Protocol (JSON) → Client state machine
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{
    AnswerLetter, CreateRoomRequest, ErrorBody, Question, QuestionsQuery,
    QuestionsResponse, Room, RoomCode, Round, RoundList,
};
