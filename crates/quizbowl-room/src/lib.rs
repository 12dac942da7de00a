//! Room registry for Quiz Bowl.
//!
//! Issues six-character room codes and remembers the rooms they name for
//! the lifetime of the process.
//!
//! The registry itself ([`RoomRegistry`]) is a plain, single-owner map.
//! To use it from concurrent HTTP handlers it runs inside one Tokio task
//! (actor model) and is reached through a cloneable [`RegistryHandle`],
//! so every access is serialized through the actor's channel.
//!
//! # Key types
//!
//! - [`RoomRegistry`]: create/lookup, code collision retry
//! - [`RegistryHandle`]: send commands to a running registry actor
//! - [`CodeSource`]: where candidate codes come from ([`RandomCodes`])
//! - [`RegistryConfig`]: channel sizing

mod actor;
mod code;
mod config;
mod error;
mod registry;

pub use actor::{RegistryHandle, spawn_registry};
pub use code::{CODE_ALPHABET, CODE_LENGTH, CodeSource, RandomCodes};
pub use config::RegistryConfig;
pub use error::RoomError;
pub use registry::{RoomRegistry, TEAM_NAME_MAX, TEAM_NAME_MIN, validate_team_name};
