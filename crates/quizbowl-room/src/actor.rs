//! Registry actor: an isolated Tokio task that owns the [`RoomRegistry`].
//!
//! HTTP handlers run concurrently, but the registry is a plain map. The
//! actor is the single owner; everyone else holds a [`RegistryHandle`]
//! and talks to it through an mpsc channel. Commands are processed one
//! at a time, in arrival order.

use quizbowl_protocol::Room;
use tokio::sync::{mpsc, oneshot};

use crate::{CodeSource, RegistryConfig, RoomError, RoomRegistry};

/// Commands sent to the registry actor.
///
/// The `oneshot::Sender` in each variant is the reply channel: the
/// caller sends a command and awaits the answer on it.
enum RegistryCommand {
    Create {
        team_name: String,
        reply: oneshot::Sender<Result<Room, RoomError>>,
    },
    Get {
        code: String,
        reply: oneshot::Sender<Result<Room, RoomError>>,
    },
    Count {
        reply: oneshot::Sender<usize>,
    },
    Shutdown,
}

/// Handle to a running registry actor.
///
/// Cheap to clone (it wraps an `mpsc::Sender`), so it can sit in axum's
/// shared state.
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    sender: mpsc::Sender<RegistryCommand>,
}

impl std::fmt::Debug for RegistryCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create { team_name, .. } => {
                f.debug_struct("Create").field("team_name", team_name).finish()
            }
            Self::Get { code, .. } => {
                f.debug_struct("Get").field("code", code).finish()
            }
            Self::Count { .. } => f.write_str("Count"),
            Self::Shutdown => f.write_str("Shutdown"),
        }
    }
}

impl RegistryHandle {
    /// Creates a room hosted by `team_name`.
    ///
    /// # Errors
    /// - [`RoomError::InvalidTeamName`]: name not 2–20 characters
    /// - [`RoomError::Unavailable`]: the actor has stopped
    pub async fn create(&self, team_name: &str) -> Result<Room, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::Create {
                team_name: team_name.to_string(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RoomError::Unavailable)?;
        reply_rx.await.map_err(|_| RoomError::Unavailable)?
    }

    /// Looks up a room by code (case-insensitive).
    ///
    /// # Errors
    /// - [`RoomError::NotFound`]: no such room
    /// - [`RoomError::Unavailable`]: the actor has stopped
    pub async fn get(&self, code: &str) -> Result<Room, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::Get {
                code: code.to_string(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RoomError::Unavailable)?;
        reply_rx.await.map_err(|_| RoomError::Unavailable)?
    }

    /// Number of rooms currently stored.
    pub async fn len(&self) -> Result<usize, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::Count { reply: reply_tx })
            .await
            .map_err(|_| RoomError::Unavailable)?;
        reply_rx.await.map_err(|_| RoomError::Unavailable)
    }

    /// Tells the actor to stop. Later calls on any handle return
    /// [`RoomError::Unavailable`].
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        self.sender
            .send(RegistryCommand::Shutdown)
            .await
            .map_err(|_| RoomError::Unavailable)
    }
}

struct RegistryActor<S: CodeSource> {
    registry: RoomRegistry<S>,
    receiver: mpsc::Receiver<RegistryCommand>,
}

impl<S: CodeSource> RegistryActor<S> {
    async fn run(mut self) {
        tracing::info!("room registry started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RegistryCommand::Create { team_name, reply } => {
                    let result = self.registry.create(&team_name).cloned();
                    if let Err(e) = &result {
                        tracing::debug!(error = %e, "room creation rejected");
                    }
                    let _ = reply.send(result);
                }
                RegistryCommand::Get { code, reply } => {
                    let _ = reply.send(self.registry.get(&code).cloned());
                }
                RegistryCommand::Count { reply } => {
                    let _ = reply.send(self.registry.len());
                }
                RegistryCommand::Shutdown => {
                    tracing::info!("room registry shutting down");
                    break;
                }
            }
        }

        tracing::info!(rooms = self.registry.len(), "room registry stopped");
    }
}

/// Spawns the registry actor and returns a handle to it.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_registry<S: CodeSource>(
    registry: RoomRegistry<S>,
    config: &RegistryConfig,
) -> RegistryHandle {
    let (tx, rx) = mpsc::channel(config.channel_size.max(1));

    let actor = RegistryActor {
        registry,
        receiver: rx,
    };
    tokio::spawn(actor.run());

    RegistryHandle { sender: tx }
}
