//! # Quiz Bowl
//!
//! HTTP server for the Quiz Bowl trivia game.
//!
//! The server hands out room codes, serves the difficulty-tiered question
//! rounds as JSON and serves the browser bundle as static files. Game
//! flow (countdowns, reveals) runs entirely in the client; see the
//! `quizbowl-client` crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quizbowl::QuizServer;
//!
//! # async fn start() -> Result<(), quizbowl::QuizError> {
//! let server = QuizServer::builder()
//!     .bind("0.0.0.0:5000")
//!     .static_dir("public")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod config;
mod error;
mod routes;
mod server;

pub use config::{DEFAULT_CORS_ORIGIN, DEFAULT_PORT, ServerConfig};
pub use error::QuizError;
pub use server::{QuizServer, QuizServerBuilder};
