//! `QuizServer` builder and serve loop.

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use quizbowl_questions::QuestionBank;
use quizbowl_room::{RegistryConfig, RegistryHandle, RoomRegistry, spawn_registry};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::routes::{AppState, router};
use crate::{QuizError, ServerConfig};

/// Builder for configuring and starting a Quiz Bowl server.
///
/// # Example
///
/// ```rust,ignore
/// let server = QuizServer::builder()
///     .bind("127.0.0.1:5000")
///     .static_dir("public")
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct QuizServerBuilder {
    bind_addr: String,
    static_dir: PathBuf,
    cors_origin: String,
    questions: QuestionBank,
    registry: RegistryConfig,
}

impl QuizServerBuilder {
    /// Creates a builder with the same defaults as [`ServerConfig`].
    pub fn new() -> Self {
        Self::from_config(&ServerConfig::default())
    }

    /// Creates a builder from parsed command line settings.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            bind_addr: config.bind_addr(),
            static_dir: config.static_dir.clone(),
            cors_origin: config.cors_origin.clone(),
            questions: QuestionBank::builtin(),
            registry: RegistryConfig::default(),
        }
    }

    /// Sets the address to bind to. Port 0 picks a free port.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the directory of static files.
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Sets the single origin allowed by CORS.
    pub fn cors_origin(mut self, origin: &str) -> Self {
        self.cors_origin = origin.to_string();
        self
    }

    /// Replaces the built-in question bank.
    pub fn questions(mut self, questions: QuestionBank) -> Self {
        self.questions = questions;
        self
    }

    /// Sets the room registry configuration.
    pub fn registry_config(mut self, config: RegistryConfig) -> Self {
        self.registry = config;
        self
    }

    /// Binds the listener and starts the room registry.
    ///
    /// # Errors
    /// - [`QuizError::InvalidCorsOrigin`] if the origin is not a valid
    ///   header value
    /// - [`QuizError::Io`] if the address cannot be bound
    pub async fn build(self) -> Result<QuizServer, QuizError> {
        let origin: HeaderValue = self
            .cors_origin
            .parse()
            .map_err(|_| QuizError::InvalidCorsOrigin(self.cors_origin.clone()))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        let listener = TcpListener::bind(&self.bind_addr).await?;

        let rooms = spawn_registry(RoomRegistry::new(), &self.registry);
        let state = AppState {
            rooms: rooms.clone(),
            questions: Arc::new(self.questions),
        };
        let router = router(state, &self.static_dir, cors);

        tracing::debug!(
            addr = %self.bind_addr,
            static_dir = %self.static_dir.display(),
            cors_origin = %self.cors_origin,
            "server built"
        );

        Ok(QuizServer {
            listener,
            router,
            rooms,
        })
    }
}

impl Default for QuizServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Quiz Bowl server.
///
/// Call [`run()`](Self::run) to start serving requests.
pub struct QuizServer {
    listener: TcpListener,
    router: Router,
    rooms: RegistryHandle,
}

impl QuizServer {
    /// Creates a new builder.
    pub fn builder() -> QuizServerBuilder {
        QuizServerBuilder::new()
    }

    /// Creates a builder from parsed command line settings.
    pub fn from_config(config: &ServerConfig) -> QuizServerBuilder {
        QuizServerBuilder::from_config(config)
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), QuizError> {
        self.run_with_shutdown(std::future::pending()).await
    }

    /// Serves requests until `signal` resolves, then stops the room
    /// registry.
    pub async fn run_with_shutdown<F>(self, signal: F) -> Result<(), QuizError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(addr = ?self.listener.local_addr().ok(), "Quiz Bowl server running");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        // Already stopped is fine.
        let _ = self.rooms.shutdown().await;
        tracing::info!("Quiz Bowl server stopped");
        Ok(())
    }
}
