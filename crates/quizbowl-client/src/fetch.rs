//! Loading the round from the server.
//!
//! [`RoundFetcher`] is the seam between the session and the network, so
//! session tests can hand in a round without a server. The real
//! implementation is [`HttpRoundFetcher`]. [`load_round`] wraps either one
//! and never fails: anything short of a playable round is replaced by
//! [`fallback_round`].

use std::future::Future;
use std::time::Duration;

use quizbowl_protocol::{Codec, JsonCodec, QuestionsQuery, Round};

use crate::{ClientError, DEFAULT_REQUEST_TIMEOUT, fallback_round};

/// Source of rounds for a client session.
pub trait RoundFetcher: Send + Sync + 'static {
    /// Fetches the round for `difficulty`.
    ///
    /// # Errors
    /// Any [`ClientError`]; callers normally go through [`load_round`],
    /// which turns errors into the fallback round.
    fn fetch_round(
        &self,
        difficulty: &str,
    ) -> impl Future<Output = Result<Round, ClientError>> + Send;
}

/// Fetches rounds from `GET {base}/api/questions?difficulty=<id>`.
#[derive(Debug, Clone)]
pub struct HttpRoundFetcher {
    client: reqwest::Client,
    base_url: String,
    codec: JsonCodec,
}

impl HttpRoundFetcher {
    /// Creates a fetcher for the server at `base_url`
    /// (e.g. `http://localhost:5000`) with [`DEFAULT_REQUEST_TIMEOUT`].
    ///
    /// # Errors
    /// [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Like [`new`](Self::new), giving up on a request after `timeout`.
    /// A server that accepts the connection but never answers then
    /// fails like any other transport error.
    ///
    /// # Errors
    /// [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Like [`new`](Self::new), reusing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            codec: JsonCodec,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl RoundFetcher for HttpRoundFetcher {
    async fn fetch_round(&self, difficulty: &str) -> Result<Round, ClientError> {
        let url = format!("{}/api/questions", self.base_url);
        let query = QuestionsQuery {
            difficulty: Some(difficulty.to_string()),
        };

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let round: Round = self.codec.decode(&body)?;

        if round.is_empty() {
            return Err(ClientError::EmptyRound(round.id));
        }
        Ok(round)
    }
}

/// Fetches the round for `difficulty`, falling back to the built-in
/// round on any error. Never retries.
pub async fn load_round<F: RoundFetcher>(fetcher: &F, difficulty: &str) -> Round {
    match fetcher.fetch_round(difficulty).await {
        Ok(round) => {
            tracing::info!(
                round = %round.id,
                questions = round.len(),
                "round loaded"
            );
            round
        }
        Err(e) => {
            tracing::warn!(
                difficulty,
                error = %e,
                "failed to load round, using built-in fallback"
            );
            fallback_round()
        }
    }
}
