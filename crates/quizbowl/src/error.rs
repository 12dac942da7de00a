//! Unified error type for the Quiz Bowl server.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quizbowl_protocol::{ErrorBody, ProtocolError};
use quizbowl_questions::QuestionError;
use quizbowl_room::RoomError;

/// Top-level error that wraps the sub-crate errors.
///
/// Handlers return `Result<_, QuizError>`; `#[from]` lets `?` convert
/// sub-crate errors, and [`IntoResponse`] turns the result into a status
/// code with an `{ "error": "..." }` body.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Binding or serving the listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A room-level error (bad team name, unknown code, registry down).
    #[error(transparent)]
    Room(#[from] RoomError),

    /// A question-level error (unknown difficulty).
    #[error(transparent)]
    Question(#[from] QuestionError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The request body was missing, not JSON, or the wrong shape.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// The query string could not be parsed (e.g. a repeated key).
    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    /// The configured CORS origin is not a valid header value.
    #[error("invalid CORS origin {0:?}")]
    InvalidCorsOrigin(String),
}

impl QuizError {
    /// The HTTP status and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Room(RoomError::InvalidTeamName) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Room(RoomError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Room not found".to_string())
            }
            Self::Room(RoomError::Unavailable) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Room registry unavailable".to_string(),
            ),
            Self::Question(QuestionError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Difficulty not found".to_string())
            }
            Self::InvalidBody(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::InvalidQuery(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::Io(_) | Self::Protocol(_) | Self::InvalidCorsOrigin(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
