//! Error types for the question repository.

/// Errors returned by [`QuestionBank`](crate::QuestionBank) lookups.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    /// No round exists for the requested difficulty id.
    #[error("difficulty {0:?} not found")]
    NotFound(String),
}
