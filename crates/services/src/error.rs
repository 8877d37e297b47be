//! Shared error types for the services crate.

use thiserror::Error;

use network::ApiError;
use quiz_core::model::QuestionId;

/// Failure of a repository call, carrying the original cause.
///
/// The quiz session only distinguishes success from failure; the cause is kept
/// for logging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RepoError {
    #[error("failed to fetch questions")]
    Fetch(#[source] ApiError),

    #[error("failed to submit answer for question {id}")]
    Submit {
        id: QuestionId,
        #[source]
        source: ApiError,
    },
}

impl RepoError {
    #[must_use]
    pub fn cause(&self) -> &ApiError {
        match self {
            Self::Fetch(source) | Self::Submit { source, .. } => source,
        }
    }
}
