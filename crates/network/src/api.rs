use async_trait::async_trait;

use crate::error::ApiError;
use crate::wire::{NetworkAnswer, NetworkQuestion};

/// Client contract for the remote quiz service.
///
/// Each call issues exactly one request; implementations never retry.
#[async_trait]
pub trait QuestionsApi: Send + Sync {
    /// Fetch every question, in server order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpStatus` for non-2xx responses and
    /// `ApiError::Transport` for I/O or decoding failures.
    async fn list_questions(&self) -> Result<Vec<NetworkQuestion>, ApiError>;

    /// Submit one answer. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpStatus` for non-2xx responses and
    /// `ApiError::Transport` for I/O failures.
    async fn submit_answer(&self, answer: &NetworkAnswer) -> Result<(), ApiError>;
}
