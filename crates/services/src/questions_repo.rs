use std::sync::Arc;

use async_trait::async_trait;
use network::{NetworkAnswer, NetworkQuestion, QuestionsApi};
use quiz_core::model::{Question, QuestionId};
use tracing::warn;

use crate::error::RepoError;

/// Repository contract the quiz session talks to.
#[async_trait]
pub trait QuestionsRepository: Send + Sync {
    /// Fetch the current question list. Never cached.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::Fetch` wrapping any transport or status failure.
    async fn fetch_questions(&self) -> Result<Vec<Question>, RepoError>;

    /// Submit one answer, in a single attempt.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::Submit` wrapping any transport or status failure.
    async fn submit_answer(&self, id: QuestionId, answer: &str) -> Result<(), RepoError>;
}

/// Repository backed by a `QuestionsApi` client.
#[derive(Clone)]
pub struct QuestionsRepo {
    api: Arc<dyn QuestionsApi>,
}

impl QuestionsRepo {
    #[must_use]
    pub fn new(api: Arc<dyn QuestionsApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl QuestionsRepository for QuestionsRepo {
    async fn fetch_questions(&self) -> Result<Vec<Question>, RepoError> {
        match self.api.list_questions().await {
            Ok(questions) => Ok(questions
                .into_iter()
                .map(NetworkQuestion::into_domain)
                .collect()),
            Err(err) => {
                warn!(error = %err, "question fetch failed");
                Err(RepoError::Fetch(err))
            }
        }
    }

    async fn submit_answer(&self, id: QuestionId, answer: &str) -> Result<(), RepoError> {
        let body = NetworkAnswer::new(id, answer);
        self.api.submit_answer(&body).await.map_err(|source| {
            warn!(%id, error = %source, "answer submission failed");
            RepoError::Submit { id, source }
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use network::{ApiError, InMemoryQuestionsApi};
    use network::StatusCode;

    fn network_questions() -> Vec<NetworkQuestion> {
        vec![
            NetworkQuestion::new(QuestionId::new(1), "a"),
            NetworkQuestion::new(QuestionId::new(2), "aa"),
            NetworkQuestion::new(QuestionId::new(3), "aaa"),
        ]
    }

    fn repo(api: &InMemoryQuestionsApi) -> QuestionsRepo {
        QuestionsRepo::new(Arc::new(api.clone()))
    }

    #[tokio::test]
    async fn fetch_maps_records_one_to_one() {
        let api = InMemoryQuestionsApi::with_questions(network_questions());
        let questions = repo(&api).fetch_questions().await.unwrap();
        assert_eq!(
            questions,
            vec![
                Question::new(QuestionId::new(1), "a"),
                Question::new(QuestionId::new(2), "aa"),
                Question::new(QuestionId::new(3), "aaa"),
            ]
        );
    }

    #[tokio::test]
    async fn fetch_is_not_cached() {
        let api = InMemoryQuestionsApi::with_questions(network_questions());
        let repo = repo(&api);
        repo.fetch_questions().await.unwrap();
        api.set_questions(vec![NetworkQuestion::new(QuestionId::new(9), "new")]);
        let questions = repo.fetch_questions().await.unwrap();
        assert_eq!(questions, vec![Question::new(QuestionId::new(9), "new")]);
        assert_eq!(api.fetch_calls(), 2);
    }

    #[tokio::test]
    async fn fetch_wraps_transport_failure() {
        let api = InMemoryQuestionsApi::with_questions(network_questions());
        api.set_offline(true);
        let err = repo(&api).fetch_questions().await.unwrap_err();
        assert!(matches!(err, RepoError::Fetch(ApiError::Connection(_))));
    }

    #[tokio::test]
    async fn fetch_wraps_error_status() {
        let api = InMemoryQuestionsApi::with_questions(network_questions());
        api.set_fetch_status(Some(StatusCode::BAD_REQUEST));
        let err = repo(&api).fetch_questions().await.unwrap_err();
        assert_eq!(err.cause().status(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn submit_succeeds_on_2xx() {
        let api = InMemoryQuestionsApi::new();
        api.push_submit_status(StatusCode::CREATED);
        repo(&api)
            .submit_answer(QuestionId::new(1), "a")
            .await
            .unwrap();
        assert_eq!(
            api.submissions(),
            vec![NetworkAnswer::new(QuestionId::new(1), "a")]
        );
    }

    #[tokio::test]
    async fn submit_fails_on_400() {
        let api = InMemoryQuestionsApi::new();
        api.push_submit_status(StatusCode::BAD_REQUEST);
        let err = repo(&api)
            .submit_answer(QuestionId::new(1), "a")
            .await
            .unwrap_err();
        match err {
            RepoError::Submit { id, source } => {
                assert_eq!(id, QuestionId::new(1));
                assert_eq!(source.status(), Some(StatusCode::BAD_REQUEST));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
