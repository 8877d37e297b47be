use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::api::QuestionsApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::wire::{NetworkAnswer, NetworkQuestion};

const QUESTIONS_PATH: &str = "questions";
const SUBMIT_PATH: &str = "question/submit";

/// `reqwest`-backed client for the quiz service.
#[derive(Clone, Debug)]
pub struct HttpQuestionsApi {
    client: Client,
    config: ApiConfig,
}

impl HttpQuestionsApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Build a client from `QUIZ_API_BASE_URL` or the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the configured URL is invalid.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl QuestionsApi for HttpQuestionsApi {
    async fn list_questions(&self) -> Result<Vec<NetworkQuestion>, ApiError> {
        let url = self.config.endpoint(QUESTIONS_PATH)?;
        debug!(%url, "fetching questions");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let questions: Vec<NetworkQuestion> = response.json().await?;
        debug!(count = questions.len(), "fetched questions");
        Ok(questions)
    }

    async fn submit_answer(&self, answer: &NetworkAnswer) -> Result<(), ApiError> {
        let url = self.config.endpoint(SUBMIT_PATH)?;
        debug!(%url, id = %answer.id, "submitting answer");

        let response = self.client.post(url).json(answer).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        debug!(id = %answer.id, status = %response.status(), "answer accepted");
        Ok(())
    }
}
