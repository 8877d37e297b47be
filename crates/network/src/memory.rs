use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::QuestionsApi;
use crate::error::ApiError;
use crate::wire::{NetworkAnswer, NetworkQuestion};

/// Scriptable in-memory quiz service for tests and offline runs.
///
/// Clones share state, so a test can keep a handle while the repository owns another.
#[derive(Clone, Default)]
pub struct InMemoryQuestionsApi {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    questions: Vec<NetworkQuestion>,
    offline: bool,
    fetch_status: Option<StatusCode>,
    submit_status: Option<StatusCode>,
    scripted_submit_statuses: VecDeque<StatusCode>,
    submissions: Vec<NetworkAnswer>,
    fetch_calls: usize,
}

impl InMemoryQuestionsApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<NetworkQuestion>) -> Self {
        let api = Self::new();
        api.set_questions(questions);
        api
    }

    pub fn set_questions(&self, questions: Vec<NetworkQuestion>) {
        self.lock().questions = questions;
    }

    /// Simulate a transport failure for every call while `offline` is set.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Status returned by `list_questions`; `None` means 200.
    pub fn set_fetch_status(&self, status: Option<StatusCode>) {
        self.lock().fetch_status = status;
    }

    /// Status returned by `submit_answer` once the script is exhausted; `None` means 200.
    pub fn set_submit_status(&self, status: Option<StatusCode>) {
        self.lock().submit_status = status;
    }

    /// Queue a status for the next unscripted `submit_answer` call.
    pub fn push_submit_status(&self, status: StatusCode) {
        self.lock().scripted_submit_statuses.push_back(status);
    }

    /// Every answer received, including rejected ones, in arrival order.
    #[must_use]
    pub fn submissions(&self) -> Vec<NetworkAnswer> {
        self.lock().submissions.clone()
    }

    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.lock().fetch_calls
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn check_status(status: Option<StatusCode>) -> Result<(), ApiError> {
    match status {
        Some(status) if !status.is_success() => Err(ApiError::HttpStatus(status)),
        _ => Ok(()),
    }
}

#[async_trait]
impl QuestionsApi for InMemoryQuestionsApi {
    async fn list_questions(&self) -> Result<Vec<NetworkQuestion>, ApiError> {
        let mut state = self.lock();
        state.fetch_calls += 1;
        if state.offline {
            return Err(ApiError::Connection("offline".into()));
        }
        check_status(state.fetch_status)?;
        Ok(state.questions.clone())
    }

    async fn submit_answer(&self, answer: &NetworkAnswer) -> Result<(), ApiError> {
        let mut state = self.lock();
        if state.offline {
            return Err(ApiError::Connection("offline".into()));
        }
        state.submissions.push(answer.clone());
        let status = state
            .scripted_submit_statuses
            .pop_front()
            .or(state.submit_status);
        check_status(status)
    }
}
