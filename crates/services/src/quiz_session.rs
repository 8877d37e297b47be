use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use quiz_core::QuizError;
use quiz_core::quiz::{
    DisplayState, NavigationState, OutcomeToken, QuizState, SubmitOutcome, SubmitRequest,
};
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use crate::questions_repo::QuestionsRepository;

/// How long the submit outcome dialog stays up before clearing itself.
pub const OUTCOME_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One user's pass through the quiz.
///
/// Wraps a `QuizState`, publishes its `NavigationState` and `DisplayState`
/// through `watch` channels after every intent, and runs submissions plus the
/// delayed outcome clear on the Tokio runtime. Clones are handles to the same
/// session. When the last handle is dropped any pending outcome clear is
/// aborted.
///
/// Submitting must happen inside a Tokio runtime.
#[derive(Clone)]
pub struct QuizSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    repo: Arc<dyn QuestionsRepository>,
    state: Mutex<QuizState>,
    initialized: AtomicBool,
    navigation: watch::Sender<NavigationState>,
    display: watch::Sender<DisplayState>,
    pending_clear: Mutex<Option<AbortHandle>>,
}

impl QuizSession {
    /// Create an uninitialized session. Nothing is fetched until `initialize`.
    #[must_use]
    pub fn new(repo: Arc<dyn QuestionsRepository>) -> Self {
        let (navigation, _) = watch::channel(NavigationState::default());
        let (display, _) = watch::channel(DisplayState::default());
        Self {
            inner: Arc::new(SessionInner {
                repo,
                state: Mutex::new(QuizState::new()),
                initialized: AtomicBool::new(false),
                navigation,
                display,
                pending_clear: Mutex::new(None),
            }),
        }
    }

    /// Create a session and load its questions.
    pub async fn open(repo: Arc<dyn QuestionsRepository>) -> Self {
        let session = Self::new(repo);
        session.initialize().await;
        session
    }

    /// Fetch the questions and move to the first one.
    ///
    /// Runs at most once per session. A failed or empty fetch is logged and
    /// leaves the session uninitialized; it is not retried.
    pub async fn initialize(&self) {
        if self.inner.initialized.swap(true, Ordering::AcqRel) {
            debug!("quiz session already initialized");
            return;
        }

        let questions = match self.inner.repo.fetch_questions().await {
            Ok(questions) => questions,
            Err(err) => {
                warn!(error = %err, "quiz stays uninitialized");
                return;
            }
        };

        let count = questions.len();
        match self.inner.update(|state| state.populate(questions)) {
            Ok(()) => info!(count, "questions loaded"),
            Err(err) => warn!(error = %err, "quiz stays uninitialized"),
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner.lock().is_ready()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.inner.lock().is_submitting()
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.inner.navigation.borrow().clone()
    }

    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.inner.display.borrow().clone()
    }

    #[must_use]
    pub fn subscribe_navigation(&self) -> watch::Receiver<NavigationState> {
        self.inner.navigation.subscribe()
    }

    #[must_use]
    pub fn subscribe_display(&self) -> watch::Receiver<DisplayState> {
        self.inner.display.subscribe()
    }

    /// # Errors
    ///
    /// Returns the `QuizError` the state refused the move with.
    pub fn go_next(&self) -> Result<(), QuizError> {
        self.apply("go_next", QuizState::go_next)
    }

    /// # Errors
    ///
    /// Returns the `QuizError` the state refused the move with.
    pub fn go_previous(&self) -> Result<(), QuizError> {
        self.apply("go_previous", QuizState::go_previous)
    }

    /// # Errors
    ///
    /// Returns `QuizError::AlreadySubmitted` once the current question is locked.
    pub fn edit_answer(&self, text: impl Into<String>) -> Result<(), QuizError> {
        let text = text.into();
        self.apply("edit_answer", |state| state.edit_answer(text))
    }

    /// Hide the outcome dialog now; a pending automatic clear becomes a no-op.
    pub fn dismiss_outcome(&self) {
        self.inner.cancel_pending_clear();
        self.inner.update(QuizState::dismiss_outcome);
    }

    /// Submit the current question's answer.
    ///
    /// On completion the outcome is shown and an automatic clear is scheduled
    /// after [`OUTCOME_DISPLAY_DURATION`], replacing any earlier one. If this
    /// future is dropped before the request resolves, nothing is applied.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when submitting is not currently allowed; no request
    /// is sent in that case.
    pub async fn submit(&self) -> Result<SubmitOutcome, QuizError> {
        let request = self
            .inner
            .update(QuizState::begin_submit)
            .inspect_err(|err| debug!(error = %err, "submit refused"))?;
        let in_flight = InFlightSubmit {
            inner: &self.inner,
            request,
            settled: false,
        };

        let succeeded = match self
            .inner
            .repo
            .submit_answer(in_flight.request.id(), in_flight.request.answer())
            .await
        {
            Ok(()) => {
                info!(id = %in_flight.request.id(), "answer submitted");
                true
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                false
            }
        };

        let token = in_flight.settle(succeeded);
        self.schedule_outcome_clear(token);
        Ok(SubmitOutcome::from_success(succeeded))
    }

    /// Dismiss the current outcome and submit the current answer again.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::submit`].
    pub async fn retry_submit(&self) -> Result<SubmitOutcome, QuizError> {
        self.dismiss_outcome();
        self.submit().await
    }

    fn apply(
        &self,
        intent: &'static str,
        f: impl FnOnce(&mut QuizState) -> Result<(), QuizError>,
    ) -> Result<(), QuizError> {
        self.inner
            .update(f)
            .inspect_err(|err| debug!(intent, error = %err, "intent refused"))
    }

    fn schedule_outcome_clear(&self, token: OutcomeToken) {
        let session = Arc::downgrade(&self.inner);
        let task = tokio::spawn(async move {
            tokio::time::sleep(OUTCOME_DISPLAY_DURATION).await;
            let Some(inner) = session.upgrade() else {
                return;
            };
            if inner.update(|state| state.clear_outcome(token)) {
                debug!("outcome dialog cleared");
            }
        });

        let mut pending = self
            .inner
            .pending_clear
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(task.abort_handle()) {
            previous.abort();
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("QuizSession")
            .field("questions_len", &state.questions().len())
            .field("current", &state.current_index())
            .field("outcome", &state.last_submit_outcome())
            .field("submitting", &state.is_submitting())
            .finish_non_exhaustive()
    }
}

//
// ─── INNER ─────────────────────────────────────────────────────────────────────
//

impl SessionInner {
    fn lock(&self) -> MutexGuard<'_, QuizState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the state and republish both derived views.
    ///
    /// Receivers are only notified when a view actually changed.
    fn update<R>(&self, f: impl FnOnce(&mut QuizState) -> R) -> R {
        let mut state = self.lock();
        let result = f(&mut state);
        publish(&self.navigation, state.navigation());
        publish(&self.display, state.display());
        result
    }

    fn cancel_pending_clear(&self) {
        let mut pending = self
            .pending_clear
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        let pending = self
            .pending_clear
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

fn publish<T: PartialEq>(sender: &watch::Sender<T>, next: T) {
    sender.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

/// Releases the in-flight marker if the submit future is dropped early.
struct InFlightSubmit<'a> {
    inner: &'a SessionInner,
    request: SubmitRequest,
    settled: bool,
}

impl InFlightSubmit<'_> {
    fn settle(mut self, succeeded: bool) -> OutcomeToken {
        self.settled = true;
        self.inner
            .update(|state| state.finish_submit(&self.request, succeeded))
    }
}

impl Drop for InFlightSubmit<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!(id = %self.request.id(), "submission abandoned");
            self.inner
                .update(|state| state.abandon_submit(&self.request));
        }
    }
}
