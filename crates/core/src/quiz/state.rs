use crate::error::QuizError;
use crate::model::{Question, QuestionId};

use super::view::{DisplayState, NavigationState, SubmitOutcome};

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Session-local copy of a question with the user's answer.
///
/// `submitted` only ever flips from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    id: QuestionId,
    text: String,
    answer: String,
    submitted: bool,
}

impl QuizQuestion {
    fn from_question(question: Question) -> Self {
        Self {
            id: question.id(),
            text: question.into_text(),
            answer: String::new(),
            submitted: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whitespace-only answers count as blank.
    #[must_use]
    pub fn has_answer(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

//
// ─── SUBMISSION HANDLES ────────────────────────────────────────────────────────
//

/// Snapshot of the question being submitted, taken when the submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    index: usize,
    id: QuestionId,
    answer: String,
}

impl SubmitRequest {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Identifies one display of the outcome dialog.
///
/// Only the most recently issued token can clear the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeToken(u64);

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Question navigation and submission state for one quiz session.
///
/// Starts uninitialized (no questions) and becomes ready after `populate`.
/// Every intent either applies fully or is refused with a `QuizError` and
/// leaves the state untouched.
#[derive(Debug, Default)]
pub struct QuizState {
    questions: Vec<QuizQuestion>,
    current: usize,
    outcome: Option<SubmitOutcome>,
    outcome_generation: u64,
    in_flight: Option<usize>,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the fetched questions and move to the first one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` for an empty list (state stays uninitialized)
    /// and `QuizError::AlreadyLoaded` if questions were loaded before.
    pub fn populate(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        if self.is_ready() {
            return Err(QuizError::AlreadyLoaded);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        self.questions = questions
            .into_iter()
            .map(QuizQuestion::from_question)
            .collect();
        self.current = 0;
        self.outcome = None;
        Ok(())
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.is_ready().then_some(self.current)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.questions.iter().filter(|q| q.submitted).count()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn last_submit_outcome(&self) -> Option<SubmitOutcome> {
        self.outcome
    }

    /// # Errors
    ///
    /// Returns `QuizError::AtLastQuestion` when there is no next question.
    pub fn go_next(&mut self) -> Result<(), QuizError> {
        self.ensure_ready()?;
        if self.current + 1 >= self.questions.len() {
            return Err(QuizError::AtLastQuestion);
        }
        self.current += 1;
        self.reset_outcome();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizError::AtFirstQuestion` when already on the first question.
    pub fn go_previous(&mut self) -> Result<(), QuizError> {
        self.ensure_ready()?;
        if self.current == 0 {
            return Err(QuizError::AtFirstQuestion);
        }
        self.current -= 1;
        self.reset_outcome();
        Ok(())
    }

    /// Replace the current question's answer verbatim.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadySubmitted` once the question has been submitted,
    /// or `QuizError::SubmitInFlight` while its answer is being sent.
    pub fn edit_answer(&mut self, text: impl Into<String>) -> Result<(), QuizError> {
        if self.is_ready() && self.in_flight == Some(self.current) {
            return Err(QuizError::SubmitInFlight);
        }
        let question = self.current_question_mut()?;
        if question.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        question.answer = text.into();
        Ok(())
    }

    /// Start submitting the current question.
    ///
    /// The returned request must be handed back to `finish_submit` or
    /// `abandon_submit`; until then further submissions are refused.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SubmitInFlight`, `QuizError::AlreadySubmitted` or
    /// `QuizError::BlankAnswer` when submitting is not allowed.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, QuizError> {
        self.ensure_ready()?;
        if self.in_flight.is_some() {
            return Err(QuizError::SubmitInFlight);
        }
        let index = self.current;
        let question = &self.questions[index];
        if question.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        if !question.has_answer() {
            return Err(QuizError::BlankAnswer);
        }

        let request = SubmitRequest {
            index,
            id: question.id,
            answer: question.answer.clone(),
        };
        self.in_flight = Some(index);
        Ok(request)
    }

    /// Apply the result of a submission and show its outcome.
    ///
    /// On success the submitted question (not whichever one is current now)
    /// is marked submitted.
    pub fn finish_submit(&mut self, request: &SubmitRequest, succeeded: bool) -> OutcomeToken {
        self.release(request);
        if succeeded {
            if let Some(question) = self.questions.get_mut(request.index) {
                question.submitted = true;
            }
        }
        self.outcome = Some(SubmitOutcome::from_success(succeeded));
        self.next_token()
    }

    /// Drop a submission whose result will never arrive.
    pub fn abandon_submit(&mut self, request: &SubmitRequest) {
        self.release(request);
    }

    pub fn dismiss_outcome(&mut self) {
        self.reset_outcome();
    }

    /// Clear the outcome if `token` is still the latest one.
    ///
    /// Returns `true` when the outcome was cleared.
    pub fn clear_outcome(&mut self, token: OutcomeToken) -> bool {
        if token.0 != self.outcome_generation || self.outcome.is_none() {
            return false;
        }
        self.outcome = None;
        true
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        let Some(question) = self.current_question() else {
            return NavigationState::default();
        };

        NavigationState {
            previous_enabled: self.current > 0,
            next_enabled: self.current + 1 < self.questions.len(),
            answer_editing_enabled: !question.submitted
                && self.in_flight != Some(self.current),
            submit_enabled: !question.submitted
                && question.has_answer()
                && self.in_flight.is_none(),
            last_submit_outcome: self.outcome,
        }
    }

    #[must_use]
    pub fn display(&self) -> DisplayState {
        let Some(question) = self.current_question() else {
            return DisplayState::default();
        };

        DisplayState {
            position_label: format!("{}/{}", self.current + 1, self.questions.len()),
            submitted_count: self.submitted_count(),
            question_text: question.text.clone(),
            answer: question.answer.clone(),
        }
    }

    fn ensure_ready(&self) -> Result<(), QuizError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(QuizError::NotReady)
        }
    }

    fn current_question_mut(&mut self) -> Result<&mut QuizQuestion, QuizError> {
        self.questions
            .get_mut(self.current)
            .ok_or(QuizError::NotReady)
    }

    fn release(&mut self, request: &SubmitRequest) {
        if self.in_flight == Some(request.index) {
            self.in_flight = None;
        }
    }

    fn reset_outcome(&mut self) {
        self.outcome = None;
        self.outcome_generation = self.outcome_generation.wrapping_add(1);
    }

    fn next_token(&mut self) -> OutcomeToken {
        self.outcome_generation = self.outcome_generation.wrapping_add(1);
        OutcomeToken(self.outcome_generation)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
