use thiserror::Error;

/// Reasons a quiz intent was refused.
///
/// A refused intent never changes state; callers may ignore these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("questions have not been loaded")]
    NotReady,
    #[error("questions are already loaded")]
    AlreadyLoaded,
    #[error("the question list is empty")]
    NoQuestions,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("already at the last question")]
    AtLastQuestion,
    #[error("question has already been submitted")]
    AlreadySubmitted,
    #[error("answer is blank")]
    BlankAnswer,
    #[error("a submission is already in flight")]
    SubmitInFlight,
}
