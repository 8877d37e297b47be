#![forbid(unsafe_code)]

pub mod error;
pub mod questions_repo;
pub mod quiz_session;

pub use error::RepoError;
pub use questions_repo::{QuestionsRepo, QuestionsRepository};
pub use quiz_session::{OUTCOME_DISPLAY_DURATION, QuizSession};

pub use quiz_core::quiz::{DisplayState, NavigationState, SubmitOutcome};
pub use quiz_core::QuizError;
