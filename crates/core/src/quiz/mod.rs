mod state;
mod view;

pub use state::{OutcomeToken, QuizQuestion, QuizState, SubmitRequest};
pub use view::{DisplayState, NavigationState, SubmitOutcome};
