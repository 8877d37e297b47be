use services::{DisplayState, NavigationState, SubmitOutcome};

/// User intents raised by the questions screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionsIntent {
    Previous,
    Next,
    EditAnswer(String),
    Submit,
    Retry,
    DismissOutcome,
    /// Leave the screen, returning to wherever it was opened from.
    Back,
}

/// Transient success/failure dialog shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeDialogVm {
    pub message: &'static str,
    pub succeeded: bool,
    pub show_retry: bool,
}

impl OutcomeDialogVm {
    #[must_use]
    pub fn from_outcome(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Succeeded => Self {
                message: "Success!",
                succeeded: true,
                show_retry: false,
            },
            SubmitOutcome::Failed => Self {
                message: "Failure!",
                succeeded: false,
                show_retry: true,
            },
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.succeeded {
            "questions-dialog questions-dialog--success"
        } else {
            "questions-dialog questions-dialog--failure"
        }
    }
}

/// Render-ready state of the questions screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionsScreenVm {
    pub position_label: String,
    pub submitted_label: String,
    pub question_text: String,
    pub answer: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub answer_editing_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub dialog: Option<OutcomeDialogVm>,
}

impl QuestionsScreenVm {
    #[must_use]
    pub fn map(navigation: &NavigationState, display: &DisplayState, ready: bool) -> Self {
        let submit_label = if ready && !navigation.answer_editing_enabled {
            "Already submitted"
        } else {
            "Submit"
        };

        Self {
            position_label: format!("Question {}", display.position_label),
            submitted_label: format!("Questions submitted: {}", display.submitted_count),
            question_text: display.question_text.clone(),
            answer: display.answer.clone(),
            previous_enabled: navigation.previous_enabled,
            next_enabled: navigation.next_enabled,
            answer_editing_enabled: navigation.answer_editing_enabled,
            submit_enabled: navigation.submit_enabled,
            submit_label,
            dialog: navigation
                .last_submit_outcome
                .map(OutcomeDialogVm::from_outcome),
        }
    }
}
