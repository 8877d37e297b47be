//! Derived view-models published by the quiz state machine.
//!
//! Both structs are plain values rebuilt in full from `QuizState` after every
//! intent; nothing patches individual fields.

/// Result of the most recent submission, while its dialog is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
}

impl SubmitOutcome {
    #[must_use]
    pub fn from_success(succeeded: bool) -> Self {
        if succeeded {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Button and field enablement for the current question.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub answer_editing_enabled: bool,
    pub submit_enabled: bool,
    /// `None` while no outcome dialog is showing.
    pub last_submit_outcome: Option<SubmitOutcome>,
}

/// Text shown for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    /// `"{index + 1}/{total}"`, or `"??/??"` before questions load.
    pub position_label: String,
    pub submitted_count: usize,
    pub question_text: String,
    pub answer: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            position_label: "??/??".to_string(),
            submitted_count: 0,
            question_text: String::new(),
            answer: String::new(),
        }
    }
}
