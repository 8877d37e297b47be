use super::QuestionId;

/// A quiz prompt as served by the remote source.
///
/// This is the repository-layer record: it carries no answer or submission
/// state. Those live on the per-session copy held by `QuizState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
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

    /// Consumes the question, returning its prompt text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
