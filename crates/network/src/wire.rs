//! JSON shapes exchanged with the quiz service.

use quiz_core::model::{Question, QuestionId};
use serde::{Deserialize, Serialize};

/// One entry of the `GET questions` response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkQuestion {
    pub id: QuestionId,
    pub question: String,
}

impl NetworkQuestion {
    #[must_use]
    pub fn new(id: QuestionId, question: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
        }
    }

    #[must_use]
    pub fn into_domain(self) -> Question {
        Question::new(self.id, self.question)
    }
}

/// Body of `POST question/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAnswer {
    pub id: QuestionId,
    pub answer: String,
}

impl NetworkAnswer {
    #[must_use]
    pub fn new(id: QuestionId, answer: impl Into<String>) -> Self {
        Self {
            id,
            answer: answer.into(),
        }
    }
}
