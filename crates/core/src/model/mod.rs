mod ids;
mod question;

pub use ids::{ParseIdError, QuestionId};
pub use question::Question;
