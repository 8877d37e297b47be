mod questions;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use questions::QuestionsView;
pub use welcome::WelcomeView;

#[cfg(test)]
pub(crate) use questions::QuestionsTestHandles;
