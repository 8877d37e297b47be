mod questions_vm;

pub use questions_vm::{OutcomeDialogVm, QuestionsIntent, QuestionsScreenVm};
