use std::sync::Arc;

use services::QuestionsRepository;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn questions_repo(&self) -> Arc<dyn QuestionsRepository>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    questions_repo: Arc<dyn QuestionsRepository>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            questions_repo: app.questions_repo(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Each questions screen visit opens its own session on this repository.
    #[must_use]
    pub fn questions_repo(&self) -> Arc<dyn QuestionsRepository> {
        Arc::clone(&self.questions_repo)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
