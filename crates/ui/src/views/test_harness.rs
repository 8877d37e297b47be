use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Navigator, Routable, Router, use_navigator};
use network::{InMemoryQuestionsApi, NetworkQuestion};
use quiz_core::model::QuestionId;
use services::{QuestionsRepo, QuestionsRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuestionsTestHandles, QuestionsView, WelcomeView};

#[derive(Clone)]
struct TestApp {
    questions_repo: Arc<dyn QuestionsRepository>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Quiz"
    }

    fn questions_repo(&self) -> Arc<dyn QuestionsRepository> {
        Arc::clone(&self.questions_repo)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Questions,
    /// Welcome at `/`, then navigate into the questions screen once.
    WelcomeThenQuestions,
}

/// Navigator of the harness router, captured by `WelcomeThenQuestions`.
#[derive(Clone, Default)]
pub struct HarnessNavigator(Rc<RefCell<Option<Navigator>>>);

impl HarnessNavigator {
    pub fn get(&self) -> Navigator {
        (*self.0.borrow()).expect("harness navigator registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: QuestionsTestHandles,
    navigator: HarnessNavigator,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    use_context_provider(|| props.navigator.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/questions")]
    QuestionsPage {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Questions => rsx! { QuestionsView {} },
        ViewKind::WelcomeThenQuestions => rsx! { WelcomeThenQuestions {} },
    }
}

#[component]
fn QuestionsPage() -> Element {
    rsx! { QuestionsView {} }
}

#[component]
fn WelcomeThenQuestions() -> Element {
    let navigator = use_navigator();
    let captured = use_context::<HarnessNavigator>();
    use_hook(move || {
        let first_visit = captured.0.borrow().is_none();
        *captured.0.borrow_mut() = Some(navigator);
        if first_visit {
            spawn(async move {
                navigator.push(TestRoute::QuestionsPage {});
            });
        }
    });
    rsx! { WelcomeView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryQuestionsApi,
    pub handles: QuestionsTestHandles,
    pub navigator: HarnessNavigator,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned session tasks and watcher loops catch up.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_questions() -> Vec<NetworkQuestion> {
    vec![
        NetworkQuestion::new(QuestionId::new(1), "What is your favourite colour?"),
        NetworkQuestion::new(QuestionId::new(2), "What is your favourite food?"),
        NetworkQuestion::new(QuestionId::new(3), "What is your favourite country?"),
    ]
}

pub fn setup_view_harness(view: ViewKind, api: InMemoryQuestionsApi) -> ViewHarness {
    let repo: Arc<dyn QuestionsRepository> = Arc::new(QuestionsRepo::new(Arc::new(api.clone())));
    let app = Arc::new(TestApp {
        questions_repo: repo,
    });
    let handles = QuestionsTestHandles::default();
    let navigator = HarnessNavigator::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
            navigator: navigator.clone(),
        },
    );

    ViewHarness {
        dom,
        api,
        handles,
        navigator,
    }
}
