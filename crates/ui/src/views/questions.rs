use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::QuizSession;

use crate::context::AppContext;
use crate::vm::{QuestionsIntent, QuestionsScreenVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuestionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session = use_hook(|| QuizSession::new(ctx.questions_repo()));

    let navigation = use_signal(|| session.navigation());
    let display = use_signal(|| session.display());

    {
        let session = session.clone();
        use_future(move || {
            let session = session.clone();
            async move { session.initialize().await }
        });
    }

    {
        let session = session.clone();
        use_future(move || {
            let mut rx = session.subscribe_navigation();
            let mut navigation = navigation;
            async move {
                loop {
                    navigation.set(rx.borrow_and_update().clone());
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    {
        let session = session.clone();
        use_future(move || {
            let mut rx = session.subscribe_display();
            let mut display = display;
            async move {
                loop {
                    display.set(rx.borrow_and_update().clone());
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    let dispatch_intent = {
        let session = session.clone();
        use_callback(move |intent: QuestionsIntent| {
            // Refused intents are already logged by the session.
            match intent {
                QuestionsIntent::Previous => {
                    let _ = session.go_previous();
                }
                QuestionsIntent::Next => {
                    let _ = session.go_next();
                }
                QuestionsIntent::EditAnswer(text) => {
                    let _ = session.edit_answer(text);
                }
                QuestionsIntent::Submit => {
                    let session = session.clone();
                    spawn(async move {
                        let _ = session.submit().await;
                    });
                }
                QuestionsIntent::Retry => {
                    let session = session.clone();
                    spawn(async move {
                        let _ = session.retry_submit().await;
                    });
                }
                QuestionsIntent::DismissOutcome => session.dismiss_outcome(),
                QuestionsIntent::Back => navigator.go_back(),
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionsTestHandles>() {
                handles.register(dispatch_intent, session.clone());
            }
        }
    }

    let vm = QuestionsScreenVm::map(&navigation.read(), &display.read(), session.is_ready());

    rsx! {
        div { class: "page questions",
            header { class: "questions-header",
                button {
                    id: "questions-back",
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(QuestionsIntent::Back),
                    "Back"
                }
                h2 { "{vm.position_label}" }
                div { class: "questions-nav",
                    button {
                        id: "questions-previous",
                        class: "btn",
                        r#type: "button",
                        disabled: !vm.previous_enabled,
                        onclick: move |_| dispatch_intent.call(QuestionsIntent::Previous),
                        "Previous"
                    }
                    button {
                        id: "questions-next",
                        class: "btn",
                        r#type: "button",
                        disabled: !vm.next_enabled,
                        onclick: move |_| dispatch_intent.call(QuestionsIntent::Next),
                        "Next"
                    }
                }
            }

            if let Some(dialog) = vm.dialog.clone() {
                div { class: "{dialog.class()}", role: "status",
                    span { "{dialog.message}" }
                    if dialog.show_retry {
                        button {
                            id: "questions-retry",
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuestionsIntent::Retry),
                            "Retry"
                        }
                    }
                    button {
                        id: "questions-dismiss",
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuestionsIntent::DismissOutcome),
                        "Dismiss"
                    }
                }
            }

            p { class: "questions-submitted", "{vm.submitted_label}" }
            p { class: "questions-text", "{vm.question_text}" }

            input {
                id: "questions-answer",
                class: "questions-answer",
                r#type: "text",
                placeholder: "Type here for an answer...",
                value: "{vm.answer}",
                disabled: !vm.answer_editing_enabled,
                oninput: move |evt| dispatch_intent.call(QuestionsIntent::EditAnswer(evt.value())),
            }

            button {
                id: "questions-submit",
                class: "btn btn-primary",
                r#type: "button",
                disabled: !vm.submit_enabled,
                onclick: move |_| dispatch_intent.call(QuestionsIntent::Submit),
                "{vm.submit_label}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionsTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuestionsIntent>>>>,
    session: Rc<RefCell<Option<QuizSession>>>,
}

#[cfg(test)]
impl QuestionsTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuestionsIntent>, session: QuizSession) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuestionsIntent> {
        (*self.dispatch.borrow()).expect("questions dispatch registered")
    }

    pub(crate) fn session(&self) -> QuizSession {
        self.session
            .borrow()
            .clone()
            .expect("questions session registered")
    }
}
