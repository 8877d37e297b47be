use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn WelcomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page welcome",
            h2 { "Welcome!" }
            button {
                id: "welcome-start",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::Questions {});
                },
                "Start survey"
            }
        }
    }
}
