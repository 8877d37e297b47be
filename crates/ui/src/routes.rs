use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{QuestionsView, WelcomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/questions", QuestionsView)] Questions {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "app",
            Outlet::<Route> {}
        }
    }
}
