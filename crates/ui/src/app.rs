use dioxus::prelude::*;
use dioxus_router::Router;
use lernplan_core::model::SessionState;

use crate::context::UiSession;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_context_provider(|| UiSession::new(SessionState::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route headings are rendered inside the content pane.
        document::Title { "Dein Deutschlehrer" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
