use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use lernplan_core::model::curriculum::lesson_for_study_day;

use crate::context::{AppContext, use_ui_session};
use crate::views::{ConfigBanners, LessonView, LoginView, PlanView, QuizView, Sidebar};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LessonView)] Lesson {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/plan", PlanView)] Plan {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let state = session.state.read().clone();

    let Some(user) = state.current_user().cloned() else {
        return rsx! {
            ConfigBanners { issues: ctx.config_issues().to_vec() }
            LoginView {}
        };
    };

    let study_day = state.study_day();
    let days = lesson_for_study_day(study_day)
        .map(|lesson| lesson.days.to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "app",
            Sidebar { user }
            main { class: "content",
                ConfigBanners { issues: ctx.config_issues().to_vec() }
                h2 { "📅 Lesson Day: {study_day} (Topics for Days {days})" }
                nav { class: "tabs",
                    Link { to: Route::Lesson {}, "📚 Today's Lesson (LLM)" }
                    Link { to: Route::Quiz {}, "📝 Practice Quiz (LLM)" }
                    Link { to: Route::Plan {}, "🗓️ Full 120-Day Plan" }
                }
                Outlet::<Route> {}
            }
        }
    }
}
