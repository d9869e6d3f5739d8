use dioxus::prelude::*;
use lernplan_core::model::{StudyDay, UserId};

use crate::context::{AppContext, use_ui_session};
use crate::views::CalendarView;

#[component]
pub fn Sidebar(user: UserId) -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_ui_session();
    let content = ctx.content();

    let name = ctx.display_names().display_name(&user).to_string();
    let state = session.state.read().clone();
    let study_day = state.study_day().value();
    let remaining = state.study_day().remaining();
    let logout_pending = state.logout_pending();

    let on_day_input = move |evt: FormEvent| {
        if let Ok(raw) = evt.value().parse::<i64>() {
            session.state.write().set_study_day(StudyDay::clamped(raw));
        }
    };

    let on_reset = move |_| {
        content.clear_cache();
        session.content_reset();
    };

    rsx! {
        aside { class: "sidebar",
            h2 { "👋 Welcome, {name}" }
            hr {}
            h3 { "🎯 Dein Lernfortschritt" }

            label { r#for: "study-day", "Current Study Day (1-120)" }
            div { class: "slider",
                input {
                    id: "study-day",
                    r#type: "range",
                    min: "1",
                    max: "120",
                    value: "{study_day}",
                    oninput: on_day_input,
                }
                span { class: "slider-value", "{study_day}" }
            }

            div { class: "metric",
                span { class: "metric-label", "Total Days Remaining" }
                span { class: "metric-value", "{remaining}" }
            }

            if logout_pending {
                div { class: "logout-confirm",
                    p { class: "warning", "Are you sure you want to log out? Your progress is saved." }
                    div { class: "button-row",
                        button {
                            class: "secondary",
                            onclick: move |_| {
                                if let Err(err) = session.state.write().confirm_logout() {
                                    tracing::warn!(error = %err, "logout confirmation ignored");
                                }
                            },
                            "Confirm Logout"
                        }
                        button {
                            onclick: move |_| {
                                if let Err(err) = session.state.write().cancel_logout() {
                                    tracing::warn!(error = %err, "logout cancel ignored");
                                }
                            },
                            "Cancel"
                        }
                    }
                }
            } else {
                button {
                    class: "wide",
                    onclick: move |_| {
                        if let Err(err) = session.state.write().request_logout() {
                            tracing::warn!(error = %err, "logout request ignored");
                        }
                    },
                    "Logout"
                }
            }

            button {
                class: "wide",
                title: "Clears the generated lesson content and quiz.",
                onclick: on_reset,
                "Reset Cache & Lesson"
            }

            CalendarView { user: user.clone() }
            p { class: "caption", "Tracking is based on the real-world date." }
            p { class: "caption", "Progress stored for user: {user}" }
        }
    }
}
