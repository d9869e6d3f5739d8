use dioxus::prelude::*;
use lernplan_core::model::LessonPart;

use crate::context::{AppContext, use_ui_session};
use crate::views::{ViewError, ViewState, view_state_from_resource};

fn labels(part: LessonPart) -> (&'static str, &'static str) {
    match part {
        LessonPart::Lesson => (
            "Mark Lesson Complete",
            "Lesson marked complete for today!",
        ),
        LessonPart::Quiz => ("Mark Quiz Complete", "Quiz marked complete for today!"),
    }
}

/// Records `part` as done for today's real date; disabled once it is.
#[component]
pub fn MarkCompleteButton(part: LessonPart) -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_ui_session();
    let mut write_error = use_signal(|| None::<ViewError>);
    let progress = ctx.progress();

    let status = use_resource({
        let progress = progress.clone();
        move || {
            let progress = progress.clone();
            let user = session.state.read().current_user().cloned();
            let _revision = *session.progress_revision.read();
            async move {
                let Some(user) = user else {
                    return Ok(false);
                };
                progress
                    .status_today(&user)
                    .await
                    .map(|status| status.is_done(part))
                    .map_err(|_| ViewError::Unknown)
            }
        }
    });

    let on_mark = move |_| {
        let progress = progress.clone();
        let Some(user) = session.state.read().current_user().cloned() else {
            return;
        };
        spawn(async move {
            let today = progress.today();
            match progress.mark_complete(&user, today, part).await {
                Ok(_) => {
                    write_error.set(None);
                    session.progress_changed();
                }
                Err(err) => {
                    tracing::error!(error = %err, %part, "could not record progress");
                    write_error.set(Some(ViewError::Unknown));
                }
            }
        });
    };

    let (button_label, done_label) = labels(part);
    let done = matches!(view_state_from_resource(&status), ViewState::Ready(true));

    rsx! {
        div { class: "mark-complete",
            button { class: "primary", disabled: done, onclick: on_mark, "{button_label}" }
            if done {
                p { class: "success", "{done_label}" }
            }
            if let ViewState::Error(err) = view_state_from_resource(&status) {
                p { class: "error", "{err.message()}" }
            }
            if let Some(err) = write_error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}
