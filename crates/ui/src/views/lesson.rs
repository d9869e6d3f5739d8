use dioxus::prelude::*;
use lernplan_core::model::LessonPart;
use lernplan_core::model::curriculum::lesson_for_study_day;

use crate::context::{AppContext, use_ui_session};
use crate::views::{
    GenerationFailure, MarkCompleteButton, ViewError, ViewState, view_state_from_resource,
};
use crate::vm::{LessonContentVm, inline_markdown_to_html, map_lesson_content};

#[component]
pub fn LessonView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_ui_session();
    let generator = ctx.content();

    let study_day = use_memo(move || session.state.read().study_day());

    let resource = use_resource(move || {
        let generator = generator.clone();
        let day = study_day();
        let _revision = *session.content_revision.read();
        async move {
            let lesson = lesson_for_study_day(day).map_err(|_| ViewError::Unknown)?;
            let generated = generator
                .generate_lesson(lesson.topic, lesson.grammar, lesson.vocabulary)
                .await;
            Ok(map_lesson_content(&generated))
        }
    });

    let Ok(lesson) = lesson_for_study_day(study_day()) else {
        return rsx! {
            p { class: "error", "Error: Could not find lesson plan for this day." }
        };
    };
    let topic = lesson.topic;
    let activity_html = inline_markdown_to_html(lesson.activity);

    rsx! {
        section { class: "page lesson",
            div { class: "lesson-header",
                MarkCompleteButton { part: LessonPart::Lesson }
                h4 { "Focus: {topic}" }
            }

            match view_state_from_resource(&resource) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "spinner", "Generating customized lesson explanation..." }
                },
                ViewState::Ready(LessonContentVm::Ready { html }) => rsx! {
                    div { class: "generated", dangerous_inner_html: "{html}" }
                },
                ViewState::Ready(LessonContentVm::Failed(failure)) => rsx! {
                    GenerationFailure { failure }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }

            hr {}
            p { class: "activity",
                strong { "Actionable Practice: " }
                span { dangerous_inner_html: "{activity_html}" }
            }
        }
    }
}
