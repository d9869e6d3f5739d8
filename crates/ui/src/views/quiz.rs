use dioxus::prelude::*;
use lernplan_core::model::LessonPart;
use lernplan_core::model::curriculum::lesson_for_study_day;

use crate::context::{AppContext, use_ui_session};
use crate::views::{
    GenerationFailure, MarkCompleteButton, ViewError, ViewState, view_state_from_resource,
};
use crate::vm::{QuizContentVm, map_quiz_content};

#[component]
pub fn QuizView() -> Element {
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
            let generated = generator.generate_quiz(lesson.topic, lesson.grammar).await;
            Ok(map_quiz_content(&generated))
        }
    });

    let day = study_day();
    let topic = lesson_for_study_day(day)
        .map(|lesson| lesson.topic)
        .unwrap_or_default();

    rsx! {
        section { class: "page quiz",
            div { class: "lesson-header",
                MarkCompleteButton { part: LessonPart::Quiz }
                div {
                    h4 { "Practice for Day {day}: {topic}" }
                    p { "Test your understanding with a quick grammar check!" }
                }
            }

            match view_state_from_resource(&resource) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "spinner", "Generating practice questions..." }
                },
                ViewState::Ready(QuizContentVm::Split { questions_html, answers_html }) => rsx! {
                    div { class: "generated", dangerous_inner_html: "{questions_html}" }
                    details { class: "answers",
                        summary { "Show Answers (Antworten)" }
                        div { class: "generated", dangerous_inner_html: "{answers_html}" }
                    }
                },
                ViewState::Ready(QuizContentVm::Unparsed { raw_html }) => rsx! {
                    p { class: "warning",
                        "The language model failed to separate questions and answers correctly. Displaying raw content:"
                    }
                    div { class: "generated", dangerous_inner_html: "{raw_html}" }
                },
                ViewState::Ready(QuizContentVm::Failed(failure)) => rsx! {
                    GenerationFailure { failure }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}
