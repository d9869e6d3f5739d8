use lernplan_core::model::ParsedQuiz;
use services::GeneratedContent;

use crate::vm::markdown_vm::markdown_to_html;

/// Shown above a failed generation in place of the content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationFailureVm {
    pub sentinel: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonContentVm {
    Ready { html: String },
    Failed(GenerationFailureVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizContentVm {
    Split {
        questions_html: String,
        answers_html: String,
    },
    /// No answers heading was found; the raw text is shown with a warning.
    Unparsed { raw_html: String },
    Failed(GenerationFailureVm),
}

fn failure(content: &GeneratedContent) -> Option<GenerationFailureVm> {
    match content {
        GeneratedContent::Ready(_) => None,
        GeneratedContent::Failed { sentinel, reason } => Some(GenerationFailureVm {
            sentinel: (*sentinel).to_string(),
            reason: reason.clone(),
        }),
    }
}

#[must_use]
pub fn map_lesson_content(content: &GeneratedContent) -> LessonContentVm {
    match failure(content) {
        Some(failed) => LessonContentVm::Failed(failed),
        None => LessonContentVm::Ready {
            html: markdown_to_html(content.text()),
        },
    }
}

#[must_use]
pub fn map_quiz_content(content: &GeneratedContent) -> QuizContentVm {
    if let Some(failed) = failure(content) {
        return QuizContentVm::Failed(failed);
    }
    match ParsedQuiz::parse(content.text()) {
        ParsedQuiz::Split { questions, answers } => QuizContentVm::Split {
            questions_html: markdown_to_html(&questions),
            answers_html: markdown_to_html(&answers),
        },
        ParsedQuiz::Unparsed { raw } => QuizContentVm::Unparsed {
            raw_html: markdown_to_html(&raw),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::generation::QUIZ_FAILED;

    #[test]
    fn quiz_with_answers_is_split() {
        let vm = map_quiz_content(&GeneratedContent::Ready(
            "1. Ich _____ (sein) müde.\nAntworten:\n1. bin".into(),
        ));
        let QuizContentVm::Split {
            questions_html,
            answers_html,
        } = vm
        else {
            panic!("expected split quiz");
        };
        assert!(questions_html.contains("Ich _____ (sein) müde."));
        assert!(!questions_html.contains("Antworten"));
        assert!(answers_html.contains("bin"));
    }

    #[test]
    fn quiz_without_answers_is_unparsed() {
        let vm = map_quiz_content(&GeneratedContent::Ready("1. Frage ohne Lösung".into()));
        assert!(matches!(vm, QuizContentVm::Unparsed { .. }));
    }

    #[test]
    fn failed_quiz_is_not_parsed() {
        let vm = map_quiz_content(&GeneratedContent::Failed {
            sentinel: QUIZ_FAILED,
            reason: "timeout".into(),
        });
        assert_eq!(
            vm,
            QuizContentVm::Failed(GenerationFailureVm {
                sentinel: QUIZ_FAILED.into(),
                reason: "timeout".into(),
            })
        );
    }

    #[test]
    fn lesson_markdown_is_rendered() {
        let vm = map_lesson_content(&GeneratedContent::Ready("## 2. Vokabeln & Beispiele".into()));
        let LessonContentVm::Ready { html } = vm else {
            panic!("expected ready lesson");
        };
        assert!(html.contains("<h2>"));
    }
}
