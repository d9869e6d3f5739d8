/// Heading the quiz prompt asks the model to put above the answers.
pub const ANSWERS_SEPARATOR: &str = "Antworten:";

/// A generated quiz split into its questions and answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuiz {
    Split { questions: String, answers: String },
    /// The separator was missing; show the text as-is with a warning.
    Unparsed { raw: String },
}

impl ParsedQuiz {
    /// Split on the first occurrence of [`ANSWERS_SEPARATOR`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.split_once(ANSWERS_SEPARATOR) {
            Some((questions, answers)) => Self::Split {
                questions: questions.trim().to_string(),
                answers: answers.trim().to_string(),
            },
            None => Self::Unparsed {
                raw: text.to_string(),
            },
        }
    }

    #[must_use]
    pub fn needs_warning(&self) -> bool {
        matches!(self, Self::Unparsed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_questions_from_answers() {
        let parsed = ParsedQuiz::parse("1. Ich _____ (sein) müde.\nAntworten:\n1. bin");
        assert_eq!(
            parsed,
            ParsedQuiz::Split {
                questions: "1. Ich _____ (sein) müde.".into(),
                answers: "1. bin".into(),
            }
        );
        assert!(!parsed.needs_warning());
    }

    #[test]
    fn only_the_first_separator_splits() {
        let parsed = ParsedQuiz::parse("Q\nAntworten:\nA\nAntworten: again");
        assert_eq!(
            parsed,
            ParsedQuiz::Split {
                questions: "Q".into(),
                answers: "A\nAntworten: again".into(),
            }
        );
    }

    #[test]
    fn missing_separator_is_unparsed_with_warning() {
        let text = "1. Du _____ (haben) Zeit.\nAnswers:\n1. hast";
        let parsed = ParsedQuiz::parse(text);
        assert_eq!(parsed, ParsedQuiz::Unparsed { raw: text.into() });
        assert!(parsed.needs_warning());
    }

    #[test]
    fn empty_text_does_not_panic() {
        assert!(ParsedQuiz::parse("").needs_warning());
    }
}
