//! Fixed prompt templates for lessons and quizzes.

use lernplan_core::model::ANSWERS_SEPARATOR;

use super::GenerationRequest;

pub const LESSON_SYSTEM_INSTRUCTION: &str =
    "You are teaching a German A1 lesson. Be encouraging and concise.";

pub const QUIZ_SYSTEM_INSTRUCTION: &str = "You are creating a German A1 practice quiz. \
     Ensure questions are numbered, and answers are provided under the exact heading 'Antworten:'.";

#[must_use]
pub fn lesson_prompt(topic: &str, grammar: &str, vocabulary: &str) -> String {
    format!(
        "You are a friendly and clear German language tutor. Your task is to teach the following A1 lesson:\n\
         1. **Focus:** {topic}\n\
         2. **Grammar:** {grammar}\n\
         3. **Vocabulary:** {vocabulary}\n\
         Structure your response with two clear sections:\n\
         ## 1. Grammatik & Erklärung\n\
         Provide a simple, easy-to-understand explanation of the grammar rule with clear tables or bullet points.\n\
         ## 2. Vokabeln & Beispiele\n\
         List the key vocabulary and provide 5 simple German example sentences that use the grammar rule and vocabulary. \
         Provide the English translation below each German sentence."
    )
}

#[must_use]
pub fn quiz_prompt(topic: &str, grammar: &str) -> String {
    format!(
        "Create a short, interactive practice quiz based on the German lesson:\n\
         **Topic:** {topic}\n\
         **Grammar Rule:** {grammar}\n\
         Create three (3) fill-in-the-blank questions focusing on the grammar rule. \
         Provide the questions clearly, then provide the answers in a separate '{ANSWERS_SEPARATOR}' section. \
         Questions should be formatted: '1. Ich _____ (sein) müde.' and the Answer should be '1. bin'."
    )
}

#[must_use]
pub fn lesson_request(topic: &str, grammar: &str, vocabulary: &str) -> GenerationRequest {
    GenerationRequest::new(
        lesson_prompt(topic, grammar, vocabulary),
        LESSON_SYSTEM_INSTRUCTION,
    )
}

#[must_use]
pub fn quiz_request(topic: &str, grammar: &str) -> GenerationRequest {
    GenerationRequest::new(quiz_prompt(topic, grammar), QUIZ_SYSTEM_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_prompt_names_all_inputs_and_sections() {
        let prompt = lesson_prompt("Greetings", "sein", "Hallo, Tschüss");
        assert!(prompt.contains("1. **Focus:** Greetings\n"));
        assert!(prompt.contains("2. **Grammar:** sein\n"));
        assert!(prompt.contains("3. **Vocabulary:** Hallo, Tschüss\n"));
        assert!(prompt.contains("## 1. Grammatik & Erklärung"));
        assert!(prompt.contains("## 2. Vokabeln & Beispiele"));
    }

    #[test]
    fn quiz_prompt_asks_for_the_answers_heading() {
        let prompt = quiz_prompt("Numbers", "zählen");
        assert!(prompt.contains("**Topic:** Numbers"));
        assert!(prompt.contains("'Antworten:' section"));
        assert!(QUIZ_SYSTEM_INSTRUCTION.contains("'Antworten:'"));
    }
}
