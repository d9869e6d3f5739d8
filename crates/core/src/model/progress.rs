use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which half of a day's work a flag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonPart {
    Lesson,
    Quiz,
}

impl LessonPart {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LessonPart::Lesson => "lesson",
            LessonPart::Quiz => "quiz",
        }
    }
}

impl fmt::Display for LessonPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson" => Ok(LessonPart::Lesson),
            "quiz" => Ok(LessonPart::Quiz),
            other => Err(format!("invalid lesson part: {other}")),
        }
    }
}

/// Completion flags recorded for one user on one calendar date.
///
/// Absence of a stored entry is the same as `DayStatus::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub lesson_done: bool,
    pub quiz_done: bool,
}

impl DayStatus {
    #[must_use]
    pub fn new(lesson_done: bool, quiz_done: bool) -> Self {
        Self {
            lesson_done,
            quiz_done,
        }
    }

    #[must_use]
    pub fn is_done(&self, part: LessonPart) -> bool {
        match part {
            LessonPart::Lesson => self.lesson_done,
            LessonPart::Quiz => self.quiz_done,
        }
    }

    /// Copy with only `part` replaced.
    #[must_use]
    pub fn with_part(self, part: LessonPart, value: bool) -> Self {
        match part {
            LessonPart::Lesson => Self {
                lesson_done: value,
                ..self
            },
            LessonPart::Quiz => Self {
                quiz_done: value,
                ..self
            },
        }
    }

    #[must_use]
    pub fn completion(&self) -> Completion {
        match (self.lesson_done, self.quiz_done) {
            (true, true) => Completion::Complete,
            (false, false) => Completion::NotStarted,
            _ => Completion::Partial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completion {
    Complete,
    Partial,
    NotStarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_part_leaves_other_flag_alone() {
        let status = DayStatus::new(false, true).with_part(LessonPart::Lesson, true);
        assert_eq!(status, DayStatus::new(true, true));

        let status = DayStatus::new(true, false).with_part(LessonPart::Quiz, true);
        assert_eq!(status, DayStatus::new(true, true));
    }

    #[test]
    fn with_part_is_idempotent() {
        let once = DayStatus::default().with_part(LessonPart::Quiz, true);
        let twice = once.with_part(LessonPart::Quiz, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn completion_levels() {
        assert_eq!(DayStatus::default().completion(), Completion::NotStarted);
        assert_eq!(DayStatus::new(true, false).completion(), Completion::Partial);
        assert_eq!(DayStatus::new(false, true).completion(), Completion::Partial);
        assert_eq!(DayStatus::new(true, true).completion(), Completion::Complete);
    }

    #[test]
    fn part_names_round_trip() {
        for part in [LessonPart::Lesson, LessonPart::Quiz] {
            assert_eq!(part.as_str().parse::<LessonPart>(), Ok(part));
        }
        assert!("both".parse::<LessonPart>().is_err());
    }
}
