use std::fmt;

use thiserror::Error;

use crate::model::ids::StudyDay;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("no lesson covers study day {day}")]
    NoLessonForDay { day: u16 },

    #[error("day range {start}–{end} is inverted")]
    InvertedRange { start: u16, end: u16 },

    #[error("gap before day {day}: previous range ended at {previous_end}")]
    Gap { day: u16, previous_end: u16 },

    #[error("day {day} is covered by more than one lesson")]
    Overlap { day: u16 },

    #[error("plan ends at day {last}, expected {expected}")]
    IncompleteCoverage { last: u16, expected: u16 },
}

//
// ─── TYPES ─────────────────────────────────────────────────────────────────────
//

/// Inclusive range of study days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    start: u16,
    end: u16,
}

impl DayRange {
    #[must_use]
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> u16 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> u16 {
        self.end
    }

    #[must_use]
    pub fn contains(&self, day: u16) -> bool {
        self.start <= day && day <= self.end
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Foundations,
    OrderingAndDirections,
    Consolidation,
}

impl Phase {
    pub const ALL: [Phase; 3] = [
        Phase::Foundations,
        Phase::OrderingAndDirections,
        Phase::Consolidation,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Phase::Foundations => "Phase 1: The Basics & Building Blocks (Days 1–40)",
            Phase::OrderingAndDirections => "Phase 2: Ordering & Directions (Days 41–80)",
            Phase::Consolidation => "Phase 3: Consolidation & Advanced A1 Topics (Days 81–120)",
        }
    }

    #[must_use]
    pub fn goal(self) -> &'static str {
        match self {
            Phase::Foundations => {
                "Master the alphabet, basic greetings, personal pronouns, verb conjugation, and fundamental sentence structure."
            }
            Phase::OrderingAndDirections => {
                "Understand prepositions, transportation, location, time, and form simple questions/negations."
            }
            Phase::Consolidation => {
                "Consolidate grammar, understand the Dative case basics, and handle common dialogue situations."
            }
        }
    }
}

/// One row of the study plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonRecord {
    pub days: DayRange,
    pub phase: Phase,
    pub topic: &'static str,
    pub grammar: &'static str,
    pub vocabulary: &'static str,
    pub activity: &'static str,
}

//
// ─── DATA ──────────────────────────────────────────────────────────────────────
//

const fn lesson(
    start: u16,
    end: u16,
    phase: Phase,
    topic: &'static str,
    grammar: &'static str,
    vocabulary: &'static str,
    activity: &'static str,
) -> LessonRecord {
    LessonRecord {
        days: DayRange::new(start, end),
        phase,
        topic,
        grammar,
        vocabulary,
        activity,
    }
}

static CURRICULUM: [LessonRecord; 15] = [
    lesson(
        1,
        6,
        Phase::Foundations,
        "Introduction & Sounds",
        "The German Alphabet (`Aussprache`), numbers 1–20, basic greetings.",
        "Greetings, farewells, courtesy (e.g., `bitte`, `danke`), simple questions.",
        "Listen to the German alphabet and sounds. Write out the numbers 1-10 in German daily.",
    ),
    lesson(
        7,
        14,
        Phase::Foundations,
        "Personal Information",
        "Subject Pronouns (`ich`, `du`, `er`, etc.), **Verb Conjugation** (regular verbs in the present tense, e.g., `heißen`, `kommen`).",
        "Countries, languages, professions (e.g., `Lehrer`, `Student`).",
        "Practice conjugating **one** new verb daily. Write 3 sentences daily introducing yourself/others.",
    ),
    lesson(
        15,
        24,
        Phase::Foundations,
        "Nouns & Articles",
        "The **Nominative Case**, **Gender** (`der`, `die`, `das`), Plural forms (start recognizing patterns).",
        "Family members, objects around the house (`der Tisch`, `das Buch`).",
        "Label 5 items in your room daily with their correct German article (Der, Die, Das).",
    ),
    lesson(
        25,
        32,
        Phase::Foundations,
        "The Verb 'Sein' & 'Haben'",
        "Irregular conjugation of `sein` (to be) and `haben` (to have). Forming simple statement sentences.",
        "Adjectives for describing state/feeling (e.g., `alt`, `neu`, `müde`, `gut`).",
        "Write 3 sentences using `sein` and 3 sentences using `haben` every day. Focus on correct conjugation.",
    ),
    lesson(
        33,
        40,
        Phase::Foundations,
        "The Accusative Case",
        "Definite and Indefinite Articles in Accusative (`den`, `eine`, `keinen`), identifying direct objects.",
        "Food and drink (`das Brot`, `der Kaffee`), colors.",
        "Practice changing 5 articles from Nominative to Accusative (e.g., `Ich sehe den Hund`).",
    ),
    lesson(
        41,
        48,
        Phase::OrderingAndDirections,
        "Negation & Imperative",
        "Negation (`nicht` and `kein/keine`), simple **Imperative** (commands).",
        "Common verbs of movement, everyday tasks (`kaufen`, `machen`).",
        "Practice negating 5 sentences written previously (e.g., `Ich habe kein Auto`).",
    ),
    lesson(
        49,
        56,
        Phase::OrderingAndDirections,
        "Modal Verbs (Part 1)",
        "Introduction to `können` (can) and `müssen` (must), main verb goes to the end.",
        "Hobbies, abilities, and daily schedules.",
        "Write 3 sentences about things you can/must do. Focus on placing the main verb last.",
    ),
    lesson(
        57,
        64,
        Phase::OrderingAndDirections,
        "Prepositions of Place",
        "Introduction to simple **Prepositions of Place** (e.g., `in`, `auf`, `unter`, `neben`).",
        "Locations (e.g., `die Bank`, `der Park`).",
        "Practice placing objects and describing their location using 3-4 prepositions daily.",
    ),
    lesson(
        65,
        72,
        Phase::OrderingAndDirections,
        "Time and Date",
        "Time (`Es ist...`), Dates, days of the week, months.",
        "Days, months, seasons, and time expressions (e.g., `morgen`, `gestern`).",
        "Practice telling time. Write down your planned activities for tomorrow using time phrases.",
    ),
    lesson(
        73,
        80,
        Phase::OrderingAndDirections,
        "Simple Questions",
        "W-Questions (`Wer`, `Was`, `Wo`, `Wann`, etc.), forming yes/no questions (verb first).",
        "Basic city/travel terms.",
        "Practice asking and answering 5 different W-questions about basic facts.",
    ),
    lesson(
        81,
        88,
        Phase::Consolidation,
        "Modal Verbs (Part 2)",
        "Introduction to `wollen` (want) and `mögen` (like), review all 4 modals.",
        "Clothing (`die Hose`, `das Hemd`), shopping terms (`kosten`, `bezahlen`).",
        "Practice dialogues for ordering or buying items, focusing on using `möchte` (would like).",
    ),
    lesson(
        89,
        98,
        Phase::Consolidation,
        "The Dative Case",
        "Dative Articles (`dem`, `der`, `dem`), Dative Prepositions (e.g., `mit`, `nach`, `von`, `zu`). **(Extended period)**",
        "Means of transport (`der Zug`, `das Flugzeug`), simple prepositions of movement.",
        "Write 3 sentences daily using different Dative prepositions.",
    ),
    lesson(
        99,
        106,
        Phase::Consolidation,
        "Possessive Pronouns",
        "Possessive Pronouns (`mein/meine`, `dein/deine`), correct use according to gender and case (Nominative/Accusative).",
        "Possessions (`der Schlüssel`, `die Tasche`).",
        "Describe whose objects belong to whom. Use `mein` and `meine` correctly in 5 sentences daily.",
    ),
    lesson(
        107,
        114,
        Phase::Consolidation,
        "Perfect Tense Introduction",
        "Introduction to the Perfect Tense (`Perfekt`) using `haben` + Past Participle (for regular verbs).",
        "Verbs related to events (`gekauft`, `gemacht`).",
        "Describe 3 things you did the day before using the Perfect tense.",
    ),
    lesson(
        115,
        120,
        Phase::Consolidation,
        "Final Review & Dialogue",
        "Full review of Nominative, Accusative, and Dative articles/pronouns. Review all modal verbs. Practice combining two ideas with `und` and `aber`.",
        "Numbers 20–100, common phrases used in restaurants/cafes.",
        "Final A1 Assessment: Attempt an official A1 practice test online. Review weak points.",
    ),
];

//
// ─── LOOKUP ────────────────────────────────────────────────────────────────────
//

/// All lessons in plan order.
#[must_use]
pub fn lessons() -> &'static [LessonRecord] {
    &CURRICULUM
}

pub fn lessons_in_phase(phase: Phase) -> impl Iterator<Item = &'static LessonRecord> {
    CURRICULUM.iter().filter(move |lesson| lesson.phase == phase)
}

/// Find the lesson whose range contains `day`.
///
/// # Errors
///
/// Returns `CurriculumError::NoLessonForDay` when no range covers `day`.
pub fn lesson_for_day(day: u16) -> Result<&'static LessonRecord, CurriculumError> {
    CURRICULUM
        .iter()
        .find(|lesson| lesson.days.contains(day))
        .ok_or(CurriculumError::NoLessonForDay { day })
}

/// Lookup by an already-validated study day.
///
/// # Errors
///
/// Returns `CurriculumError::NoLessonForDay` if the table does not cover `day`.
pub fn lesson_for_study_day(day: StudyDay) -> Result<&'static LessonRecord, CurriculumError> {
    lesson_for_day(day.value())
}

/// Check that `records` partition `1..=120` into contiguous, ordered ranges.
///
/// # Errors
///
/// Returns the first inverted range, gap, overlap, or missing tail found.
pub fn validate_partition(records: &[LessonRecord]) -> Result<(), CurriculumError> {
    let mut previous_end = 0_u16;
    for record in records {
        let DayRange { start, end } = record.days;
        if start > end {
            return Err(CurriculumError::InvertedRange { start, end });
        }
        if start <= previous_end {
            return Err(CurriculumError::Overlap { day: start });
        }
        if start != previous_end + 1 {
            return Err(CurriculumError::Gap {
                day: start,
                previous_end,
            });
        }
        previous_end = end;
    }

    let expected = StudyDay::LAST.value();
    if previous_end != expected {
        return Err(CurriculumError::IncompleteCoverage {
            last: previous_end,
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_partitions_the_whole_plan() {
        assert_eq!(validate_partition(lessons()), Ok(()));
    }

    #[test]
    fn every_day_maps_to_exactly_one_lesson() {
        for day in 1..=120_u16 {
            let matches = lessons().iter().filter(|l| l.days.contains(day)).count();
            assert_eq!(matches, 1, "day {day}");
            assert!(lesson_for_day(day).is_ok());
        }
    }

    #[test]
    fn out_of_range_days_are_not_found() {
        assert_eq!(
            lesson_for_day(0),
            Err(CurriculumError::NoLessonForDay { day: 0 })
        );
        assert_eq!(
            lesson_for_day(121),
            Err(CurriculumError::NoLessonForDay { day: 121 })
        );
    }

    #[test]
    fn boundaries_pick_the_right_row() {
        assert_eq!(lesson_for_day(6).unwrap().topic, "Introduction & Sounds");
        assert_eq!(lesson_for_day(7).unwrap().topic, "Personal Information");
        assert_eq!(lesson_for_day(120).unwrap().topic, "Final Review & Dialogue");
    }

    #[test]
    fn phases_cover_forty_days_each() {
        for phase in Phase::ALL {
            let days: u16 = lessons_in_phase(phase)
                .map(|l| l.days.end() - l.days.start() + 1)
                .sum();
            assert_eq!(days, 40, "{phase:?}");
        }
    }

    #[test]
    fn validation_reports_gaps_and_overlaps() {
        let base = lessons()[0];
        let gap = [
            base,
            LessonRecord {
                days: DayRange::new(8, 120),
                ..base
            },
        ];
        assert_eq!(
            validate_partition(&gap),
            Err(CurriculumError::Gap {
                day: 8,
                previous_end: 6
            })
        );

        let overlap = [
            base,
            LessonRecord {
                days: DayRange::new(6, 120),
                ..base
            },
        ];
        assert_eq!(
            validate_partition(&overlap),
            Err(CurriculumError::Overlap { day: 6 })
        );

        assert_eq!(
            validate_partition(&[base]),
            Err(CurriculumError::IncompleteCoverage {
                last: 6,
                expected: 120
            })
        );
    }

    #[test]
    fn range_label_uses_en_dash() {
        assert_eq!(DayRange::new(1, 6).to_string(), "1–6");
    }
}
