use lernplan_core::model::curriculum::lessons_in_phase;
use lernplan_core::model::{LessonRecord, Phase, StudyDay};

use crate::vm::markdown_vm::inline_markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanRowVm {
    pub days: String,
    pub topic_html: String,
    pub grammar_html: String,
    pub vocabulary_html: String,
    pub activity_html: String,
    pub is_current: bool,
}

impl PlanRowVm {
    fn new(record: &LessonRecord, study_day: StudyDay) -> Self {
        Self {
            days: record.days.to_string(),
            topic_html: inline_markdown_to_html(record.topic),
            grammar_html: inline_markdown_to_html(record.grammar),
            vocabulary_html: inline_markdown_to_html(record.vocabulary),
            activity_html: inline_markdown_to_html(record.activity),
            is_current: record.days.contains(study_day.value()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanPhaseVm {
    pub title: &'static str,
    pub goal: &'static str,
    pub rows: Vec<PlanRowVm>,
}

/// The whole curriculum grouped by phase, with the row for `study_day` flagged.
#[must_use]
pub fn plan_phases(study_day: StudyDay) -> Vec<PlanPhaseVm> {
    Phase::ALL
        .into_iter()
        .map(|phase| PlanPhaseVm {
            title: phase.title(),
            goal: phase.goal(),
            rows: lessons_in_phase(phase)
                .map(|record| PlanRowVm::new(record, study_day))
                .collect(),
        })
        .collect()
}
