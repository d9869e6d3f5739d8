use chrono::Datelike;
use lernplan_core::model::Completion;
use lernplan_core::model::calendar::WEEKDAY_LABELS;
use services::MonthOverview;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarCellVm {
    Blank,
    Day {
        day: u32,
        completion: Completion,
        is_today: bool,
    },
}

impl CalendarCellVm {
    #[must_use]
    pub fn class(&self) -> String {
        match self {
            CalendarCellVm::Blank => "calendar-cell blank".to_string(),
            CalendarCellVm::Day {
                completion,
                is_today,
                ..
            } => {
                let state = match completion {
                    Completion::Complete => "complete",
                    Completion::Partial => "partial",
                    Completion::NotStarted => "none",
                };
                if *is_today {
                    format!("calendar-cell {state} today")
                } else {
                    format!("calendar-cell {state}")
                }
            }
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            CalendarCellVm::Day {
                completion: Completion::Complete,
                ..
            } => "✅",
            CalendarCellVm::Day {
                completion: Completion::Partial,
                ..
            } => "⚠️",
            _ => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarVm {
    pub title: String,
    pub weekday_labels: [&'static str; 7],
    pub weeks: Vec<Vec<CalendarCellVm>>,
    pub previous: (i32, u32),
    pub next: (i32, u32),
}

#[must_use]
pub fn map_month_overview(overview: &MonthOverview) -> CalendarVm {
    let grid = &overview.grid;
    let weeks = grid
        .weeks()
        .iter()
        .map(|week| {
            week.iter()
                .map(|cell| match cell {
                    Some(date) => CalendarCellVm::Day {
                        day: date.day(),
                        completion: overview.completion_on(*date),
                        is_today: overview.is_today(*date),
                    },
                    None => CalendarCellVm::Blank,
                })
                .collect()
        })
        .collect();

    CalendarVm {
        title: format!("{} {}", grid.month_name(), grid.year()),
        weekday_labels: WEEKDAY_LABELS,
        weeks,
        previous: grid.previous(),
        next: grid.next(),
    }
}
