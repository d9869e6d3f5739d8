use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Monday-first grid of one month. Cells outside the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidMonth` if `year`/`month` is not a real month.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth { year, month })?;

        let lead = first.weekday().num_days_from_monday();
        let mut cursor = first - Duration::days(i64::from(lead));
        let mut weeks = Vec::with_capacity(6);
        loop {
            let mut week = [None; 7];
            for slot in &mut week {
                if cursor.month() == month && cursor.year() == year {
                    *slot = Some(cursor);
                }
                cursor += Duration::days(1);
            }
            weeks.push(week);
            if cursor.month() != month || cursor.year() != year {
                break;
            }
        }

        Ok(Self { year, month, weeks })
    }

    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        // A date always names a valid month.
        Self::new(date.year(), date.month()).unwrap_or_else(|_| Self {
            year: date.year(),
            month: date.month(),
            weeks: Vec::new(),
        })
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn month_name(&self) -> &'static str {
        let index = usize::try_from(self.month.saturating_sub(1)).unwrap_or(0);
        MONTH_NAMES.get(index).copied().unwrap_or("")
    }

    #[must_use]
    pub fn weeks(&self) -> &[[Option<NaiveDate>; 7]] {
        &self.weeks
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| *cell)
    }

    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days().next()
    }

    #[must_use]
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days().last()
    }

    #[must_use]
    pub fn previous(&self) -> (i32, u32) {
        if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }

    #[must_use]
    pub fn next(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }
}

#[must_use]
pub fn weekday_label(day: Weekday) -> &'static str {
    WEEKDAY_LABELS[day.num_days_from_monday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn october_2026_starts_on_thursday() {
        let grid = MonthGrid::new(2026, 10).unwrap();
        let first_week = grid.weeks()[0];
        assert_eq!(first_week[0], None);
        assert_eq!(first_week[2], None);
        assert_eq!(first_week[3], NaiveDate::from_ymd_opt(2026, 10, 1));
        assert_eq!(grid.days().count(), 31);
        assert_eq!(grid.month_name(), "October");
    }

    #[test]
    fn month_starting_monday_has_no_leading_blanks() {
        // 2024-04-01 is a Monday.
        let grid = MonthGrid::new(2024, 4).unwrap();
        assert_eq!(grid.weeks()[0][0], NaiveDate::from_ymd_opt(2024, 4, 1));
        assert_eq!(grid.weeks().len(), 5);
    }

    #[test]
    fn february_in_a_leap_year() {
        let grid = MonthGrid::new(2024, 2).unwrap();
        assert_eq!(grid.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn navigation_wraps_years() {
        let grid = MonthGrid::new(2026, 1).unwrap();
        assert_eq!(grid.previous(), (2025, 12));
        let grid = MonthGrid::new(2026, 12).unwrap();
        assert_eq!(grid.next(), (2027, 1));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert_eq!(
            MonthGrid::new(2026, 13),
            Err(CalendarError::InvalidMonth {
                year: 2026,
                month: 13
            })
        );
    }

    #[test]
    fn weekday_labels_are_monday_first() {
        assert_eq!(weekday_label(Weekday::Mon), "Mo");
        assert_eq!(weekday_label(Weekday::Sun), "Su");
    }
}
