use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use lernplan_core::model::{Completion, DayStatus, LessonPart, MonthGrid, UserId};
use storage::repository::ProgressRepository;

use crate::Clock;
use crate::error::ProgressServiceError;

/// One calendar month with the stored flags of every day that has a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOverview {
    pub grid: MonthGrid,
    pub statuses: BTreeMap<NaiveDate, DayStatus>,
    pub today: NaiveDate,
}

impl MonthOverview {
    #[must_use]
    pub fn status_on(&self, date: NaiveDate) -> DayStatus {
        self.statuses.get(&date).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn completion_on(&self, date: NaiveDate) -> Completion {
        self.status_on(date).completion()
    }

    #[must_use]
    pub fn is_today(&self, date: NaiveDate) -> bool {
        self.today == date
    }
}

/// Reads and records lesson/quiz completion per real calendar date.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, progress }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the lookup fails.
    pub async fn status(
        &self,
        user: &UserId,
        date: NaiveDate,
    ) -> Result<DayStatus, ProgressServiceError> {
        Ok(self.progress.get_status(user, date).await?)
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the lookup fails.
    pub async fn status_today(&self, user: &UserId) -> Result<DayStatus, ProgressServiceError> {
        self.status(user, self.today()).await
    }

    /// Mark `part` done for `date`. Repeating the call changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the write fails.
    pub async fn mark_complete(
        &self,
        user: &UserId,
        date: NaiveDate,
        part: LessonPart,
    ) -> Result<DayStatus, ProgressServiceError> {
        self.set_status(user, date, part, true).await
    }

    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the write fails.
    pub async fn set_status(
        &self,
        user: &UserId,
        date: NaiveDate,
        part: LessonPart,
        value: bool,
    ) -> Result<DayStatus, ProgressServiceError> {
        let status = self.progress.set_part(user, date, part, value).await?;
        tracing::info!(user = %user, %date, part = %part, value, "progress updated");
        Ok(status)
    }

    /// Calendar grid for `year`/`month` plus every stored status inside it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Calendar` for an invalid month and
    /// `ProgressServiceError::Storage` if the query fails.
    pub async fn month_overview(
        &self,
        user: &UserId,
        year: i32,
        month: u32,
    ) -> Result<MonthOverview, ProgressServiceError> {
        let grid = MonthGrid::new(year, month)?;
        let statuses = match (grid.first_day(), grid.last_day()) {
            (Some(first), Some(last)) => self.progress.statuses_between(user, first, last).await?,
            _ => BTreeMap::new(),
        };
        Ok(MonthOverview {
            grid,
            statuses,
            today: self.today(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lernplan_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    fn service() -> ProgressService {
        ProgressService::new(fixed_clock(), Arc::new(InMemoryRepository::new()))
    }

    fn user() -> UserId {
        UserId::parse("sma").unwrap()
    }

    #[tokio::test]
    async fn today_follows_the_clock() {
        let service = service();
        assert_eq!(service.today(), NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());

        service
            .mark_complete(&user(), service.today(), LessonPart::Lesson)
            .await
            .unwrap();
        let status = service.status_today(&user()).await.unwrap();
        assert!(status.lesson_done);
        assert!(!status.quiz_done);
    }

    #[tokio::test]
    async fn marking_twice_is_idempotent() {
        let service = service();
        let day = service.today();
        let first = service
            .mark_complete(&user(), day, LessonPart::Quiz)
            .await
            .unwrap();
        let second = service
            .mark_complete(&user(), day, LessonPart::Quiz)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn set_status_can_clear_a_flag() {
        let service = service();
        let day = service.today();
        service
            .mark_complete(&user(), day, LessonPart::Lesson)
            .await
            .unwrap();
        service
            .mark_complete(&user(), day, LessonPart::Quiz)
            .await
            .unwrap();
        let status = service
            .set_status(&user(), day, LessonPart::Lesson, false)
            .await
            .unwrap();
        assert_eq!(status, DayStatus::new(false, true));
    }

    #[tokio::test]
    async fn month_overview_aggregates_per_day() {
        let service = service();
        let nov = |d| NaiveDate::from_ymd_opt(2023, 11, d).unwrap();
        service
            .mark_complete(&user(), nov(3), LessonPart::Lesson)
            .await
            .unwrap();
        service
            .mark_complete(&user(), nov(3), LessonPart::Quiz)
            .await
            .unwrap();
        service
            .mark_complete(&user(), nov(10), LessonPart::Quiz)
            .await
            .unwrap();
        service
            .mark_complete(&user(), NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(), LessonPart::Quiz)
            .await
            .unwrap();

        let overview = service.month_overview(&user(), 2023, 11).await.unwrap();
        assert_eq!(overview.statuses.len(), 2);
        assert_eq!(overview.completion_on(nov(3)), Completion::Complete);
        assert_eq!(overview.completion_on(nov(10)), Completion::Partial);
        assert_eq!(overview.completion_on(nov(11)), Completion::NotStarted);
        assert!(overview.is_today(nov(14)));
    }

    #[tokio::test]
    async fn invalid_month_is_rejected() {
        let err = service().month_overview(&user(), 2023, 13).await.unwrap_err();
        assert!(matches!(err, ProgressServiceError::Calendar(_)));
    }
}
