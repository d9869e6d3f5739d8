use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use lernplan_core::model::{DayStatus, LessonPart, UserId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{conn, date_key, map_status_row, parse_date_key, ser};
use crate::repository::{ProgressRepository, StorageError};

// Only the named column is touched on conflict, so the other flag keeps
// whatever value is stored at the moment of the write.
const UPSERT_LESSON: &str = r"
    INSERT INTO progress (user_id, date_str, lesson, quiz)
    VALUES (?1, ?2, ?3, 0)
    ON CONFLICT(user_id, date_str) DO UPDATE SET lesson = excluded.lesson
";

const UPSERT_QUIZ: &str = r"
    INSERT INTO progress (user_id, date_str, lesson, quiz)
    VALUES (?1, ?2, 0, ?3)
    ON CONFLICT(user_id, date_str) DO UPDATE SET quiz = excluded.quiz
";

const SELECT_STATUS: &str =
    "SELECT lesson, quiz FROM progress WHERE user_id = ?1 AND date_str = ?2";

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn get_status(&self, user: &UserId, date: NaiveDate) -> Result<DayStatus, StorageError> {
        let row = sqlx::query(SELECT_STATUS)
            .bind(user.as_str())
            .bind(date_key(date))
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        row.as_ref()
            .map(map_status_row)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    async fn set_part(
        &self,
        user: &UserId,
        date: NaiveDate,
        part: LessonPart,
        value: bool,
    ) -> Result<DayStatus, StorageError> {
        let statement = match part {
            LessonPart::Lesson => UPSERT_LESSON,
            LessonPart::Quiz => UPSERT_QUIZ,
        };
        let key = date_key(date);

        let mut tx = self.pool.begin().await.map_err(conn)?;

        sqlx::query(statement)
            .bind(user.as_str())
            .bind(key.as_str())
            .bind(i64::from(value))
            .execute(&mut *tx)
            .await
            .map_err(conn)?;

        let row = sqlx::query(SELECT_STATUS)
            .bind(user.as_str())
            .bind(key.as_str())
            .fetch_one(&mut *tx)
            .await
            .map_err(conn)?;
        let status = map_status_row(&row)?;

        tx.commit().await.map_err(conn)?;
        Ok(status)
    }

    async fn statuses_between(
        &self,
        user: &UserId,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, DayStatus>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT date_str, lesson, quiz
            FROM progress
            WHERE user_id = ?1 AND date_str BETWEEN ?2 AND ?3
            ORDER BY date_str
            ",
        )
        .bind(user.as_str())
        .bind(date_key(first))
        .bind(date_key(last))
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut out = BTreeMap::new();
        for row in &rows {
            let raw: String = row.try_get("date_str").map_err(ser)?;
            out.insert(parse_date_key(&raw)?, map_status_row(row)?);
        }
        Ok(out)
    }
}
