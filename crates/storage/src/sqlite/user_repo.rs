use async_trait::async_trait;
use lernplan_core::model::UserId;
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{conn, ser};
use crate::repository::{StorageError, UserRecord, UserRepository};

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn insert_user_if_absent(&self, record: &UserRecord) -> Result<bool, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO users (username, password_hash)
            VALUES (?1, ?2)
            ON CONFLICT(username) DO NOTHING
            ",
        )
        .bind(record.user_id.as_str())
        .bind(record.password_hash.as_str())
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(res.rows_affected() == 1)
    }

    async fn password_hash(&self, user: &UserId) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT password_hash FROM users WHERE username = ?1")
            .bind(user.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        row.map(|row| row.try_get::<String, _>("password_hash").map_err(ser))
            .transpose()
    }
}
