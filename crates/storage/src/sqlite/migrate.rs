use chrono::Utc;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::SqliteInitError;

/// Name a pre-multi-user `progress` table is moved to during migration 2.
pub const LEGACY_PROGRESS_TABLE: &str = "progress_legacy";

/// What a migration run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub applied: Vec<i64>,
    /// Set when a legacy `progress` table (no `user_id` column) was found and
    /// moved aside: the table it now lives in and how many rows it held.
    pub preserved_legacy_progress: Option<(String, i64)>,
}

async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
        .bind(version)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

async fn mark_applied(conn: &mut SqliteConnection, version: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
            INSERT INTO schema_migrations (version, applied_at)
            VALUES (?1, ?2)
            ON CONFLICT(version) DO NOTHING
        ",
    )
    .bind(version)
    .bind(Utc::now())
    .execute(conn)
    .await?;
    Ok(())
}

async fn table_exists(conn: &mut SqliteConnection, name: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")
        .bind(name)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}

async fn column_names(conn: &mut SqliteConnection, table: &str) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query(&format!("PRAGMA table_info({table})"))
        .fetch_all(conn)
        .await?;
    rows.iter()
        .map(|row| row.try_get::<String, _>("name"))
        .collect()
}

async fn free_legacy_name(conn: &mut SqliteConnection) -> Result<String, sqlx::Error> {
    let mut candidate = LEGACY_PROGRESS_TABLE.to_string();
    let mut suffix = 2;
    while table_exists(conn, &candidate).await? {
        candidate = format!("{LEGACY_PROGRESS_TABLE}_{suffix}");
        suffix += 1;
    }
    Ok(candidate)
}

/// Apply schema versions that are not yet recorded in `schema_migrations`.
///
/// 1. `users`
/// 2. `progress` keyed by `(user_id, date_str)`. A `progress` table left by the
///    single-user schema has no `user_id`; it is renamed aside and reported,
///    never dropped.
pub async fn run_migrations(pool: &SqlitePool) -> Result<MigrationReport, SqliteInitError> {
    let mut report = MigrationReport::default();

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    if !is_applied(pool, 1).await? {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS users (
                    username TEXT PRIMARY KEY,
                    password_hash TEXT NOT NULL
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        mark_applied(&mut tx, 1).await?;
        tx.commit().await?;
        report.applied.push(1);
        tracing::info!(version = 1, "applied migration: users");
    }

    if !is_applied(pool, 2).await? {
        let mut tx = pool.begin().await?;

        if table_exists(&mut tx, "progress").await? {
            let columns = column_names(&mut tx, "progress").await?;
            if !columns.iter().any(|c| c == "user_id") {
                let rows: i64 = sqlx::query("SELECT COUNT(*) AS n FROM progress")
                    .fetch_one(&mut *tx)
                    .await?
                    .try_get("n")?;
                let target = free_legacy_name(&mut tx).await?;
                sqlx::query(&format!("ALTER TABLE progress RENAME TO {target}"))
                    .execute(&mut *tx)
                    .await?;
                tracing::warn!(
                    rows,
                    table = %target,
                    "progress table without user_id found; kept it under a new name"
                );
                report.preserved_legacy_progress = Some((target, rows));
            }
        }

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS progress (
                    user_id TEXT NOT NULL,
                    date_str TEXT NOT NULL,
                    lesson INTEGER NOT NULL DEFAULT 0,
                    quiz INTEGER NOT NULL DEFAULT 0,
                    PRIMARY KEY (user_id, date_str)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        mark_applied(&mut tx, 2).await?;
        tx.commit().await?;
        report.applied.push(2);
        tracing::info!(version = 2, "applied migration: progress");
    }

    Ok(report)
}
