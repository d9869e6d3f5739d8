use chrono::NaiveDate;
use lernplan_core::model::DayStatus;
use sqlx::Row;

use crate::repository::StorageError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn parse_date_key(raw: &str) -> Result<NaiveDate, StorageError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| StorageError::Serialization(format!("invalid date_str: {raw}")))
}

/// Rows written by older builds may carry NULL flags; treat them as not done.
fn flag(row: &sqlx::sqlite::SqliteRow, column: &str) -> Result<bool, StorageError> {
    let raw: Option<i64> = row.try_get(column).map_err(ser)?;
    Ok(raw.is_some_and(|v| v != 0))
}

pub(crate) fn map_status_row(row: &sqlx::sqlite::SqliteRow) -> Result<DayStatus, StorageError> {
    Ok(DayStatus::new(flag(row, "lesson")?, flag(row, "quiz")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_keys_are_iso_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(date_key(date), "2026-03-07");
        assert_eq!(parse_date_key("2026-03-07").unwrap(), date);
    }

    #[test]
    fn malformed_date_key_is_a_serialization_error() {
        assert!(matches!(
            parse_date_key("07.03.2026"),
            Err(StorageError::Serialization(_))
        ));
    }
}
