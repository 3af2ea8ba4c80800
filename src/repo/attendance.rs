use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::RepoResult;
use crate::model::attendance::{AttendanceRecord, RecordType};

pub async fn create(
    pool: &SqlitePool,
    employee_id: i64,
    record_type: RecordType,
    timestamp: DateTime<Utc>,
) -> RepoResult<AttendanceRecord> {
    let record = sqlx::query_as::<_, AttendanceRecord>(
        r#"
        INSERT INTO attendance_records (employee_id, timestamp, record_type)
        VALUES (?, ?, ?)
        RETURNING id, employee_id, record_type, timestamp
        "#,
    )
    .bind(employee_id)
    .bind(timestamp)
    .bind(record_type.as_ref())
    .fetch_one(pool)
    .await?;
    Ok(record)
}

/// Most recent record for an employee; equal timestamps resolve to the higher id.
pub async fn find_last(pool: &SqlitePool, employee_id: i64) -> RepoResult<Option<AttendanceRecord>> {
    let record = sqlx::query_as::<_, AttendanceRecord>(
        r#"
        SELECT id, employee_id, record_type, timestamp
        FROM attendance_records
        WHERE employee_id = ?
        ORDER BY timestamp DESC, id DESC
        LIMIT 1
        "#,
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}
