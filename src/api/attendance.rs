use crate::{
    error::ApiError,
    model::attendance::{AttendanceRecord, RecordType},
    repo,
};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateAttendance {
    /// Internal employee id (not the personnel code)
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "check-in")]
    pub record_type: RecordType,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttendanceResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Ali Mohammadi recorded check-in successfully")]
    pub message: String,
    pub record: Option<AttendanceRecord>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LastRecordResponse {
    #[schema(example = "Last record for employee")]
    pub message: String,
    #[schema(nullable = true)]
    pub last_record: Option<AttendanceRecord>,
}

/// Record a check-in or check-out
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = AttendanceResponse),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 422, description = "Unknown record type or malformed payload", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn record_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAttendance>,
) -> Result<HttpResponse, ApiError> {
    let employee = repo::employee::find_by_id(pool.get_ref(), payload.employee_id)
        .await?
        .ok_or_else(ApiError::employee_not_found)?;

    let record = repo::attendance::create(
        pool.get_ref(),
        employee.id,
        payload.record_type,
        Utc::now(),
    )
    .await?;

    info!(
        employee_id = employee.id,
        record_id = record.id,
        record_type = %payload.record_type,
        "Attendance recorded"
    );

    Ok(HttpResponse::Ok().json(AttendanceResponse {
        success: true,
        message: format!("{} recorded {} successfully", employee.name, payload.record_type),
        record: Some(record),
    }))
}

/// Most recent attendance record of an employee
#[utoipa::path(
    get,
    path = "/api/employees/{id}/last-record",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Last record, or null when the employee has none", body = LastRecordResponse),
        (status = 404, description = "Employee not found", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn last_record(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    if repo::employee::find_by_id(pool.get_ref(), employee_id).await?.is_none() {
        return Err(ApiError::employee_not_found());
    }

    let last_record = repo::attendance::find_last(pool.get_ref(), employee_id).await?;
    let message = match last_record {
        Some(_) => "Last record for employee",
        None => "No record found for this employee",
    };

    Ok(HttpResponse::Ok().json(LastRecordResponse {
        message: message.to_string(),
        last_record,
    }))
}
