use crate::{error::ApiError, repo};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;
use utoipa::ToSchema;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Ali Mohammadi")]
    pub name: String,
    #[schema(example = "10001")]
    pub employee_id: String,
    #[schema(example = "Senior Developer")]
    pub position: String,
    #[serde(default = "default_active")]
    #[schema(example = true, default = true)]
    pub is_active: bool,
    #[schema(example = "data:image/svg+xml;base64,PHN2Zy8+", nullable = true)]
    pub avatar: Option<String>,
}

/// Full replacement of the profile. `avatar` is left untouched when omitted or null.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateEmployee {
    #[schema(example = "Ali Mohammadi")]
    pub name: String,
    #[schema(example = "10001")]
    pub employee_id: String,
    #[schema(example = "Team Lead")]
    pub position: String,
    #[schema(example = false)]
    pub is_active: bool,
    #[serde(default)]
    #[schema(nullable = true)]
    pub avatar: Option<String>,
}

/// List active employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Active employees in registration order", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = repo::employee::find_active(pool.get_ref()).await?;
    debug!(count = employees.len(), "Listed active employees");
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let employee = repo::employee::find_by_id(pool.get_ref(), id)
        .await?
        .ok_or_else(ApiError::employee_not_found)?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created", body = Employee),
        (status = 400, description = "Personnel code already registered", body = ErrorBody),
        (status = 422, description = "Malformed payload", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let employee = repo::employee::create(pool.get_ref(), &payload)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, code = %payload.employee_id, "Failed to create employee"))?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Personnel code held by another employee", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 422, description = "Malformed payload", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let employee = repo::employee::update(pool.get_ref(), id, &payload)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, id, "Failed to update employee"))?;

    Ok(HttpResponse::Ok().json(employee))
}
