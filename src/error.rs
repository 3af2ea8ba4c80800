use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::repo::RepoError;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee with this id was not found";
pub const DUPLICATE_EMPLOYEE_CODE: &str = "An employee with this personnel code is already registered";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Error payload: `{"detail": "..."}`
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Employee with this id was not found")]
    pub detail: String,
}

impl ApiError {
    pub fn employee_not_found() -> Self {
        ApiError::NotFound(EMPLOYEE_NOT_FOUND.to_string())
    }

    pub fn duplicate_employee_code() -> Self {
        ApiError::Conflict(DUPLICATE_EMPLOYEE_CODE.to_string())
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound => ApiError::employee_not_found(),
            RepoError::Duplicate => ApiError::duplicate_employee_code(),
            RepoError::Database(e) => ApiError::Database(e),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            // duplicate codes are reported as a plain bad request
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}
