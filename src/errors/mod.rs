use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use std::fmt;
use validator::ValidationErrors;

use crate::db::StoreError;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    ForeignKeyViolation(String),
    Conflict(String),
    DatabaseError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::ForeignKeyViolation(msg)
            | AppError::Conflict(msg)
            | AppError::DatabaseError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::ForeignKeyViolation(msg) => write!(f, "Foreign Key Violation: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::ForeignKeyViolation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.message().to_string(),
        })
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

// Fallback for store failures a repository has no more specific message for.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ForeignKeyViolation { constraint } => {
                AppError::ForeignKeyViolation(format!("Referenced row does not exist ({})", constraint))
            }
            StoreError::UniqueViolation { constraint } => {
                AppError::Conflict(format!("Record already exists ({})", constraint))
            }
            StoreError::CheckViolation { constraint } => {
                AppError::Validation(format!("Value rejected by {}", constraint))
            }
            StoreError::Database(err) => {
                error!("Database error: {:?}", err);
                AppError::DatabaseError("Database error".to_string())
            }
        }
    }
}
