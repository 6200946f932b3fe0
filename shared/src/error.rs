use thiserror::Error;
use chrono::NaiveDate;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Date range error: start date {start} must not be after end date {end}")]
    InvalidDateRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
