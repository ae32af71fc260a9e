use crate::infrastructure::http::middleware::error::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure outcomes of an assignment run.
///
/// None of these are retried: a retry would reshuffle and silently produce a
/// different assignment.
#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("No employees available for assignment")]
    EmptyEmployeeList,
    #[error("No holidays to assign in {year}")]
    NoAssignableDates { year: i32 },
    #[error("Year {year} is out of range")]
    InvalidYear { year: i32 },
    #[error("Failed to persist assignments: {0}")]
    PersistenceFailure(#[source] ApiError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SchedulingError {
    /// Label for the `outcome` dimension of the run counter
    pub fn outcome(&self) -> &'static str {
        match self {
            SchedulingError::EmptyEmployeeList => "no_employees",
            SchedulingError::NoAssignableDates { .. } => "no_dates",
            SchedulingError::InvalidYear { .. } => "invalid_year",
            SchedulingError::PersistenceFailure(_) => "persistence_failure",
            SchedulingError::Internal(_) => "internal",
        }
    }
}

impl From<ApiError> for SchedulingError {
    fn from(err: ApiError) -> Self {
        SchedulingError::PersistenceFailure(err)
    }
}
