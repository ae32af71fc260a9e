use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date that needs staffing, optionally linked to the employee on duty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDate {
    pub id: String,
    pub date: NaiveDate,
    pub employee_id: Option<String>, // None = unassigned
}

impl HolidayDate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            employee_id: None,
        }
    }

    /// True when `other` falls exactly one calendar day after this date
    pub fn is_followed_by(&self, other: &HolidayDate) -> bool {
        self.date.succ_opt() == Some(other.date)
    }
}

/// Parse a YYYY-MM-DD string as stored in the holidays table
pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DomainError::ValidationError(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// First and last day of a calendar year, both inclusive
pub fn year_bounds(year: i32) -> DomainResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1);
    let end = NaiveDate::from_ymd_opt(year, 12, 31);
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(DomainError::ValidationError(format!("Year {} is out of range", year))),
    }
}

/// DTO for toggling a holiday on the calendar
#[derive(Debug, Deserialize)]
pub struct ToggleHolidayRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

#[derive(Debug, Serialize)]
pub struct ToggleHolidayResponse {
    pub status: ToggleOutcome,
    pub date: NaiveDate,
}

/// DTO for manually assigning (or unassigning) a single holiday
#[derive(Debug, Deserialize)]
pub struct ManualAssignmentRequest {
    pub date: NaiveDate,
    pub employee_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClearYearResponse {
    pub status: String,
    pub message: String,
    pub deleted: u64,
}
