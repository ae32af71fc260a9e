use crate::domain::entities::{Assignment, HolidayDate};
use crate::infrastructure::http::middleware::error::ApiResult;
use chrono::NaiveDate;

/// Storage for the holiday calendar and the assignment sink
#[async_trait::async_trait]
pub trait HolidayRepository: Send + Sync {
    async fn create_holiday(&self, holiday: &HolidayDate) -> ApiResult<()>;

    async fn get_holiday_by_date(&self, date: NaiveDate) -> ApiResult<Option<HolidayDate>>;

    async fn delete_holiday(&self, id: &str) -> ApiResult<()>;

    /// Holidays falling in `year`, ordered by date ascending
    async fn list_holidays_for_year(&self, year: i32) -> ApiResult<Vec<HolidayDate>>;

    /// Delete every holiday in `year`, returning how many rows went away
    async fn delete_holidays_for_year(&self, year: i32) -> ApiResult<u64>;

    /// Set or clear the employee on a single holiday
    async fn set_holiday_employee(&self, id: &str, employee_id: Option<&str>) -> ApiResult<()>;

    /// Write a whole batch of assignments atomically.
    /// Either every assignment is committed or none is.
    async fn apply_assignments(&self, assignments: &[Assignment]) -> ApiResult<()>;
}
