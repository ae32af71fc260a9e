use crate::{
    domain::entities::{HolidayDate, ToggleOutcome},
    domain::ports::{employee_repository::EmployeeRepository, holiday_repository::HolidayRepository},
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use chrono::NaiveDate;
use std::sync::Arc;

/// Calendar maintenance: which dates need staffing, and manual overrides
#[derive(Clone)]
pub struct HolidayService {
    holiday_repo: Arc<dyn HolidayRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl HolidayService {
    pub fn new(
        holiday_repo: Arc<dyn HolidayRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            holiday_repo,
            employee_repo,
        }
    }

    /// Add `date` as an unassigned holiday, or remove it if already present
    pub async fn toggle_holiday(&self, date: NaiveDate) -> ApiResult<ToggleOutcome> {
        if let Some(existing) = self.holiday_repo.get_holiday_by_date(date).await? {
            self.holiday_repo.delete_holiday(&existing.id).await?;
            tracing::info!("Removed holiday {}", date);
            return Ok(ToggleOutcome::Removed);
        }

        self.holiday_repo.create_holiday(&HolidayDate::new(date)).await?;
        tracing::info!("Added holiday {}", date);
        Ok(ToggleOutcome::Added)
    }

    pub async fn list_holidays(&self, year: i32) -> ApiResult<Vec<HolidayDate>> {
        self.holiday_repo.list_holidays_for_year(year).await
    }

    /// Manually hand `date` to an employee, or release it with `None`
    pub async fn assign_holiday(
        &self,
        date: NaiveDate,
        employee_id: Option<&str>,
    ) -> ApiResult<HolidayDate> {
        let mut holiday = self
            .holiday_repo
            .get_holiday_by_date(date)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Holiday {} not found", date)))?;

        if let Some(employee_id) = employee_id {
            if self.employee_repo.get_employee_by_id(employee_id).await?.is_none() {
                return Err(ApiError::BadRequest(format!(
                    "Employee {} does not exist",
                    employee_id
                )));
            }
        }

        self.holiday_repo
            .set_holiday_employee(&holiday.id, employee_id)
            .await?;
        holiday.employee_id = employee_id.map(str::to_string);

        Ok(holiday)
    }

    /// Remove every holiday in `year`
    pub async fn clear_year(&self, year: i32) -> ApiResult<u64> {
        let deleted = self.holiday_repo.delete_holidays_for_year(year).await?;
        tracing::info!("Cleared {} holidays for {}", deleted, year);
        Ok(deleted)
    }
}
