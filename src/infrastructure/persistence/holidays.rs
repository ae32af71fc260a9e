use crate::domain::entities::{format_date, parse_date, year_bounds, Assignment, HolidayDate};
use crate::domain::ports::holiday_repository::HolidayRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use chrono::NaiveDate;
use sqlx::{any::AnyRow, Row};

fn holiday_from_row(row: &AnyRow) -> ApiResult<HolidayDate> {
    let date: String = row.try_get("date")?;
    Ok(HolidayDate {
        id: row.try_get("id")?,
        date: parse_date(&date)
            .map_err(|e| ApiError::Internal(format!("Corrupt holiday row: {}", e)))?,
        // The Any driver reports NULL as its own type, so an unassigned row
        // fails to decode rather than yielding None
        employee_id: row
            .try_get::<Option<String>, _>("employee_id")
            .ok()
            .flatten(),
    })
}

#[async_trait::async_trait]
impl HolidayRepository for Database {
    async fn create_holiday(&self, holiday: &HolidayDate) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO holidays (id, date, employee_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&holiday.id)
        .bind(format_date(holiday.date))
        .bind(holiday.employee_id.clone())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_holiday_by_date(&self, date: NaiveDate) -> ApiResult<Option<HolidayDate>> {
        let row = sqlx::query("SELECT id, date, employee_id FROM holidays WHERE date = ?")
            .bind(format_date(date))
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(holiday_from_row).transpose()
    }

    async fn delete_holiday(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM holidays WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_holidays_for_year(&self, year: i32) -> ApiResult<Vec<HolidayDate>> {
        let (start, end) = year_bounds(year)?;

        let rows = sqlx::query(
            "SELECT id, date, employee_id FROM holidays
             WHERE date >= ? AND date <= ?
             ORDER BY date ASC",
        )
        .bind(format_date(start))
        .bind(format_date(end))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(holiday_from_row).collect()
    }

    async fn delete_holidays_for_year(&self, year: i32) -> ApiResult<u64> {
        let (start, end) = year_bounds(year)?;

        let result = sqlx::query("DELETE FROM holidays WHERE date >= ? AND date <= ?")
            .bind(format_date(start))
            .bind(format_date(end))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn set_holiday_employee(&self, id: &str, employee_id: Option<&str>) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result =
            sqlx::query("UPDATE holidays SET employee_id = ?, updated_at = ? WHERE id = ?")
                .bind(employee_id.map(str::to_string))
                .bind(&now)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Holiday {} not found", id)));
        }

        Ok(())
    }

    async fn apply_assignments(&self, assignments: &[Assignment]) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        // Dropping the transaction on any early return rolls it back
        let mut tx = self.pool.begin().await?;

        for assignment in assignments {
            let result =
                sqlx::query("UPDATE holidays SET employee_id = ?, updated_at = ? WHERE id = ?")
                    .bind(&assignment.employee_id)
                    .bind(&now)
                    .bind(&assignment.holiday_id)
                    .execute(&mut *tx)
                    .await?;

            if result.rows_affected() == 0 {
                tx.rollback().await?;
                return Err(ApiError::NotFound(format!(
                    "Holiday {} not found",
                    assignment.holiday_id
                )));
            }
        }

        tx.commit().await?;

        tracing::info!("Committed {} holiday assignments", assignments.len());
        Ok(())
    }
}
