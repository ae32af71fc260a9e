use crate::domain::entities::Employee;
use crate::domain::ports::employee_repository::EmployeeRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use sqlx::{any::AnyRow, Row};

fn employee_from_row(row: &AnyRow) -> ApiResult<Employee> {
    Ok(Employee {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

impl Database {
    async fn find_employee(&self, column: &str, value: &str) -> ApiResult<Option<Employee>> {
        let sql = format!(
            "SELECT id, name, email, created_at, updated_at FROM employees WHERE {} = ?",
            column
        );
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(employee_from_row).transpose()
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for Database {
    async fn create_employee(&self, employee: &Employee) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO employees (id, name, email, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.created_at)
        .bind(&employee.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_employee_by_id(&self, id: &str) -> ApiResult<Option<Employee>> {
        self.find_employee("id", id).await
    }

    async fn get_employee_by_email(&self, email: &str) -> ApiResult<Option<Employee>> {
        self.find_employee("email", email).await
    }

    async fn get_employee_by_name(&self, name: &str) -> ApiResult<Option<Employee>> {
        self.find_employee("name", name).await
    }

    async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let rows = sqlx::query(
            "SELECT id, name, email, created_at, updated_at FROM employees
             ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(employee_from_row).collect()
    }

    async fn delete_employee(&self, id: &str) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE holidays SET employee_id = NULL, updated_at = ? WHERE employee_id = ?")
            .bind(&now)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(ApiError::NotFound(format!("Employee {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
