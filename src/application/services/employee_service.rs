use crate::{
    domain::entities::Employee,
    domain::errors::DomainError,
    domain::ports::employee_repository::EmployeeRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
    shared::utils::email_validator::validate_and_normalize_email,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    pub async fn create_employee(&self, name: &str, email: &str) -> ApiResult<Employee> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError("Employee name cannot be empty".to_string()).into());
        }
        let email = validate_and_normalize_email(email)?;

        // Email clash is reported ahead of a name clash
        if self.employee_repo.get_employee_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict("Email already in use".to_string()).into());
        }
        if self.employee_repo.get_employee_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict("Name already in use".to_string()).into());
        }

        let employee = Employee::new(name.to_string(), email);
        self.employee_repo.create_employee(&employee).await?;
        tracing::info!("Created employee {} ({})", employee.name, employee.id);

        Ok(employee)
    }

    pub async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        self.employee_repo.list_employees().await
    }

    pub async fn get_employee(&self, id: &str) -> ApiResult<Employee> {
        self.employee_repo
            .get_employee_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))
    }

    /// Delete an employee; holidays they held become unassigned
    pub async fn delete_employee(&self, id: &str) -> ApiResult<()> {
        self.employee_repo.delete_employee(id).await?;
        tracing::info!("Deleted employee {}", id);
        Ok(())
    }
}
