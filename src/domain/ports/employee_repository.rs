use crate::domain::entities::Employee;
use crate::infrastructure::http::middleware::error::ApiResult;

#[async_trait::async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create_employee(&self, employee: &Employee) -> ApiResult<()>;
    async fn get_employee_by_id(&self, id: &str) -> ApiResult<Option<Employee>>;
    async fn get_employee_by_email(&self, email: &str) -> ApiResult<Option<Employee>>;
    async fn get_employee_by_name(&self, name: &str) -> ApiResult<Option<Employee>>;

    /// All employees in creation order
    async fn list_employees(&self) -> ApiResult<Vec<Employee>>;

    /// Remove an employee and release the holidays they held
    async fn delete_employee(&self, id: &str) -> ApiResult<()>;
}
