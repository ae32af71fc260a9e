use crate::application::services::{EmployeeService, HolidayAssignmentService, HolidayService};
use crate::config::Config;
use crate::domain::ports::employee_repository::EmployeeRepository;
use crate::domain::ports::holiday_repository::HolidayRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

pub fn build_app_state(db: Database, config: &Config) -> AppState {
    let holiday_repo: Arc<dyn HolidayRepository> = Arc::new(db.clone());
    let employee_repo: Arc<dyn EmployeeRepository> = Arc::new(db);

    let employee_service = EmployeeService::new(employee_repo.clone());
    let holiday_service = HolidayService::new(holiday_repo.clone(), employee_repo.clone());

    let holiday_assignment_service =
        HolidayAssignmentService::with_seed(holiday_repo, employee_repo, config.rota_seed);
    match config.rota_seed {
        Some(seed) => tracing::info!("Holiday assignment service initialized with seed {}", seed),
        None => tracing::info!("Holiday assignment service initialized with entropy seed"),
    }

    AppState {
        employee_service,
        holiday_service,
        holiday_assignment_service,
    }
}
