pub mod error;

pub use error::*;

use crate::application::services::{EmployeeService, HolidayAssignmentService, HolidayService};

#[derive(Clone)]
pub struct AppState {
    pub employee_service: EmployeeService,
    pub holiday_service: HolidayService,
    pub holiday_assignment_service: HolidayAssignmentService,
}
