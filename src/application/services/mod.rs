pub mod employee_service;
pub mod holiday_assignment_service;
pub mod holiday_service;

pub use employee_service::EmployeeService;
pub use holiday_assignment_service::HolidayAssignmentService;
pub use holiday_service::HolidayService;
