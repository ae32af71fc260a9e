pub mod employee_repository;
pub mod holiday_repository;
