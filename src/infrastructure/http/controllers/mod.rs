pub mod assignments;
pub mod employees;
pub mod holidays;
