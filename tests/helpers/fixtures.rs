#![allow(dead_code)]
use chrono::NaiveDate;
use holiday_rota::domain::entities::{Employee, HolidayDate};
use holiday_rota::domain::ports::employee_repository::EmployeeRepository;
use holiday_rota::domain::ports::holiday_repository::HolidayRepository;
use holiday_rota::infrastructure::persistence::Database;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Insert employees by name, returned in insertion order
pub async fn create_employees(db: &Database, names: &[&str]) -> Vec<Employee> {
    let mut employees = Vec::new();
    for name in names {
        let employee = Employee::new(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
        );
        db.create_employee(&employee)
            .await
            .expect("Failed to create employee");
        employees.push(employee);
    }
    employees
}

/// Insert unassigned holidays for the given dates
pub async fn create_holidays(db: &Database, dates: &[NaiveDate]) -> Vec<HolidayDate> {
    let mut holidays = Vec::new();
    for date in dates {
        let holiday = HolidayDate::new(*date);
        db.create_holiday(&holiday)
            .await
            .expect("Failed to create holiday");
        holidays.push(holiday);
    }
    holidays
}

/// Insert a holiday already held by `employee`
pub async fn create_assigned_holiday(db: &Database, date: NaiveDate, employee: &Employee) -> HolidayDate {
    let mut holiday = HolidayDate::new(date);
    holiday.employee_id = Some(employee.id.clone());
    db.create_holiday(&holiday)
        .await
        .expect("Failed to create holiday");
    holiday
}
