use serde::{Deserialize, Serialize};

/// Separator used when rendering an employee order for display
pub const ORDER_SEPARATOR: &str = " → ";

/// One holiday handed to one employee, as written by the assignment sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub holiday_id: String,
    pub employee_id: String,
}

impl Assignment {
    pub fn new(holiday_id: String, employee_id: String) -> Self {
        Self {
            holiday_id,
            employee_id,
        }
    }
}

/// Per-employee line of an assignment report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAssignmentStats {
    pub id: String,
    pub name: String,
    pub total_days: u32,
    pub continuous_days: u32,
    pub single_days: u32,
    pub weight: i64,
}

/// Result of an auto-assign run or a stats recomputation.
/// `results` is sorted by `total_days`, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentReport {
    #[serde(rename = "order")]
    pub rotation_order: String,
    pub results: Vec<EmployeeAssignmentStats>,
}

#[derive(Debug, Serialize)]
pub struct AutoAssignResponse {
    pub status: String,
    pub data: AssignmentReport,
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}
