use crate::domain::entities::{Assignment, Employee};
use crate::domain::errors::SchedulingError;
use crate::domain::services::grouping::HolidayGrouping;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentKind {
    /// Part of a two-day unit handed out by the rotation
    Paired,
    /// Leftover day drawn at random
    Single,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAssignment {
    pub assignment: Assignment,
    pub kind: AssignmentKind,
}

/// Outcome of one rotation pass, not yet persisted
#[derive(Debug, Clone)]
pub struct RotationPlan {
    pub rotation_order: Vec<Employee>,
    pub assignments: Vec<PlannedAssignment>,
}

impl RotationPlan {
    pub fn assignments(&self) -> Vec<Assignment> {
        self.assignments
            .iter()
            .map(|planned| planned.assignment.clone())
            .collect()
    }
}

/// Hand out holidays over a shuffled employee order.
///
/// Pairs go round-robin, one pair per turn. Singles are drawn uniformly from
/// the unshuffled `employees` list and leave the rotation cursor untouched.
pub fn plan_rotation<R: Rng + ?Sized>(
    grouping: &HolidayGrouping,
    employees: &[Employee],
    rng: &mut R,
) -> Result<RotationPlan, SchedulingError> {
    if employees.is_empty() {
        return Err(SchedulingError::EmptyEmployeeList);
    }

    let mut rotation_order = employees.to_vec();
    rotation_order.shuffle(rng);

    let mut assignments = Vec::with_capacity(grouping.date_count());
    let mut cursor = 0usize;

    for pair in &grouping.pairs {
        let employee = &rotation_order[cursor];
        for holiday in pair {
            assignments.push(PlannedAssignment {
                assignment: Assignment::new(holiday.id.clone(), employee.id.clone()),
                kind: AssignmentKind::Paired,
            });
        }
        cursor = (cursor + 1) % rotation_order.len();
    }

    for holiday in &grouping.singles {
        let employee = employees
            .choose(rng)
            .ok_or(SchedulingError::EmptyEmployeeList)?;
        assignments.push(PlannedAssignment {
            assignment: Assignment::new(holiday.id.clone(), employee.id.clone()),
            kind: AssignmentKind::Single,
        });
    }

    Ok(RotationPlan {
        rotation_order,
        assignments,
    })
}
