use crate::domain::entities::{
    AssignmentReport, Employee, EmployeeAssignmentStats, HolidayDate, ORDER_SEPARATOR,
};
use crate::domain::services::rotation::{AssignmentKind, RotationPlan};
use std::collections::HashMap;

/// Upper bound of the relative weight band
pub const MAX_RELATIVE_WEIGHT: f64 = 3.0;

/// Factor applied to the day gap by the stats recomputation
pub const STATS_WEIGHT_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTally {
    pub total_days: u32,
    pub continuous_days: u32,
    pub single_days: u32,
}

/// Weight in [0, 3]: 0 for the most loaded employee, 3 for the least loaded.
/// All zero when every employee carries the same load.
pub fn relative_weight(max_days: u32, min_days: u32, days: u32) -> i64 {
    let day_range = max_days.saturating_sub(min_days);
    if day_range == 0 {
        return 0;
    }
    let days_diff = f64::from(max_days.saturating_sub(days));
    ((days_diff / f64::from(day_range)) * MAX_RELATIVE_WEIGHT).round_ties_even() as i64
}

/// Half the gap to the most loaded employee, rounded half to even. Unbounded.
pub fn stats_weight(max_days: u32, days: u32) -> i64 {
    (f64::from(max_days.saturating_sub(days)) * STATS_WEIGHT_FACTOR).round_ties_even() as i64
}

/// Tally a fresh rotation plan: two continuous days per pair, one single day
/// per random draw.
pub fn tally_plan(plan: &RotationPlan, employees: &[Employee]) -> HashMap<String, DayTally> {
    let mut tallies = zeroed_tallies(employees);

    for planned in &plan.assignments {
        if let Some(tally) = tallies.get_mut(&planned.assignment.employee_id) {
            tally.total_days += 1;
            match planned.kind {
                AssignmentKind::Paired => tally.continuous_days += 1,
                AssignmentKind::Single => tally.single_days += 1,
            }
        }
    }

    tallies
}

/// Re-derive continuity from persisted assignments alone.
///
/// Unassigned dates are skipped. A streak continues while dates stay
/// adjacent and keep the same employee; streaks of two or more days count as
/// continuous, lone days as single. Holidays held by an unknown employee are
/// ignored.
pub fn tally_persisted(
    holidays: &[HolidayDate],
    employees: &[Employee],
) -> HashMap<String, DayTally> {
    let mut tallies = zeroed_tallies(employees);
    let mut streak: Vec<(&HolidayDate, &str)> = Vec::new();

    for holiday in holidays {
        let Some(employee_id) = holiday.employee_id.as_deref() else {
            continue;
        };
        if !tallies.contains_key(employee_id) {
            tracing::warn!(
                "Holiday {} is assigned to unknown employee {}, skipping",
                holiday.date,
                employee_id
            );
            continue;
        }

        let continues = streak
            .last()
            .map_or(true, |(last, last_employee)| {
                last.is_followed_by(holiday) && *last_employee == employee_id
            });
        if !continues {
            close_streak(&streak, &mut tallies);
            streak.clear();
        }
        streak.push((holiday, employee_id));
    }
    close_streak(&streak, &mut tallies);

    tallies
}

fn close_streak(streak: &[(&HolidayDate, &str)], tallies: &mut HashMap<String, DayTally>) {
    let Some((_, employee_id)) = streak.first() else {
        return;
    };
    if let Some(tally) = tallies.get_mut(*employee_id) {
        let days = streak.len() as u32;
        tally.total_days += days;
        if days >= 2 {
            tally.continuous_days += days;
        } else {
            tally.single_days += days;
        }
    }
}

fn zeroed_tallies(employees: &[Employee]) -> HashMap<String, DayTally> {
    employees
        .iter()
        .map(|employee| (employee.id.clone(), DayTally::default()))
        .collect()
}

/// Rows sorted by total days, highest first. Ties keep the order of `employees`.
fn sorted_rows<'a>(
    employees: &'a [Employee],
    tallies: &HashMap<String, DayTally>,
) -> Vec<(&'a Employee, DayTally)> {
    let mut rows: Vec<_> = employees
        .iter()
        .map(|employee| (employee, tallies.get(&employee.id).copied().unwrap_or_default()))
        .collect();
    rows.sort_by(|a, b| b.1.total_days.cmp(&a.1.total_days));
    rows
}

fn join_names<'a>(employees: impl Iterator<Item = &'a Employee>) -> String {
    employees
        .map(|employee| employee.name.as_str())
        .collect::<Vec<_>>()
        .join(ORDER_SEPARATOR)
}

/// Report for a fresh auto-assign run, weighted with [`relative_weight`]
pub fn run_report(plan: &RotationPlan, employees: &[Employee]) -> AssignmentReport {
    let tallies = tally_plan(plan, employees);
    let rows = sorted_rows(&plan.rotation_order, &tallies);

    let max_days = rows.first().map_or(0, |(_, t)| t.total_days);
    let min_days = rows.last().map_or(0, |(_, t)| t.total_days);

    AssignmentReport {
        rotation_order: join_names(plan.rotation_order.iter()),
        results: rows
            .into_iter()
            .map(|(employee, tally)| {
                stats_row(employee, tally, relative_weight(max_days, min_days, tally.total_days))
            })
            .collect(),
    }
}

/// Report recomputed from persisted assignments, weighted with [`stats_weight`]
pub fn persisted_report(holidays: &[HolidayDate], employees: &[Employee]) -> AssignmentReport {
    let tallies = tally_persisted(holidays, employees);
    let rows = sorted_rows(employees, &tallies);
    let max_days = rows.first().map_or(0, |(_, t)| t.total_days);

    AssignmentReport {
        rotation_order: join_names(rows.iter().map(|(employee, _)| *employee)),
        results: rows
            .into_iter()
            .map(|(employee, tally)| {
                stats_row(employee, tally, stats_weight(max_days, tally.total_days))
            })
            .collect(),
    }
}

fn stats_row(employee: &Employee, tally: DayTally, weight: i64) -> EmployeeAssignmentStats {
    EmployeeAssignmentStats {
        id: employee.id.clone(),
        name: employee.name.clone(),
        total_days: tally.total_days,
        continuous_days: tally.continuous_days,
        single_days: tally.single_days,
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::grouping::group_consecutive;
    use crate::domain::services::rotation::plan_rotation;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn employee(name: &str) -> Employee {
        Employee::new(name.to_string(), format!("{}@example.com", name.to_lowercase()))
    }

    fn held(day: u32, employee: &Employee) -> HolidayDate {
        let mut holiday = HolidayDate::new(NaiveDate::from_ymd_opt(2024, 5, day).unwrap());
        holiday.employee_id = Some(employee.id.clone());
        holiday
    }

    #[test]
    fn test_relative_weight_bounds() {
        assert_eq!(relative_weight(10, 4, 10), 0);
        assert_eq!(relative_weight(10, 4, 4), 3);
        assert_eq!(relative_weight(10, 4, 7), 2); // 1.5 rounds to even
        assert_eq!(relative_weight(5, 5, 5), 0);
        assert_eq!(relative_weight(0, 0, 0), 0);

        for max in 0..12u32 {
            for min in 0..=max {
                for days in min..=max {
                    let weight = relative_weight(max, min, days);
                    assert!((0..=3).contains(&weight));
                }
            }
        }
    }

    #[test]
    fn test_stats_weight_rounds_half_to_even() {
        assert_eq!(stats_weight(6, 6), 0);
        assert_eq!(stats_weight(6, 5), 0); // 0.5
        assert_eq!(stats_weight(6, 4), 1);
        assert_eq!(stats_weight(6, 3), 2); // 1.5
        assert_eq!(stats_weight(6, 1), 2); // 2.5
        assert_eq!(stats_weight(12, 0), 6);
    }

    #[test]
    fn test_persisted_streaks_require_same_employee() {
        let alice = employee("Alice");
        let bob = employee("Bob");
        // 1,2 Alice (streak) | 3 Bob (adjacent but different) | 5 Bob | 6,7,8 Alice
        let holidays = vec![
            held(1, &alice),
            held(2, &alice),
            held(3, &bob),
            held(5, &bob),
            held(6, &alice),
            held(7, &alice),
            held(8, &alice),
        ];
        let employees = vec![alice.clone(), bob.clone()];

        let tallies = tally_persisted(&holidays, &employees);

        assert_eq!(
            tallies[&alice.id],
            DayTally {
                total_days: 5,
                continuous_days: 5,
                single_days: 0
            }
        );
        assert_eq!(
            tallies[&bob.id],
            DayTally {
                total_days: 2,
                continuous_days: 0,
                single_days: 2
            }
        );
    }

    #[test]
    fn test_persisted_skips_unassigned_and_unknown() {
        let alice = employee("Alice");
        let ghost = employee("Ghost");
        let mut open = HolidayDate::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        open.employee_id = None;
        let holidays = vec![held(1, &alice), open, held(3, &ghost), held(4, &alice)];

        let tallies = tally_persisted(&holidays, &[alice.clone()]);

        assert_eq!(tallies.len(), 1);
        assert_eq!(tallies[&alice.id].total_days, 2);
        assert_eq!(tallies[&alice.id].single_days, 2);
        assert_eq!(tallies[&alice.id].continuous_days, 0);
    }

    #[test]
    fn test_persisted_report_sorted_with_stable_ties() {
        let alice = employee("Alice");
        let bob = employee("Bob");
        let carol = employee("Carol");
        let dave = employee("Dave");
        let holidays = vec![held(1, &bob), held(2, &bob), held(10, &carol), held(20, &dave)];
        let employees = vec![alice.clone(), bob.clone(), carol.clone(), dave.clone()];

        let report = persisted_report(&holidays, &employees);

        let names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol", "Dave", "Alice"]);
        assert_eq!(report.rotation_order, "Bob → Carol → Dave → Alice");
        let weights: Vec<_> = report.results.iter().map(|r| r.weight).collect();
        assert_eq!(weights, vec![0, 0, 0, 1]); // gaps 0, 1, 1, 2
    }

    #[test]
    fn test_persisted_report_without_employees() {
        let report = persisted_report(&[], &[]);
        assert!(report.results.is_empty());
        assert_eq!(report.rotation_order, "");
    }

    #[test]
    fn test_run_report_counts_and_weights() {
        let staff = vec![employee("A"), employee("B"), employee("C")];
        let holidays: Vec<_> = (1..=5)
            .map(|d| HolidayDate::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap()))
            .collect();
        let grouping = group_consecutive(&holidays);
        let plan = plan_rotation(&grouping, &staff, &mut StdRng::seed_from_u64(5)).unwrap();

        let report = run_report(&plan, &staff);

        let expected_order: Vec<_> = plan.rotation_order.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(report.rotation_order, expected_order.join(" → "));
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.results.iter().map(|r| r.total_days).sum::<u32>(), 5);
        assert_eq!(report.results.iter().map(|r| r.continuous_days).sum::<u32>(), 4);
        assert_eq!(report.results.iter().map(|r| r.single_days).sum::<u32>(), 1);
        assert!(report
            .results
            .windows(2)
            .all(|w| w[0].total_days >= w[1].total_days));
        assert_eq!(report.results[0].weight, 0);
        assert!(report.results.iter().all(|r| (0..=3).contains(&r.weight)));
        assert_eq!(report.results.last().map(|r| r.weight), Some(3));
    }

    #[test]
    fn test_run_report_equal_totals_weigh_zero() {
        let staff = vec![employee("A"), employee("B")];
        let holidays: Vec<_> = (1..=4)
            .map(|d| HolidayDate::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap()))
            .collect();
        let grouping = group_consecutive(&holidays);
        let plan = plan_rotation(&grouping, &staff, &mut StdRng::seed_from_u64(9)).unwrap();

        let report = run_report(&plan, &staff);

        assert!(report.results.iter().all(|r| r.total_days == 2));
        assert!(report.results.iter().all(|r| r.weight == 0));
    }
}
