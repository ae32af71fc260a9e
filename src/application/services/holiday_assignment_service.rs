use crate::domain::entities::{year_bounds, AssignmentReport};
use crate::domain::errors::SchedulingError;
use crate::domain::ports::{
    employee_repository::EmployeeRepository, holiday_repository::HolidayRepository,
};
use crate::domain::services::{fairness, grouping, rotation};
use crate::infrastructure::http::middleware::error::ApiError;
use crate::infrastructure::observability::{AUTO_ASSIGN_RUNS, DATES_ASSIGNED};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

/// Runs the rotating holiday assignment and reports the resulting spread
#[derive(Clone)]
pub struct HolidayAssignmentService {
    holiday_repo: Arc<dyn HolidayRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
    rng: Arc<Mutex<StdRng>>,
}

impl HolidayAssignmentService {
    pub fn new(
        holiday_repo: Arc<dyn HolidayRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
        rng: StdRng,
    ) -> Self {
        Self {
            holiday_repo,
            employee_repo,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Seeded for reproducible runs, or from OS entropy when `seed` is None
    pub fn with_seed(
        holiday_repo: Arc<dyn HolidayRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(holiday_repo, employee_repo, rng)
    }

    /// Reassign every holiday in `year`.
    ///
    /// Not idempotent: each call reshuffles the rotation. All assignments are
    /// committed together or not at all.
    pub async fn auto_assign(&self, year: i32) -> Result<AssignmentReport, SchedulingError> {
        let result = self.run_assignment(year).await;

        match &result {
            Ok(report) => {
                let assigned: u32 = report.results.iter().map(|r| r.total_days).sum();
                record_run("success");
                metrics::counter!(DATES_ASSIGNED).increment(u64::from(assigned));
            }
            Err(e) => record_run(e.outcome()),
        }

        result
    }

    async fn run_assignment(&self, year: i32) -> Result<AssignmentReport, SchedulingError> {
        check_year(year)?;

        let holidays = self
            .holiday_repo
            .list_holidays_for_year(year)
            .await
            .map_err(|e| read_failure(year, e))?;
        let employees = self
            .employee_repo
            .list_employees()
            .await
            .map_err(|e| read_failure(year, e))?;

        if employees.is_empty() {
            return Err(SchedulingError::EmptyEmployeeList);
        }
        if holidays.is_empty() {
            return Err(SchedulingError::NoAssignableDates { year });
        }

        let grouping = grouping::group_consecutive(&holidays);
        tracing::info!(
            "Auto-assigning {} holidays for {}: {} pairs, {} single days, {} employees",
            holidays.len(),
            year,
            grouping.pairs.len(),
            grouping.singles.len(),
            employees.len()
        );

        let plan = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| SchedulingError::Internal("Random source poisoned".to_string()))?;
            rotation::plan_rotation(&grouping, &employees, &mut *rng)?
        };

        if let Err(e) = self.holiday_repo.apply_assignments(&plan.assignments()).await {
            tracing::error!("Auto-assign for {} rolled back: {}", year, e);
            return Err(SchedulingError::PersistenceFailure(e));
        }

        let report = fairness::run_report(&plan, &employees);
        tracing::info!("Auto-assign for {} complete, rotation: {}", year, report.rotation_order);

        Ok(report)
    }

    /// Rebuild the report from what is currently persisted for `year`
    pub async fn compute_stats(&self, year: i32) -> Result<AssignmentReport, SchedulingError> {
        check_year(year)?;

        let holidays = self.holiday_repo.list_holidays_for_year(year).await?;
        let employees = self.employee_repo.list_employees().await?;

        Ok(fairness::persisted_report(&holidays, &employees))
    }
}

fn check_year(year: i32) -> Result<(), SchedulingError> {
    year_bounds(year)
        .map(|_| ())
        .map_err(|_| SchedulingError::InvalidYear { year })
}

fn read_failure(year: i32, err: ApiError) -> SchedulingError {
    tracing::error!("Auto-assign for {} could not load its inputs: {}", year, err);
    SchedulingError::PersistenceFailure(err)
}

fn record_run(outcome: &'static str) {
    metrics::counter!(AUTO_ASSIGN_RUNS, "outcome" => outcome).increment(1);
}
