use crate::domain::entities::HolidayDate;

/// Holidays split into two-day units and leftover single days
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayGrouping {
    pub pairs: Vec<[HolidayDate; 2]>,
    pub singles: Vec<HolidayDate>,
}

impl HolidayGrouping {
    pub fn date_count(&self) -> usize {
        self.pairs.len() * 2 + self.singles.len()
    }
}

/// Partition chronologically sorted holidays into runs of consecutive days,
/// then carve each run into pairs from the front.
///
/// A run of odd length leaves its last date in the singles pool.
pub fn group_consecutive(holidays: &[HolidayDate]) -> HolidayGrouping {
    let mut grouping = HolidayGrouping::default();
    let mut run: Vec<HolidayDate> = Vec::new();

    for holiday in holidays {
        let extends_run = run.last().map_or(true, |last| last.is_followed_by(holiday));
        if !extends_run {
            close_run(std::mem::take(&mut run), &mut grouping);
        }
        run.push(holiday.clone());
    }
    close_run(run, &mut grouping);

    grouping
}

fn close_run(run: Vec<HolidayDate>, grouping: &mut HolidayGrouping) {
    let mut dates = run.into_iter();
    loop {
        match (dates.next(), dates.next()) {
            (Some(first), Some(second)) => grouping.pairs.push([first, second]),
            (Some(leftover), None) => grouping.singles.push(leftover),
            _ => break,
        }
    }
}
