use chrono::NaiveDate;

use crate::models::{Deadline, EnrichedDeadline};

/// Whole calendar days until `due_date`, counting the due day itself.
///
/// A deadline due today reports 1 and one due tomorrow reports 2. Past due
/// dates report the plain negative difference, so 0 is never produced.
pub fn days_remaining(due_date: NaiveDate, today: NaiveDate) -> i64 {
    let delta = (due_date - today).num_days();
    if delta >= 0 { delta + 1 } else { delta }
}

pub fn compute_derived_fields(deadline: Deadline, today: NaiveDate) -> EnrichedDeadline {
    let days_remaining = days_remaining(deadline.due_date, today);
    EnrichedDeadline {
        deadline,
        days_remaining,
        overdue: days_remaining < 0,
    }
}
