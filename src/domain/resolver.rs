use chrono::NaiveDateTime;

use crate::domain::entities::Circle;
use crate::domain::errors::ScheduleError;
use crate::domain::timestamp::parse_timestamp;

// Returns the first circle whose window contains `now`. Windows are
// half-open: start inclusive, end exclusive, so an instant sitting
// exactly on a boundary belongs to the later circle. Callers supply the
// circles in schedule order; no re-sorting happens here.
pub fn resolve_active_circle(
    circles: &[Circle],
    now: NaiveDateTime,
) -> Result<&Circle, ScheduleError> {
    for circle in circles {
        // A single malformed record aborts resolution; skipping it would
        // mask store corruption.
        let start = parse_timestamp(&circle.start)?;
        let end = parse_timestamp(&circle.end)?;

        if start <= now && now < end {
            return Ok(circle);
        }
    }

    Err(ScheduleError::NoActiveCircle)
}
