use chrono::{NaiveDateTime, TimeDelta};

use crate::domain::entities::Circle;
use crate::domain::errors::ScheduleError;
use crate::domain::timestamp::{format_timestamp, parse_timestamp};

// Assigns every circle a contiguous half-open activation window, largest
// radius first. The boundary timestamp is carried forward in memory
// between windows, so contiguity cannot drift through parse/format
// cycles; each field is formatted exactly once.
pub fn build_schedule(
    circles: &[Circle],
    start_time: NaiveDateTime,
    interval: TimeDelta,
) -> Result<Vec<Circle>, ScheduleError> {
    if circles.is_empty() {
        return Err(ScheduleError::EmptyInput);
    }

    let mut ordered = circles.to_vec();
    // Stable sort: radius ties keep their fetch order.
    ordered.sort_by(|a, b| b.meters.cmp(&a.meters));

    let mut window_start = start_time;
    for circle in &mut ordered {
        // Extreme but parseable start/interval combinations must error,
        // not panic in chrono.
        let window_end = window_start.checked_add_signed(interval).ok_or_else(|| {
            ScheduleError::InvalidInterval {
                value: interval.to_string(),
                reason: "window end exceeds the representable time range",
            }
        })?;
        circle.start = format_timestamp(window_start);
        circle.end = format_timestamp(window_end);
        window_start = window_end;
    }

    Ok(ordered)
}

// Checks that a fetched, schedule-ordered circle set still forms one
// contiguous sequence of valid windows. A rebuild that died between
// per-circle writes leaves a mix of old and new windows behind; callers
// run this before trusting stored data.
pub fn validate_schedule(circles: &[Circle]) -> Result<(), ScheduleError> {
    for circle in circles {
        let start = parse_timestamp(&circle.start)?;
        let end = parse_timestamp(&circle.end)?;
        if start >= end {
            return Err(ScheduleError::InconsistentSchedule {
                detail: format!("circle {} has an empty or inverted window", circle.id),
            });
        }
    }

    for pair in circles.windows(2) {
        // String comparison on purpose: the wire format is the contract.
        if pair[0].end != pair[1].start {
            return Err(ScheduleError::InconsistentSchedule {
                detail: format!(
                    "circle {} ends at {} but circle {} starts at {}",
                    pair[0].id, pair[0].end, pair[1].id, pair[1].start
                ),
            });
        }
    }

    Ok(())
}
