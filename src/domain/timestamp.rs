use chrono::{NaiveDateTime, TimeDelta};

use crate::domain::errors::ScheduleError;

// Wire format for every persisted timestamp: millisecond precision, UTC,
// with a literal `Z` suffix. The suffix is part of the format string, not
// an offset marker; existing persisted data depends on it byte-for-byte.
pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3fZ";

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ScheduleError> {
    NaiveDateTime::parse_from_str(value, STANDARD_TIME_FORMAT).map_err(|source| {
        ScheduleError::TimestampParse {
            value: value.to_string(),
            source,
        }
    })
}

pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(STANDARD_TIME_FORMAT).to_string()
}

// Parses a compact duration like `30m`, `90s` or `1h30m` into a delta.
// Units: ms, s, m, h. The total must be strictly positive, since every
// circle window must satisfy start < end.
pub fn parse_interval(value: &str) -> Result<TimeDelta, ScheduleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid_interval(value, "empty duration"));
    }

    let mut total = TimeDelta::zero();
    let mut rest = trimmed;
    while !rest.is_empty() {
        let digits_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| invalid_interval(value, "missing unit suffix"))?;
        if digits_len == 0 {
            return Err(invalid_interval(value, "expected a number"));
        }
        let (digits, tail) = rest.split_at(digits_len);
        let quantity: i64 = digits
            .parse()
            .map_err(|_| invalid_interval(value, "quantity out of range"))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);
        // Checked constructors: the quantity comes straight off the wire
        // and chrono's plain constructors panic out of bounds.
        let delta = match unit {
            "ms" => TimeDelta::try_milliseconds(quantity),
            "s" => TimeDelta::try_seconds(quantity),
            "m" => TimeDelta::try_minutes(quantity),
            "h" => TimeDelta::try_hours(quantity),
            _ => return Err(invalid_interval(value, "unknown unit")),
        }
        .ok_or_else(|| invalid_interval(value, "quantity out of range"))?;
        total = total
            .checked_add(&delta)
            .ok_or_else(|| invalid_interval(value, "quantity out of range"))?;
        rest = next;
    }

    if total <= TimeDelta::zero() {
        return Err(invalid_interval(value, "must be positive"));
    }
    Ok(total)
}

fn invalid_interval(value: &str, reason: &'static str) -> ScheduleError {
    ScheduleError::InvalidInterval {
        value: value.to_string(),
        reason,
    }
}
