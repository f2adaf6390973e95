use chrono::NaiveDateTime;

use crate::domain::entities::GamePhase;
use crate::domain::errors::ScheduleError;
use crate::domain::timestamp::parse_timestamp;

// Classifies a game instant against the persisted envelope. Phase is
// always derived, never stored, so it cannot drift from the schedule.
// Boundaries match the circle windows: start inclusive, end exclusive.
pub fn classify_phase(
    game_start: &str,
    game_end: &str,
    now: NaiveDateTime,
) -> Result<GamePhase, ScheduleError> {
    let start = parse_timestamp(game_start)?;
    let end = parse_timestamp(game_end)?;

    if now < start {
        Ok(GamePhase::Waiting)
    } else if now < end {
        Ok(GamePhase::Active)
    } else {
        Ok(GamePhase::Finished)
    }
}
