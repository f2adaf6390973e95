use thiserror::Error;

// Failure reported by the external record store port. Carries the
// operation name so operators can tell which write of a multi-record
// sequence failed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record store {operation}: record {id:?} not found")]
    NotFound { operation: &'static str, id: String },
    #[error("record store {operation} failed: {message}")]
    Failed {
        operation: &'static str,
        message: String,
    },
}

// Errors for schedule building and zone/phase queries.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("cannot build a schedule from zero circles")]
    EmptyInput,
    #[error("invalid timestamp {value:?}: {source}")]
    TimestampParse {
        value: String,
        source: chrono::format::ParseError,
    },
    #[error("invalid interval {value:?}: {reason}")]
    InvalidInterval { value: String, reason: &'static str },
    #[error("no circle is active at the requested time")]
    NoActiveCircle,
    #[error("game {id} has no scheduled window")]
    NotScheduled { id: String },
    #[error("stored schedule is not contiguous: {detail}")]
    InconsistentSchedule { detail: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

// Errors for the player-location paths.
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("invalid {field} {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}
