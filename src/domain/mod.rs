// Domain layer: schedule rules, value types and ports.

pub mod entities;
pub mod errors;
pub mod phase;
pub mod ports;
pub mod resolver;
pub mod schedule;
pub mod timestamp;

pub use entities::{Circle, Game, GamePhase, LocationPage, PlayerLocation};
pub use errors::{LocationError, ScheduleError, StoreError};
