// Use cases layer: application workflows around the schedule core.

pub mod build_schedule;
pub mod current_circle;
pub mod game_state;
pub mod player_locations;

#[cfg(test)]
pub(crate) mod test_support;

pub use build_schedule::{BuildScheduleUseCase, ScheduleSummary};
pub use current_circle::CurrentCircleUseCase;
pub use game_state::{GameStateUseCase, GameStateView};
pub use player_locations::{InsertPlayerLocationUseCase, ListPlayerLocationsUseCase};
