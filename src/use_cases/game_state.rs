use std::sync::Arc;

use crate::domain::entities::GamePhase;
use crate::domain::errors::ScheduleError;
use crate::domain::phase::classify_phase;
use crate::domain::ports::{Clock, RecordStore};

// Current phase of a game plus the envelope it was derived from.
pub struct GameStateView {
    pub id: String,
    pub phase: GamePhase,
    pub start: String,
    pub end: String,
}

// Query: what phase is the given game in right now.
pub struct GameStateUseCase {
    pub store: Arc<dyn RecordStore>,
    pub clock: Arc<dyn Clock>,
}

impl GameStateUseCase {
    pub async fn execute(&self, game_id: &str) -> Result<GameStateView, ScheduleError> {
        let game = self.store.get_game(game_id).await?;

        // A game whose window was never stamped has no phase to report.
        if game.start.is_empty() && game.end.is_empty() {
            return Err(ScheduleError::NotScheduled {
                id: game_id.to_string(),
            });
        }

        let phase = classify_phase(&game.start, &game.end, self.clock.now())?;

        Ok(GameStateView {
            id: game.id,
            phase,
            start: game.start,
            end: game.end,
        })
    }
}
