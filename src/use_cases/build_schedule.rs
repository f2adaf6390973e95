use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use tokio::sync::Mutex;

use crate::domain::errors::ScheduleError;
use crate::domain::ports::RecordStore;
use crate::domain::schedule::build_schedule;

// Summary returned after a successful rebuild.
pub struct ScheduleSummary {
    pub circles_scheduled: usize,
    pub game_start: String,
    pub game_end: String,
}

// Scheduling service: fetch every circle, compute the windows, persist
// each circle and then the game envelope.
pub struct BuildScheduleUseCase {
    pub store: Arc<dyn RecordStore>,
    // Serializes the whole fetch-build-persist sequence. Two interleaved
    // rebuilds would mix windows from different interval configurations.
    pub rebuild_lock: Arc<Mutex<()>>,
}

impl BuildScheduleUseCase {
    pub async fn execute(
        &self,
        game_id: &str,
        start_time: NaiveDateTime,
        interval: TimeDelta,
        token: &str,
    ) -> Result<ScheduleSummary, ScheduleError> {
        let _guard = self.rebuild_lock.lock().await;

        let circles = self.store.list_circles().await?;
        let scheduled = build_schedule(&circles, start_time, interval)?;

        // Fail fast on the first write error. Previously written circles
        // are not rolled back; the query path detects the resulting
        // inconsistency before trusting a fetched schedule.
        for circle in &scheduled {
            self.store.update_circle(circle, token).await?;
        }

        let (first, last) = match (scheduled.first(), scheduled.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ScheduleError::EmptyInput),
        };
        self.store
            .update_game(game_id, &first.start, &last.end, token)
            .await?;

        tracing::info!(
            game_id,
            circles = scheduled.len(),
            game_start = %first.start,
            game_end = %last.end,
            "schedule rebuilt"
        );

        Ok(ScheduleSummary {
            circles_scheduled: scheduled.len(),
            game_start: first.start.clone(),
            game_end: last.end.clone(),
        })
    }
}
