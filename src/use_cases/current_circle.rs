use std::sync::Arc;

use crate::domain::entities::Circle;
use crate::domain::errors::ScheduleError;
use crate::domain::ports::{Clock, RecordStore};
use crate::domain::resolver::resolve_active_circle;
use crate::domain::schedule::validate_schedule;
use crate::domain::timestamp::parse_timestamp;

// Query: which circle is active right now. Re-fetches fresh records on
// every call; staleness is bounded only by store latency.
pub struct CurrentCircleUseCase {
    pub store: Arc<dyn RecordStore>,
    pub clock: Arc<dyn Clock>,
}

impl CurrentCircleUseCase {
    pub async fn execute(&self) -> Result<Circle, ScheduleError> {
        let mut circles = self.store.list_circles().await?;

        // Circles with both fields empty have never been scheduled;
        // querying before the first build is an ordinary miss, not a
        // parse failure.
        circles.retain(|c| !(c.start.is_empty() && c.end.is_empty()));
        if circles.is_empty() {
            return Err(ScheduleError::NoActiveCircle);
        }

        // The store returns records unordered. Stored windows, not radius,
        // define schedule order: with tied radii the fetch order says
        // nothing about which circle was scheduled first.
        let mut keyed = Vec::with_capacity(circles.len());
        for circle in circles {
            let start = parse_timestamp(&circle.start)?;
            keyed.push((start, circle));
        }
        keyed.sort_by_key(|(start, _)| *start);
        let ordered: Vec<Circle> = keyed.into_iter().map(|(_, circle)| circle).collect();

        // Refuse to answer from a half-written schedule (a rebuild that
        // failed mid-persist leaves old and new windows mixed).
        validate_schedule(&ordered)?;

        resolve_active_circle(&ordered, self.clock.now()).cloned()
    }
}
