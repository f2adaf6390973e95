use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::entities::{Circle, Game, LocationPage, PlayerLocation};
use crate::domain::errors::StoreError;
use crate::domain::ports::{Clock, RecordStore};
use crate::domain::timestamp::parse_timestamp;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl FixedClock {
    pub(crate) fn at(value: &str) -> Self {
        Self(parse_timestamp(value).expect("expected fixture timestamp to parse"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub list_circles: bool,
    pub update_circle: bool,
    pub get_game: bool,
    pub update_game: bool,
    pub list_locations: bool,
    pub insert_location: bool,
}

#[derive(Default)]
struct StoreData {
    circles: Vec<Circle>,
    games: HashMap<String, Game>,
    locations: Vec<PlayerLocation>,
    // Persisted writes in order, e.g. "circle:a" / "game:g1".
    write_log: Vec<String>,
}

// In-memory record store fake that records every write for assertions.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    data: Arc<Mutex<StoreData>>,
    failures: FailureFlags,
    // Fail the Nth circle update (0-based) to simulate a partial rebuild.
    fail_circle_update_at: Option<usize>,
    locations_per_page: u32,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(StoreData::default())),
            failures: FailureFlags::default(),
            fail_circle_update_at: None,
            locations_per_page: 2,
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn with_circle_update_failure_at(mut self, index: usize) -> Self {
        self.fail_circle_update_at = Some(index);
        self
    }

    pub(crate) fn seed_circles(&self, circles: Vec<Circle>) {
        let mut data = self.data.lock().expect("store mutex poisoned");
        data.circles = circles;
    }

    pub(crate) fn seed_game(&self, game: Game) {
        let mut data = self.data.lock().expect("store mutex poisoned");
        data.games.insert(game.id.clone(), game);
    }

    pub(crate) fn seed_locations(&self, locations: Vec<PlayerLocation>) {
        let mut data = self.data.lock().expect("store mutex poisoned");
        data.locations = locations;
    }

    pub(crate) fn circles(&self) -> Vec<Circle> {
        let data = self.data.lock().expect("store mutex poisoned");
        data.circles.clone()
    }

    pub(crate) fn game(&self, id: &str) -> Option<Game> {
        let data = self.data.lock().expect("store mutex poisoned");
        data.games.get(id).cloned()
    }

    pub(crate) fn locations(&self) -> Vec<PlayerLocation> {
        let data = self.data.lock().expect("store mutex poisoned");
        data.locations.clone()
    }

    pub(crate) fn write_log(&self) -> Vec<String> {
        let data = self.data.lock().expect("store mutex poisoned");
        data.write_log.clone()
    }

    fn circle_updates_so_far(data: &StoreData) -> usize {
        data.write_log
            .iter()
            .filter(|entry| entry.starts_with("circle:"))
            .count()
    }
}

#[async_trait]
impl RecordStore for RecordingStore {
    async fn list_circles(&self) -> Result<Vec<Circle>, StoreError> {
        if self.failures.list_circles {
            return Err(StoreError::Failed {
                operation: "list_circles",
                message: "store unavailable".to_string(),
            });
        }

        let data = self.data.lock().expect("store mutex poisoned");
        Ok(data.circles.clone())
    }

    async fn update_circle(&self, circle: &Circle, _token: &str) -> Result<(), StoreError> {
        let mut data = self.data.lock().expect("store mutex poisoned");
        let failed = self.failures.update_circle
            || self.fail_circle_update_at == Some(Self::circle_updates_so_far(&data));
        if failed {
            return Err(StoreError::Failed {
                operation: "update_circle",
                message: format!("write rejected for circle {}", circle.id),
            });
        }

        if let Some(existing) = data.circles.iter_mut().find(|c| c.id == circle.id) {
            *existing = circle.clone();
        } else {
            data.circles.push(circle.clone());
        }
        data.write_log.push(format!("circle:{}", circle.id));
        Ok(())
    }

    async fn get_game(&self, id: &str) -> Result<Game, StoreError> {
        if self.failures.get_game {
            return Err(StoreError::Failed {
                operation: "get_game",
                message: "store unavailable".to_string(),
            });
        }

        let data = self.data.lock().expect("store mutex poisoned");
        data.games
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                operation: "get_game",
                id: id.to_string(),
            })
    }

    async fn update_game(
        &self,
        id: &str,
        start: &str,
        end: &str,
        _token: &str,
    ) -> Result<(), StoreError> {
        if self.failures.update_game {
            return Err(StoreError::Failed {
                operation: "update_game",
                message: format!("write rejected for game {id}"),
            });
        }

        let mut data = self.data.lock().expect("store mutex poisoned");
        let game = data.games.entry(id.to_string()).or_insert_with(|| Game {
            id: id.to_string(),
            start: String::new(),
            end: String::new(),
        });
        game.start = start.to_string();
        game.end = end.to_string();
        data.write_log.push(format!("game:{id}"));
        Ok(())
    }

    async fn list_player_locations(
        &self,
        page: u32,
        _token: &str,
    ) -> Result<LocationPage, StoreError> {
        if self.failures.list_locations {
            return Err(StoreError::Failed {
                operation: "list_player_locations",
                message: "store unavailable".to_string(),
            });
        }

        let data = self.data.lock().expect("store mutex poisoned");
        let per_page = self.locations_per_page as usize;
        let total_items = data.locations.len();
        let total_pages = total_items.div_ceil(per_page) as u32;
        let offset = page.saturating_sub(1) as usize * per_page;
        let items = data
            .locations
            .iter()
            .skip(offset)
            .take(per_page)
            .cloned()
            .collect();

        Ok(LocationPage {
            page,
            per_page: self.locations_per_page,
            total_items: total_items as u64,
            total_pages,
            items,
        })
    }

    async fn insert_player_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), StoreError> {
        if self.failures.insert_location {
            return Err(StoreError::Failed {
                operation: "insert_player_location",
                message: "store unavailable".to_string(),
            });
        }

        let mut data = self.data.lock().expect("store mutex poisoned");
        let id = format!("loc-{}", data.locations.len() + 1);
        data.locations.push(PlayerLocation {
            id,
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        });
        Ok(())
    }
}
