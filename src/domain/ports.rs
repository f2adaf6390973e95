use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::entities::{Circle, Game, LocationPage};
use crate::domain::errors::StoreError;

// Port for the external record store holding circle, game and
// player-location records. Writes require the caller's bearer token; the
// store owns authorization, this service only forwards credentials.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_circles(&self) -> Result<Vec<Circle>, StoreError>;
    async fn update_circle(&self, circle: &Circle, token: &str) -> Result<(), StoreError>;
    async fn get_game(&self, id: &str) -> Result<Game, StoreError>;
    async fn update_game(
        &self,
        id: &str,
        start: &str,
        end: &str,
        token: &str,
    ) -> Result<(), StoreError>;
    async fn list_player_locations(&self, page: u32, token: &str)
        -> Result<LocationPage, StoreError>;
    async fn insert_player_location(&self, latitude: f64, longitude: f64)
        -> Result<(), StoreError>;
}

// Port for retrieving the current time. Queries take "now" from here so
// the resolution logic stays deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
