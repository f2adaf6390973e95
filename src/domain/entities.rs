use serde::{Deserialize, Serialize};

// Circle record as stored by the external record store. The store issues
// `id`; the data fields keep the store's capitalized wire names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
    #[serde(rename = "Meters")]
    pub meters: u32,
    // Empty until a schedule build assigns this circle a window.
    #[serde(rename = "Start", default)]
    pub start: String,
    #[serde(rename = "End", default)]
    pub end: String,
}

// Game record holding the envelope window of the whole match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Start", default)]
    pub start: String,
    #[serde(rename = "End", default)]
    pub end: String,
}

// Player-reported GPS coordinate record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerLocation {
    #[serde(default)]
    pub id: String,
    pub latitude: String,
    pub longitude: String,
}

// One page of player locations plus the store's pagination envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPage {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub items: Vec<PlayerLocation>,
}

// Derived classification of a game instant. Never stored; always computed
// from the persisted envelope and the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Waiting,
    Active,
    Finished,
}
