use serde::{Deserialize, Serialize};

use crate::domain::entities::GamePhase;

// Request payload for reporting a player location. Coordinates stay
// strings on the wire to avoid float round-trip drift.
#[derive(Debug, Deserialize)]
pub struct PlayerLocationRequest {
    pub latitude: String,
    pub longitude: String,
}

// Response payload after recording a player location.
#[derive(Debug, Serialize)]
pub struct PlayerLocationResponse {
    pub recorded: bool,
}

// Query parameters for a schedule rebuild.
#[derive(Debug, Deserialize)]
pub struct StartConditionsParams {
    pub id: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    pub interval: String,
}

// Response payload after a schedule rebuild.
#[derive(Debug, Serialize)]
pub struct StartConditionsResponse {
    pub circles_scheduled: usize,
    pub game_start: String,
    pub game_end: String,
}

// Query parameters for the game state endpoint.
#[derive(Debug, Deserialize)]
pub struct GameStateParams {
    pub id: String,
}

// Response payload for the game state endpoint.
#[derive(Debug, Serialize)]
pub struct GameStateResponse {
    pub id: String,
    pub phase: GamePhase,
    pub start: String,
    pub end: String,
}

// Query parameters for the player locations listing.
#[derive(Debug, Deserialize)]
pub struct PlayerLocationsParams {
    pub token: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
