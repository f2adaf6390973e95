use axum::routing::{get, post, put};
use axum::Router;

use crate::interface_adapters::handlers::{
    current_circle, game_state, insert_player_location, list_player_locations, root,
    start_conditions,
};
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/player_location", post(insert_player_location))
        .route("/player_locations", get(list_player_locations))
        .route("/current_circle", get(current_circle))
        .route("/start_conditions", put(start_conditions))
        .route("/game_state", get(game_state))
        .with_state(state)
}
