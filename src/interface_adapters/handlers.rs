use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use tracing::warn;

use crate::domain::entities::{Circle, PlayerLocation};
use crate::domain::errors::{LocationError, ScheduleError, StoreError};
use crate::domain::timestamp::{parse_interval, parse_timestamp};
use crate::interface_adapters::protocol::{
    ErrorResponse, GameStateParams, GameStateResponse, PlayerLocationRequest,
    PlayerLocationResponse, PlayerLocationsParams, StartConditionsParams, StartConditionsResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{
    BuildScheduleUseCase, CurrentCircleUseCase, GameStateUseCase, InsertPlayerLocationUseCase,
    ListPlayerLocationsUseCase,
};

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Liveness probe.
pub async fn root() -> &'static str {
    "ok"
}

// Handler for recording a player-reported location.
pub async fn insert_player_location(
    State(state): State<AppState>,
    Json(payload): Json<PlayerLocationRequest>,
) -> Result<(StatusCode, Json<PlayerLocationResponse>), HandlerError> {
    let use_case = InsertPlayerLocationUseCase {
        store: state.store.clone(),
    };

    use_case
        .execute(&payload.latitude, &payload.longitude)
        .await
        .map_err(map_location_error)?;

    Ok((
        StatusCode::CREATED,
        Json(PlayerLocationResponse { recorded: true }),
    ))
}

// Handler for listing every reported player location.
pub async fn list_player_locations(
    State(state): State<AppState>,
    Query(params): Query<PlayerLocationsParams>,
) -> Result<Json<Vec<PlayerLocation>>, HandlerError> {
    if params.token.trim().is_empty() {
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "token is required",
        ));
    }

    let use_case = ListPlayerLocationsUseCase {
        store: state.store.clone(),
    };
    let locations = use_case
        .execute(params.token.trim())
        .await
        .map_err(map_location_error)?;

    Ok(Json(locations))
}

// Handler for the active-circle query.
pub async fn current_circle(
    State(state): State<AppState>,
) -> Result<Json<Circle>, HandlerError> {
    let use_case = CurrentCircleUseCase {
        store: state.store.clone(),
        clock: state.clock.clone(),
    };

    let circle = use_case.execute().await.map_err(map_schedule_error)?;
    Ok(Json(circle))
}

// Handler for triggering a schedule rebuild.
pub async fn start_conditions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StartConditionsParams>,
) -> Result<Json<StartConditionsResponse>, HandlerError> {
    let token = bearer_token(&headers)?;

    // Caller-supplied inputs are validated here; anything past this point
    // that fails on a timestamp is store data, not caller error.
    let start_time = parse_timestamp(&params.start_time)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "invalid startTime"))?;
    let interval = parse_interval(&params.interval)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "invalid interval"))?;

    let use_case = BuildScheduleUseCase {
        store: state.store.clone(),
        rebuild_lock: state.rebuild_lock.clone(),
    };
    let summary = use_case
        .execute(&params.id, start_time, interval, &token)
        .await
        .map_err(map_schedule_error)?;

    Ok(Json(StartConditionsResponse {
        circles_scheduled: summary.circles_scheduled,
        game_start: summary.game_start,
        game_end: summary.game_end,
    }))
}

// Handler for the game phase query.
pub async fn game_state(
    State(state): State<AppState>,
    Query(params): Query<GameStateParams>,
) -> Result<Json<GameStateResponse>, HandlerError> {
    let use_case = GameStateUseCase {
        store: state.store.clone(),
        clock: state.clock.clone(),
    };

    let view = use_case
        .execute(&params.id)
        .await
        .map_err(map_schedule_error)?;

    Ok(Json(GameStateResponse {
        id: view.id,
        phase: view.phase,
        start: view.start,
        end: view.end,
    }))
}

// Pulls the bearer token from the Authorization header. The raw header
// value without the prefix is accepted too; the store decides whether the
// credential is any good.
fn bearer_token(headers: &HeaderMap) -> Result<String, HandlerError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

    if token.is_empty() {
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "missing Authorization header",
        ));
    }
    Ok(token.to_string())
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Maps schedule/query errors to HTTP responses. "Not found" outcomes stay
// distinguishable from failures; nothing is masked as an empty value.
fn map_schedule_error(err: ScheduleError) -> HandlerError {
    match err {
        ScheduleError::NoActiveCircle => {
            error_response(StatusCode::NOT_FOUND, "no active circle")
        }
        ScheduleError::NotScheduled { id } => error_response(
            StatusCode::NOT_FOUND,
            &format!("game {id} has no schedule"),
        ),
        ScheduleError::EmptyInput => error_response(
            StatusCode::CONFLICT,
            "no circles available to schedule",
        ),
        ScheduleError::InvalidInterval { .. } => {
            error_response(StatusCode::BAD_REQUEST, "invalid interval")
        }
        ScheduleError::TimestampParse { .. } => {
            warn!(error = %err, "stored timestamp rejected");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "stored schedule is corrupt")
        }
        ScheduleError::InconsistentSchedule { .. } => {
            warn!(error = %err, "stored schedule rejected");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "stored schedule is inconsistent; rebuild required",
            )
        }
        ScheduleError::Store(store_err) => map_store_error(store_err),
    }
}

fn map_location_error(err: LocationError) -> HandlerError {
    match err {
        LocationError::InvalidCoordinate { field, .. } => error_response(
            StatusCode::BAD_REQUEST,
            &format!("invalid {field}"),
        ),
        LocationError::Store(store_err) => map_store_error(store_err),
    }
}

fn map_store_error(err: StoreError) -> HandlerError {
    match err {
        StoreError::NotFound { ref id, .. } => {
            let message = format!("record {id} not found");
            error_response(StatusCode::NOT_FOUND, &message)
        }
        StoreError::Failed { .. } => {
            warn!(error = %err, "record store failure");
            error_response(StatusCode::BAD_GATEWAY, "record store failure")
        }
    }
}
