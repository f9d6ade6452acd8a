use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::database::dto::{GameDto, GameMinDto, InsertGameData};
use crate::error::AppResult;
use crate::state::AppState;

/// List all games (GET /games).
pub async fn list_games(State(state): State<AppState>) -> AppResult<Json<Vec<GameMinDto>>> {
    Ok(Json(state.games.find_all().await?))
}

/// Get a single game (GET /games/{id}).
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GameDto>> {
    Ok(Json(state.games.find_by_id(id).await?))
}

/// Create a game (POST /games).
pub async fn create_game(
    State(state): State<AppState>,
    Json(payload): Json<InsertGameData>,
) -> AppResult<impl IntoResponse> {
    let game = state.games.create(payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// Delete a game and its list memberships (DELETE /games/{id}).
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.games.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
