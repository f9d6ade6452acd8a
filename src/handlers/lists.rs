use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::database::dto::{
    AddGameToListData, GameListDto, GameMinDto, InsertGameListData, MembershipDto,
    ReplacementData,
};
use crate::error::AppResult;
use crate::state::AppState;

/// List all game lists (GET /lists).
pub async fn list_lists(State(state): State<AppState>) -> AppResult<Json<Vec<GameListDto>>> {
    Ok(Json(state.lists.find_all().await?))
}

/// Get a single game list (GET /lists/{id}).
pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GameListDto>> {
    Ok(Json(state.lists.find_by_id(id).await?))
}

/// Create a game list (POST /lists).
pub async fn create_list(
    State(state): State<AppState>,
    Json(payload): Json<InsertGameListData>,
) -> AppResult<impl IntoResponse> {
    let list = state.lists.create(payload).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// Delete a game list and its memberships (DELETE /lists/{id}).
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.lists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Games in a list, ordered by position (GET /lists/{list_id}/games).
pub async fn list_games_in_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> AppResult<Json<Vec<GameMinDto>>> {
    Ok(Json(state.games.find_by_list(list_id).await?))
}

/// Append a game to a list (POST /lists/{list_id}/games).
pub async fn add_game_to_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Json(payload): Json<AddGameToListData>,
) -> AppResult<impl IntoResponse> {
    let link = state.lists.add_game(list_id, payload.game_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Whether a game belongs to a list (GET /lists/{list_id}/games/{game_id}).
pub async fn check_membership(
    State(state): State<AppState>,
    Path((list_id, game_id)): Path<(i64, i64)>,
) -> AppResult<Json<MembershipDto>> {
    Ok(Json(state.lists.contains_game(list_id, game_id).await?))
}

/// Remove a game from a list (DELETE /lists/{list_id}/games/{game_id}).
pub async fn remove_game_from_list(
    State(state): State<AppState>,
    Path((list_id, game_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.lists.remove_game(list_id, game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move a game inside a list (POST /lists/{list_id}/replacement).
pub async fn move_game_in_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Json(payload): Json<ReplacementData>,
) -> AppResult<StatusCode> {
    state.lists.move_game(list_id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}
