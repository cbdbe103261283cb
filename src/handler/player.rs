use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use super::ensure_team;
use crate::{
    crud::{
        crud_create_player, crud_delete_player, crud_get_player, crud_get_players,
        crud_update_player,
    },
    error::AppError,
    schema::{PlayerFilter, PlayerInput, PlayerPayload, PlayerSchema},
    AppState,
};

/// Validate the body and apply the team reference rule. The referenced
/// team's name fills in a missing `team_name`.
async fn prepare_player(data: &AppState, payload: PlayerPayload) -> Result<PlayerInput, AppError> {
    let mut input = payload.validate()?;
    if let Some(team) = ensure_team(data, input.team_id.as_deref()).await? {
        if input.team_name.is_none() {
            input.team_name = Some(team.name);
        }
    }
    Ok(input)
}

pub async fn get_players_handler(
    WithRejection(Query(opts), _): WithRejection<Query<PlayerFilter>, AppError>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let players = crud_get_players(data.db.pool(), opts.team_id()).await?;
    tracing::debug!(team_id = ?opts.team_id(), count = players.len(), "listed players");
    let players: Result<Vec<PlayerSchema>> = players.iter().map(PlayerSchema::try_from).collect();

    Ok(Json(players?))
}

pub async fn get_player_handler(
    Path(player_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let player = crud_get_player(data.db.pool(), &player_id)
        .await?
        .ok_or_else(|| AppError::not_found("Player", &player_id))?;

    Ok(Json(PlayerSchema::try_from(&player)?))
}

pub async fn create_player_handler(
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<PlayerPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = prepare_player(&data, payload).await?;
    let player = crud_create_player(data.db.pool(), &input).await?;
    tracing::info!(player_id = %player.id, team_id = ?player.team_id, "player created");

    Ok((StatusCode::CREATED, Json(PlayerSchema::try_from(&player)?)))
}

pub async fn update_player_handler(
    Path(player_id): Path<String>,
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<PlayerPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = prepare_player(&data, payload).await?;
    let player = crud_update_player(data.db.pool(), &player_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Player", &player_id))?;
    tracing::info!(player_id = %player.id, "player updated");

    Ok(Json(PlayerSchema::try_from(&player)?))
}

pub async fn delete_player_handler(
    Path(player_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    if !crud_delete_player(data.db.pool(), &player_id).await? {
        return Err(AppError::not_found("Player", &player_id));
    }
    tracing::info!(%player_id, "player deleted");

    Ok(StatusCode::NO_CONTENT)
}
