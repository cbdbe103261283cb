use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    crud::{crud_create_team, crud_delete_team, crud_get_team, crud_get_teams, crud_update_team},
    error::AppError,
    schema::{TeamPayload, TeamSchema},
    AppState,
};

pub async fn get_teams_handler(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let teams = crud_get_teams(data.db.pool()).await?;
    let teams: Vec<TeamSchema> = teams.iter().map(TeamSchema::from).collect();

    Ok(Json(teams))
}

pub async fn get_team_handler(
    Path(team_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let team = crud_get_team(data.db.pool(), &team_id)
        .await?
        .ok_or_else(|| AppError::not_found("Team", &team_id))?;

    Ok(Json(TeamSchema::from(&team)))
}

pub async fn create_team_handler(
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<TeamPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    let team = crud_create_team(data.db.pool(), &input).await?;
    tracing::info!(team_id = %team.id, name = %team.name, "team created");

    Ok((StatusCode::CREATED, Json(TeamSchema::from(&team))))
}

pub async fn update_team_handler(
    Path(team_id): Path<String>,
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<TeamPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    let team = crud_update_team(data.db.pool(), &team_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Team", &team_id))?;
    tracing::info!(team_id = %team.id, "team updated");

    Ok(Json(TeamSchema::from(&team)))
}

pub async fn delete_team_handler(
    Path(team_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    if !crud_delete_team(data.db.pool(), &team_id).await? {
        return Err(AppError::not_found("Team", &team_id));
    }
    tracing::info!(%team_id, "team deleted");

    Ok(StatusCode::NO_CONTENT)
}
