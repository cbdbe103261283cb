use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use super::ensure_team;
use crate::{
    crud::{
        crud_create_coach, crud_delete_coach, crud_get_coach, crud_get_coaches, crud_update_coach,
    },
    error::AppError,
    schema::{CoachPayload, CoachSchema},
    AppState,
};

pub async fn get_coaches_handler(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let coaches = crud_get_coaches(data.db.pool()).await?;
    let coaches: Vec<CoachSchema> = coaches.iter().map(CoachSchema::from).collect();

    Ok(Json(coaches))
}

pub async fn get_coach_handler(
    Path(coach_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let coach = crud_get_coach(data.db.pool(), &coach_id)
        .await?
        .ok_or_else(|| AppError::not_found("Coach", &coach_id))?;

    Ok(Json(CoachSchema::from(&coach)))
}

pub async fn create_coach_handler(
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<CoachPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    ensure_team(&data, input.team_id.as_deref()).await?;

    let coach = crud_create_coach(data.db.pool(), &input).await?;
    tracing::info!(coach_id = %coach.id, team_id = ?coach.team_id, "coach created");

    Ok((StatusCode::CREATED, Json(CoachSchema::from(&coach))))
}

pub async fn update_coach_handler(
    Path(coach_id): Path<String>,
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<CoachPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    ensure_team(&data, input.team_id.as_deref()).await?;

    let coach = crud_update_coach(data.db.pool(), &coach_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Coach", &coach_id))?;
    tracing::info!(coach_id = %coach.id, "coach updated");

    Ok(Json(CoachSchema::from(&coach)))
}

pub async fn delete_coach_handler(
    Path(coach_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    if !crud_delete_coach(data.db.pool(), &coach_id).await? {
        return Err(AppError::not_found("Coach", &coach_id));
    }
    tracing::info!(%coach_id, "coach deleted");

    Ok(StatusCode::NO_CONTENT)
}
