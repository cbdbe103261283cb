use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    crud::{crud_create_match, crud_delete_match, crud_get_match, crud_get_matches, crud_update_match},
    error::AppError,
    schema::{MatchPayload, MatchSchema},
    AppState,
};

pub async fn get_matches_handler(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let matches = crud_get_matches(data.db.pool()).await?;
    let matches: Result<Vec<MatchSchema>> = matches.iter().map(|m| m.try_into()).collect();

    match matches {
        Ok(res) => Ok(Json(res)),
        Err(e) => Err(AppError::from(anyhow!("Unable to parse matches: {}", e))),
    }
}

pub async fn get_match_by_id_handler(
    Path(match_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let m = crud_get_match(data.db.pool(), &match_id)
        .await?
        .ok_or_else(|| AppError::not_found("Match", &match_id))?;

    Ok(Json(MatchSchema::try_from(&m)?))
}

pub async fn create_match_handler(
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<MatchPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    let m = crud_create_match(data.db.pool(), &input).await?;
    tracing::info!(match_id = %m.id, opponent = %m.opponent, "match created");

    Ok((StatusCode::CREATED, Json(MatchSchema::try_from(&m)?)))
}

pub async fn update_match_handler(
    Path(match_id): Path<String>,
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<MatchPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    let m = crud_update_match(data.db.pool(), &match_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Match", &match_id))?;
    tracing::info!(match_id = %m.id, status = %m.status, "match updated");

    Ok(Json(MatchSchema::try_from(&m)?))
}

pub async fn delete_match_handler(
    Path(match_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    if !crud_delete_match(data.db.pool(), &match_id).await? {
        return Err(AppError::not_found("Match", &match_id));
    }
    tracing::info!(%match_id, "match deleted");

    Ok(StatusCode::NO_CONTENT)
}
