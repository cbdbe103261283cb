use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    crud::{
        crud_create_media, crud_delete_media, crud_get_media, crud_get_media_item,
        crud_update_media,
    },
    error::AppError,
    schema::{MediaPayload, MediaSchema},
    AppState,
};

pub async fn get_media_handler(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let media = crud_get_media(data.db.pool()).await?;
    let media: Result<Vec<MediaSchema>> = media.iter().map(MediaSchema::try_from).collect();

    Ok(Json(media?))
}

pub async fn get_media_item_handler(
    Path(media_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let item = crud_get_media_item(data.db.pool(), &media_id)
        .await?
        .ok_or_else(|| AppError::not_found("Media", &media_id))?;

    Ok(Json(MediaSchema::try_from(&item)?))
}

pub async fn create_media_handler(
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<MediaPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    let item = crud_create_media(data.db.pool(), &input).await?;
    tracing::info!(media_id = %item.id, kind = %item.media_type, "media created");

    Ok((StatusCode::CREATED, Json(MediaSchema::try_from(&item)?)))
}

pub async fn update_media_handler(
    Path(media_id): Path<String>,
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<MediaPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    let item = crud_update_media(data.db.pool(), &media_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Media", &media_id))?;
    tracing::info!(media_id = %item.id, "media updated");

    Ok(Json(MediaSchema::try_from(&item)?))
}

pub async fn delete_media_handler(
    Path(media_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    if !crud_delete_media(data.db.pool(), &media_id).await? {
        return Err(AppError::not_found("Media", &media_id));
    }
    tracing::info!(%media_id, "media deleted");

    Ok(StatusCode::NO_CONTENT)
}
