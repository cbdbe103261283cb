use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    crud::{crud_create_news, crud_delete_news, crud_get_news, crud_get_news_item, crud_update_news},
    error::AppError,
    schema::{NewsPayload, NewsSchema},
    AppState,
};

pub async fn get_news_handler(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let news = crud_get_news(data.db.pool()).await?;
    let news: Vec<NewsSchema> = news.iter().map(NewsSchema::from).collect();

    Ok(Json(news))
}

pub async fn get_news_item_handler(
    Path(news_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let item = crud_get_news_item(data.db.pool(), &news_id)
        .await?
        .ok_or_else(|| AppError::not_found("News", &news_id))?;

    Ok(Json(NewsSchema::from(&item)))
}

pub async fn create_news_handler(
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<NewsPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    let item = crud_create_news(data.db.pool(), &input).await?;
    tracing::info!(news_id = %item.id, category = %item.category, "news created");

    Ok((StatusCode::CREATED, Json(NewsSchema::from(&item))))
}

pub async fn update_news_handler(
    Path(news_id): Path<String>,
    State(data): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<NewsPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let input = payload.validate()?;
    let item = crud_update_news(data.db.pool(), &news_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("News", &news_id))?;
    tracing::info!(news_id = %item.id, "news updated");

    Ok(Json(NewsSchema::from(&item)))
}

pub async fn delete_news_handler(
    Path(news_id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    if !crud_delete_news(data.db.pool(), &news_id).await? {
        return Err(AppError::not_found("News", &news_id));
    }
    tracing::info!(%news_id, "news deleted");

    Ok(StatusCode::NO_CONTENT)
}
