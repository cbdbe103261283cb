use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use super::{delete_by_id, new_id};
use crate::{model::MediaModel, schema::MediaInput};

const MEDIA_COLUMNS: &str = "id, title, description, file_url, type, created_at";

pub async fn crud_get_media(db: &Pool<Sqlite>) -> Result<Vec<MediaModel>> {
    let query = format!("SELECT {MEDIA_COLUMNS} FROM media ORDER BY rowid");
    let media: Vec<MediaModel> = sqlx::query_as(&query)
        .fetch_all(db)
        .await
        .map_err(|e| anyhow!("Unable to query media from db: {}", e))?;

    Ok(media)
}

pub async fn crud_get_media_item(db: &Pool<Sqlite>, id: &str) -> Result<Option<MediaModel>> {
    let query = format!("SELECT {MEDIA_COLUMNS} FROM media WHERE id = ?1");
    let item: Option<MediaModel> = sqlx::query_as(&query)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to query media item from db: {}", e))?;

    Ok(item)
}

pub async fn crud_create_media(db: &Pool<Sqlite>, media: &MediaInput) -> Result<MediaModel> {
    let query = format!(
        r#"
        INSERT INTO media ({MEDIA_COLUMNS})
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING {MEDIA_COLUMNS}
        "#
    );

    let m: MediaModel = sqlx::query_as(&query)
        .bind(new_id())
        .bind(&media.title)
        .bind(&media.description)
        .bind(&media.file_url)
        .bind(media.media_type.as_str())
        .bind(Utc::now())
        .fetch_one(db)
        .await
        .map_err(|e| anyhow!("Unable to insert media: {}", e))?;

    Ok(m)
}

pub async fn crud_update_media(
    db: &Pool<Sqlite>,
    id: &str,
    media: &MediaInput,
) -> Result<Option<MediaModel>> {
    let query = format!(
        r#"
        UPDATE media SET title = ?2, description = ?3, file_url = ?4, type = ?5
        WHERE id = ?1
        RETURNING {MEDIA_COLUMNS}
        "#
    );

    let m: Option<MediaModel> = sqlx::query_as(&query)
        .bind(id)
        .bind(&media.title)
        .bind(&media.description)
        .bind(&media.file_url)
        .bind(media.media_type.as_str())
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to update media: {}", e))?;

    Ok(m)
}

pub async fn crud_delete_media(db: &Pool<Sqlite>, id: &str) -> Result<bool> {
    delete_by_id(db, "media", id).await
}
