use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use super::{delete_by_id, new_id};
use crate::{
    model::NewsModel,
    schema::{encode_column, NewsInput},
};

const NEWS_COLUMNS: &str =
    "id, title, content, image, date, author, category, tags, created_at";

pub async fn crud_get_news(db: &Pool<Sqlite>) -> Result<Vec<NewsModel>> {
    let query = format!("SELECT {NEWS_COLUMNS} FROM news ORDER BY rowid");
    let news: Vec<NewsModel> = sqlx::query_as(&query)
        .fetch_all(db)
        .await
        .map_err(|e| anyhow!("Unable to query news from db: {}", e))?;

    Ok(news)
}

pub async fn crud_get_news_item(db: &Pool<Sqlite>, id: &str) -> Result<Option<NewsModel>> {
    let query = format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = ?1");
    let item: Option<NewsModel> = sqlx::query_as(&query)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to query news item from db: {}", e))?;

    Ok(item)
}

pub async fn crud_create_news(db: &Pool<Sqlite>, news: &NewsInput) -> Result<NewsModel> {
    let now = Utc::now();
    let date = news.date.clone().unwrap_or_else(|| now.to_rfc3339());
    let query = format!(
        r#"
        INSERT INTO news ({NEWS_COLUMNS})
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        RETURNING {NEWS_COLUMNS}
        "#
    );

    let m: NewsModel = sqlx::query_as(&query)
        .bind(new_id())
        .bind(&news.title)
        .bind(&news.content)
        .bind(&news.image)
        .bind(date)
        .bind(&news.author)
        .bind(&news.category)
        .bind(encode_column(&news.tags)?)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|e| anyhow!("Unable to insert news: {}", e))?;

    Ok(m)
}

/// Full replace, except that an absent publish date keeps the stored one.
pub async fn crud_update_news(
    db: &Pool<Sqlite>,
    id: &str,
    news: &NewsInput,
) -> Result<Option<NewsModel>> {
    let query = format!(
        r#"
        UPDATE news SET
            title = ?2, content = ?3, image = ?4, date = COALESCE(?5, date),
            author = ?6, category = ?7, tags = ?8
        WHERE id = ?1
        RETURNING {NEWS_COLUMNS}
        "#
    );

    let m: Option<NewsModel> = sqlx::query_as(&query)
        .bind(id)
        .bind(&news.title)
        .bind(&news.content)
        .bind(&news.image)
        .bind(&news.date)
        .bind(&news.author)
        .bind(&news.category)
        .bind(encode_column(&news.tags)?)
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to update news: {}", e))?;

    Ok(m)
}

pub async fn crud_delete_news(db: &Pool<Sqlite>, id: &str) -> Result<bool> {
    delete_by_id(db, "news", id).await
}
