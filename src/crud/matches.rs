use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use super::{delete_by_id, new_id};
use crate::{
    model::MatchModel,
    schema::{encode_column, MatchInput},
};

const MATCH_COLUMNS: &str = "\
    id, date, time, opponent, venue, competition, status, score, stats, highlights, \
    created_at, updated_at";

pub async fn crud_get_matches(db: &Pool<Sqlite>) -> Result<Vec<MatchModel>> {
    let query = format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY rowid");
    let matches: Vec<MatchModel> = sqlx::query_as(&query)
        .fetch_all(db)
        .await
        .map_err(|e| anyhow!("Unable to query matches from db: {}", e))?;

    Ok(matches)
}

pub async fn crud_get_match(db: &Pool<Sqlite>, id: &str) -> Result<Option<MatchModel>> {
    let query = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?1");
    let match_model: Option<MatchModel> = sqlx::query_as(&query)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to query match from db: {}", e))?;

    Ok(match_model)
}

pub async fn crud_create_match(db: &Pool<Sqlite>, m: &MatchInput) -> Result<MatchModel> {
    let score = m.score.as_ref().map(encode_column).transpose()?;
    let query = format!(
        r#"
        INSERT INTO matches ({MATCH_COLUMNS})
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
        RETURNING {MATCH_COLUMNS}
        "#
    );

    let created: MatchModel = sqlx::query_as(&query)
        .bind(new_id())
        .bind(&m.date)
        .bind(&m.time)
        .bind(&m.opponent)
        .bind(&m.venue)
        .bind(&m.competition)
        .bind(m.status.as_str())
        .bind(score)
        .bind(encode_column(&m.stats)?)
        .bind(encode_column(&m.highlights)?)
        .bind(Utc::now())
        .fetch_one(db)
        .await
        .map_err(|e| anyhow!("Unable to insert match: {}", e))?;

    Ok(created)
}

pub async fn crud_update_match(
    db: &Pool<Sqlite>,
    id: &str,
    m: &MatchInput,
) -> Result<Option<MatchModel>> {
    let score = m.score.as_ref().map(encode_column).transpose()?;
    let query = format!(
        r#"
        UPDATE matches SET
            date = ?2, time = ?3, opponent = ?4, venue = ?5, competition = ?6,
            status = ?7, score = ?8, stats = ?9, highlights = ?10, updated_at = ?11
        WHERE id = ?1
        RETURNING {MATCH_COLUMNS}
        "#
    );

    let updated: Option<MatchModel> = sqlx::query_as(&query)
        .bind(id)
        .bind(&m.date)
        .bind(&m.time)
        .bind(&m.opponent)
        .bind(&m.venue)
        .bind(&m.competition)
        .bind(m.status.as_str())
        .bind(score)
        .bind(encode_column(&m.stats)?)
        .bind(encode_column(&m.highlights)?)
        .bind(Utc::now())
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to update match: {}", e))?;

    Ok(updated)
}

pub async fn crud_delete_match(db: &Pool<Sqlite>, id: &str) -> Result<bool> {
    delete_by_id(db, "matches", id).await
}
