use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use super::{delete_by_id, new_id};
use crate::{model::CoachModel, schema::CoachInput};

const COACH_COLUMNS: &str =
    "id, name, team_id, photo, nationality, age, experience, achievements, created_at";

pub async fn crud_get_coaches(db: &Pool<Sqlite>) -> Result<Vec<CoachModel>> {
    let query = format!("SELECT {COACH_COLUMNS} FROM coaches ORDER BY rowid");
    let coaches: Vec<CoachModel> = sqlx::query_as(&query)
        .fetch_all(db)
        .await
        .map_err(|e| anyhow!("Unable to query coaches from db: {}", e))?;

    Ok(coaches)
}

pub async fn crud_get_coach(db: &Pool<Sqlite>, id: &str) -> Result<Option<CoachModel>> {
    let query = format!("SELECT {COACH_COLUMNS} FROM coaches WHERE id = ?1");
    let coach: Option<CoachModel> = sqlx::query_as(&query)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to query coach from db: {}", e))?;

    Ok(coach)
}

pub async fn crud_create_coach(db: &Pool<Sqlite>, coach: &CoachInput) -> Result<CoachModel> {
    let query = format!(
        r#"
        INSERT INTO coaches ({COACH_COLUMNS})
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        RETURNING {COACH_COLUMNS}
        "#
    );

    let m: CoachModel = sqlx::query_as(&query)
        .bind(new_id())
        .bind(&coach.name)
        .bind(&coach.team_id)
        .bind(&coach.photo)
        .bind(&coach.nationality)
        .bind(coach.age)
        .bind(coach.experience)
        .bind(&coach.achievements)
        .bind(Utc::now())
        .fetch_one(db)
        .await
        .map_err(|e| anyhow!("Unable to insert coach: {}", e))?;

    Ok(m)
}

pub async fn crud_update_coach(
    db: &Pool<Sqlite>,
    id: &str,
    coach: &CoachInput,
) -> Result<Option<CoachModel>> {
    let query = format!(
        r#"
        UPDATE coaches SET
            name = ?2, team_id = ?3, photo = ?4, nationality = ?5,
            age = ?6, experience = ?7, achievements = ?8
        WHERE id = ?1
        RETURNING {COACH_COLUMNS}
        "#
    );

    let m: Option<CoachModel> = sqlx::query_as(&query)
        .bind(id)
        .bind(&coach.name)
        .bind(&coach.team_id)
        .bind(&coach.photo)
        .bind(&coach.nationality)
        .bind(coach.age)
        .bind(coach.experience)
        .bind(&coach.achievements)
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to update coach: {}", e))?;

    Ok(m)
}

pub async fn crud_delete_coach(db: &Pool<Sqlite>, id: &str) -> Result<bool> {
    delete_by_id(db, "coaches", id).await
}
