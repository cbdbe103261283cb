use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::{query::QueryAs, sqlite::SqliteArguments, Executor, Pool, Sqlite};

use super::{delete_by_id, new_id};
use crate::{
    model::TeamModel,
    schema::{encode_column, TeamInput},
};

const TEAM_COLUMNS: &str = "\
    id, name, short_name, logo, background_image, primary_color, secondary_color, \
    description, coach, founded_year, stadium, address, city, country, website, \
    achievements, social_links, stats, created_at";

/// Bind the mutable columns as `?2..?18`, in `TEAM_COLUMNS` order.
fn bind_team<'q>(
    query: QueryAs<'q, Sqlite, TeamModel, SqliteArguments<'q>>,
    team: &TeamInput,
) -> Result<QueryAs<'q, Sqlite, TeamModel, SqliteArguments<'q>>> {
    Ok(query
        .bind(team.name.clone())
        .bind(team.short_name.clone())
        .bind(team.logo.clone())
        .bind(team.background_image.clone())
        .bind(team.primary_color.clone())
        .bind(team.secondary_color.clone())
        .bind(team.description.clone())
        .bind(team.coach.clone())
        .bind(team.founded_year)
        .bind(team.stadium.clone())
        .bind(team.address.clone())
        .bind(team.city.clone())
        .bind(team.country.clone())
        .bind(team.website.clone())
        .bind(encode_column(&team.achievements)?)
        .bind(encode_column(&team.social_links)?)
        .bind(encode_column(&team.stats)?))
}

pub async fn crud_get_teams(db: &Pool<Sqlite>) -> Result<Vec<TeamModel>> {
    let query = format!("SELECT {TEAM_COLUMNS} FROM teams ORDER BY rowid");
    let teams: Vec<TeamModel> = sqlx::query_as(&query)
        .fetch_all(db)
        .await
        .map_err(|e| anyhow!("Unable to query teams from db: {}", e))?;

    Ok(teams)
}

pub async fn crud_get_team(db: &Pool<Sqlite>, id: &str) -> Result<Option<TeamModel>> {
    let query = format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?1");
    let team: Option<TeamModel> = sqlx::query_as(&query)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to query team from db: {}", e))?;

    Ok(team)
}

pub async fn crud_count_teams<'e, E>(db: E) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teams")
        .fetch_one(db)
        .await
        .map_err(|e| anyhow!("Unable to count teams: {}", e))?;

    Ok(count)
}

pub async fn crud_create_team<'e, E>(db: E, team: &TeamInput) -> Result<TeamModel>
where
    E: Executor<'e, Database = Sqlite>,
{
    let query = format!(
        r#"
        INSERT INTO teams ({TEAM_COLUMNS})
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)
        RETURNING {TEAM_COLUMNS}
        "#
    );

    let m: TeamModel = bind_team(sqlx::query_as(&query).bind(new_id()), team)?
        .bind(Utc::now())
        .fetch_one(db)
        .await
        .map_err(|e| anyhow!("Unable to insert team: {}", e))?;

    Ok(m)
}

/// Full replace of every mutable column. `None` when no team has `id`.
pub async fn crud_update_team(
    db: &Pool<Sqlite>,
    id: &str,
    team: &TeamInput,
) -> Result<Option<TeamModel>> {
    let query = format!(
        r#"
        UPDATE teams SET
            name = ?2, short_name = ?3, logo = ?4, background_image = ?5,
            primary_color = ?6, secondary_color = ?7, description = ?8, coach = ?9,
            founded_year = ?10, stadium = ?11, address = ?12, city = ?13, country = ?14,
            website = ?15, achievements = ?16, social_links = ?17, stats = ?18
        WHERE id = ?1
        RETURNING {TEAM_COLUMNS}
        "#
    );

    let m: Option<TeamModel> = bind_team(sqlx::query_as(&query).bind(id.to_string()), team)?
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to update team: {}", e))?;

    Ok(m)
}

pub async fn crud_delete_team(db: &Pool<Sqlite>, id: &str) -> Result<bool> {
    delete_by_id(db, "teams", id).await
}
