use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::{Acquire, Executor, Pool, Sqlite};

use super::{delete_by_id, new_id};
use crate::{
    model::PlayerModel,
    schema::{encode_column, PlayerInput},
};

// team_name follows the current team row when the team still exists.
const PLAYER_SELECT: &str = "\
    SELECT p.id, p.team_id, COALESCE(t.name, p.team_name) AS team_name, p.name, \
           p.position, p.number, p.nationality, p.age, p.height, p.weight, p.photo, \
           p.stats, p.created_at, p.updated_at \
    FROM players p LEFT JOIN teams t ON t.id = p.team_id";

/// Players in insertion order, optionally restricted to one team.
pub async fn crud_get_players(
    db: &Pool<Sqlite>,
    team_id: Option<&str>,
) -> Result<Vec<PlayerModel>> {
    let players: Vec<PlayerModel> = match team_id {
        Some(team_id) => {
            let query = format!("{PLAYER_SELECT} WHERE p.team_id = ?1 ORDER BY p.rowid");
            sqlx::query_as(&query).bind(team_id).fetch_all(db).await
        }
        None => {
            let query = format!("{PLAYER_SELECT} ORDER BY p.rowid");
            sqlx::query_as(&query).fetch_all(db).await
        }
    }
    .map_err(|e| anyhow!("Unable to query players from db: {}", e))?;

    Ok(players)
}

pub async fn crud_get_player<'e, E>(db: E, id: &str) -> Result<Option<PlayerModel>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let query = format!("{PLAYER_SELECT} WHERE p.id = ?1");
    let player: Option<PlayerModel> = sqlx::query_as(&query)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| anyhow!("Unable to query player from db: {}", e))?;

    Ok(player)
}

/// Insert and re-read on the same connection, so it also works inside a
/// transaction.
pub async fn crud_create_player<'a, A>(db: A, player: &PlayerInput) -> Result<PlayerModel>
where
    A: Acquire<'a, Database = Sqlite>,
{
    let mut conn = db.acquire().await?;
    let id = new_id();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO players (
            id, team_id, team_name, name, position, number, nationality,
            age, height, weight, photo, stats, created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)
        "#,
    )
    .bind(&id)
    .bind(&player.team_id)
    .bind(&player.team_name)
    .bind(&player.name)
    .bind(player.position.as_str())
    .bind(player.number)
    .bind(&player.nationality)
    .bind(player.age)
    .bind(player.height)
    .bind(player.weight)
    .bind(&player.photo)
    .bind(encode_column(&player.stats)?)
    .bind(now)
    .execute(&mut *conn)
    .await
    .map_err(|e| anyhow!("Unable to insert player: {}", e))?;

    crud_get_player(&mut *conn, &id)
        .await?
        .ok_or_else(|| anyhow!("Player {} missing right after insert", id))
}

/// Full replace of every mutable column. `None` when no player has `id`.
pub async fn crud_update_player(
    db: &Pool<Sqlite>,
    id: &str,
    player: &PlayerInput,
) -> Result<Option<PlayerModel>> {
    let result = sqlx::query(
        r#"
        UPDATE players SET
            team_id = ?2, team_name = ?3, name = ?4, position = ?5, number = ?6,
            nationality = ?7, age = ?8, height = ?9, weight = ?10, photo = ?11,
            stats = ?12, updated_at = ?13
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .bind(&player.team_id)
    .bind(&player.team_name)
    .bind(&player.name)
    .bind(player.position.as_str())
    .bind(player.number)
    .bind(&player.nationality)
    .bind(player.age)
    .bind(player.height)
    .bind(player.weight)
    .bind(&player.photo)
    .bind(encode_column(&player.stats)?)
    .bind(Utc::now())
    .execute(db)
    .await
    .map_err(|e| anyhow!("Unable to update player: {}", e))?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    crud_get_player(db, id).await
}

pub async fn crud_delete_player(db: &Pool<Sqlite>, id: &str) -> Result<bool> {
    delete_by_id(db, "players", id).await
}
