//! Single-statement data access, one module per table.
//!
//! Every function takes the pool explicitly and returns `anyhow::Result`;
//! "not found" is expressed as `Option`/`bool` so the handlers decide the
//! HTTP mapping.

use anyhow::{anyhow, Result};
use sqlx::{Pool, Sqlite};

mod coach;
mod matches;
mod media;
mod news;
mod player;
mod team;

pub use coach::*;
pub use matches::*;
pub use media::*;
pub use news::*;
pub use player::*;
pub use team::*;

/// Hard delete by primary key. Returns whether a row was removed.
async fn delete_by_id(db: &Pool<Sqlite>, table: &'static str, id: &str) -> Result<bool> {
    let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = ?1"))
        .bind(id)
        .execute(db)
        .await
        .map_err(|e| anyhow!("Unable to delete from {}: {}", table, e))?;

    Ok(result.rows_affected() > 0)
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
