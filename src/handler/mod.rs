use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::{crud::crud_get_team, error::AppError, model::TeamModel, AppState};

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

pub async fn health_handler(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    data.db.ping().await?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

/// Look up the team a player or coach points at.
///
/// Returns `Ok(None)` when there is no reference or the check is disabled,
/// and `AppError::Reference` when the referenced team does not exist.
async fn ensure_team(
    data: &AppState,
    team_id: Option<&str>,
) -> Result<Option<TeamModel>, AppError> {
    let Some(team_id) = team_id else {
        return Ok(None);
    };
    if !data.enforce_team_refs {
        return Ok(None);
    }

    match crud_get_team(data.db.pool(), team_id).await? {
        Some(team) => Ok(Some(team)),
        None => {
            tracing::warn!(team_id, "rejected write referencing unknown team");
            Err(AppError::Reference("Team not found".to_string()))
        }
    }
}
