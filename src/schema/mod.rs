//! Wire shapes: request payloads with their validation, and the JSON
//! representations returned by the API.

use anyhow::anyhow;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::AppError;

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

/// Query string accepted by `GET /api/players`.
#[derive(Deserialize, Debug, Default)]
pub struct PlayerFilter {
    #[serde(alias = "teamId")]
    pub team_id: Option<String>,
}

impl PlayerFilter {
    /// The filter value, treating a blank parameter as no filter.
    pub fn team_id(&self) -> Option<&str> {
        self.team_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Trimmed text, with blank strings treated as absent.
pub(crate) fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub(crate) fn missing_fields(checks: &[(&str, bool)]) -> AppError {
    let missing: Vec<&str> = checks
        .iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(field, _)| *field)
        .collect();
    AppError::Validation(format!("Missing required fields: {}", missing.join(", ")))
}

pub(crate) fn non_negative(field: &str, value: Option<i64>) -> Result<Option<i64>, AppError> {
    match value {
        Some(v) if v < 0 => Err(AppError::Validation(format!(
            "{field} must not be negative"
        ))),
        other => Ok(other),
    }
}

/// Decode a composite column. Missing, blank or malformed text yields the
/// default value rather than an error.
pub(crate) fn decode_column<T>(raw: Option<&str>, column: &'static str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(column, error = %err, "malformed composite column, using default");
            T::default()
        }
    }
}

pub(crate) fn encode_column<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string(value).map_err(|e| anyhow!("Unable to encode column: {}", e))
}
