use std::collections::BTreeMap;

use anyhow::{anyhow, Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{clean, decode_column, missing_fields, non_negative};
use crate::{error::AppError, model::MatchModel};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
        }
    }
}

impl TryFrom<&str> for MatchStatus {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "live" => Ok(MatchStatus::Live),
            "completed" => Ok(MatchStatus::Completed),
            "cancelled" => Ok(MatchStatus::Cancelled),
            _ => Err(anyhow!("Invalid status: {}", s)),
        }
    }
}

impl TryFrom<String> for MatchStatus {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        MatchStatus::try_from(s.as_str())
    }
}

/// Final or running score. Only meaningful once a match is live or completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: i64,
    pub away: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchStats {
    /// Percentage of ball possession, 0..=100.
    pub possession: i64,
    pub shots: i64,
    pub shots_on_target: i64,
    pub corners: i64,
    pub fouls: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
    /// Free-form counters beyond the known set.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPayload {
    pub date: Option<String>,
    #[serde(alias = "startTime")]
    pub time: Option<String>,
    pub opponent: Option<String>,
    #[serde(alias = "location")]
    pub venue: Option<String>,
    pub competition: Option<String>,
    pub status: Option<MatchStatus>,
    pub score: Option<Score>,
    pub stats: Option<MatchStats>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Clone, Debug)]
pub struct MatchInput {
    pub date: String,
    pub time: Option<String>,
    pub opponent: String,
    pub venue: Option<String>,
    pub competition: Option<String>,
    pub status: MatchStatus,
    pub score: Option<Score>,
    pub stats: MatchStats,
    pub highlights: Vec<String>,
}

impl MatchPayload {
    pub fn validate(self) -> Result<MatchInput, AppError> {
        let (date, opponent) = match (clean(self.date), clean(self.opponent)) {
            (Some(date), Some(opponent)) => (date, opponent),
            (date, opponent) => {
                return Err(missing_fields(&[
                    ("date", date.is_none()),
                    ("opponent", opponent.is_none()),
                ]))
            }
        };

        if let Some(score) = self.score {
            non_negative("score.home", Some(score.home))?;
            non_negative("score.away", Some(score.away))?;
        }

        let stats = self.stats.unwrap_or_default();
        if !(0..=100).contains(&stats.possession) {
            return Err(AppError::Validation(
                "stats.possession must be between 0 and 100".to_string(),
            ));
        }

        Ok(MatchInput {
            date,
            time: clean(self.time),
            opponent,
            venue: clean(self.venue),
            competition: clean(self.competition),
            status: self.status.unwrap_or_default(),
            score: self.score,
            stats,
            highlights: self.highlights.unwrap_or_default(),
        })
    }
}

// For json response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSchema {
    pub id: String,
    pub date: String,
    pub time: Option<String>,
    pub opponent: String,
    pub venue: Option<String>,
    pub competition: Option<String>,
    pub status: MatchStatus,
    pub score: Option<Score>,
    #[serde(default)]
    pub stats: MatchStats,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<&MatchModel> for MatchSchema {
    type Error = Error;

    fn try_from(m: &MatchModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id.clone(),
            date: m.date.clone(),
            time: m.time.clone(),
            opponent: m.opponent.clone(),
            venue: m.venue.clone(),
            competition: m.competition.clone(),
            status: MatchStatus::try_from(m.status.as_str())?,
            score: decode_column(m.score.as_deref(), "matches.score"),
            stats: decode_column(m.stats.as_deref(), "matches.stats"),
            highlights: decode_column(m.highlights.as_deref(), "matches.highlights"),
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn legacy_field_names_are_accepted() {
        let payload: MatchPayload = serde_json::from_value(json!({
            "date": "2024-05-01",
            "startTime": "18:30",
            "opponent": "Spartak",
            "location": "Central Stadium"
        }))
        .unwrap();
        let input = payload.validate().unwrap();
        assert_eq!(input.time.as_deref(), Some("18:30"));
        assert_eq!(input.venue.as_deref(), Some("Central Stadium"));
        assert_eq!(input.status, MatchStatus::Scheduled);
    }

    #[test]
    fn possession_out_of_range_is_rejected() {
        let payload: MatchPayload = serde_json::from_value(json!({
            "date": "2024-05-01",
            "opponent": "Spartak",
            "stats": { "possession": 130 }
        }))
        .unwrap();
        assert_matches!(payload.validate(), Err(AppError::Validation(_)));
    }

    #[test]
    fn unknown_status_fails_deserialization() {
        let result: Result<MatchPayload, _> = serde_json::from_value(json!({
            "date": "2024-05-01",
            "opponent": "Spartak",
            "status": "postponed"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn extra_stats_survive_a_round_trip() {
        let stats: MatchStats = serde_json::from_value(json!({
            "possession": 55,
            "offsides": 4
        }))
        .unwrap();
        assert_eq!(stats.extra.get("offsides"), Some(&json!(4)));

        let encoded = serde_json::to_value(&stats).unwrap();
        assert_eq!(encoded["offsides"], json!(4));
        assert_eq!(encoded["shotsOnTarget"], json!(0));
    }
}
