use anyhow::{anyhow, Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{clean, decode_column, missing_fields, non_negative};
use crate::{error::AppError, model::PlayerModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "goalkeeper",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goalkeeper" => Ok(Position::Goalkeeper),
            "defender" => Ok(Position::Defender),
            "midfielder" => Ok(Position::Midfielder),
            "forward" => Ok(Position::Forward),
            _ => Err(anyhow!("Invalid position: {}", s)),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Position::try_from(s.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    #[serde(alias = "appearances")]
    pub games: i64,
    pub goals: i64,
    pub assists: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
}

/// Body of `POST /api/players` and `PUT /api/players/:id`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerPayload {
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub name: Option<String>,
    pub position: Option<Position>,
    pub number: Option<i64>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub photo: Option<String>,
    pub stats: Option<PlayerStats>,
}

#[derive(Clone, Debug)]
pub struct PlayerInput {
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub name: String,
    pub position: Position,
    pub number: Option<i64>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub photo: Option<String>,
    pub stats: PlayerStats,
}

impl PlayerPayload {
    pub fn validate(self) -> Result<PlayerInput, AppError> {
        let (name, position) = match (clean(self.name), self.position) {
            (Some(name), Some(position)) => (name, position),
            (name, position) => {
                return Err(missing_fields(&[
                    ("name", name.is_none()),
                    ("position", position.is_none()),
                ]))
            }
        };

        Ok(PlayerInput {
            team_id: clean(self.team_id),
            team_name: clean(self.team_name),
            name,
            position,
            number: non_negative("number", self.number)?,
            nationality: clean(self.nationality),
            age: non_negative("age", self.age)?,
            height: non_negative("height", self.height)?,
            weight: non_negative("weight", self.weight)?,
            photo: clean(self.photo),
            stats: self.stats.unwrap_or_default(),
        })
    }
}

// For json response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSchema {
    pub id: String,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub name: String,
    pub position: Position,
    pub number: Option<i64>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub photo: Option<String>,
    #[serde(default)]
    pub stats: PlayerStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<&PlayerModel> for PlayerSchema {
    type Error = Error;

    fn try_from(p: &PlayerModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: p.id.clone(),
            team_id: p.team_id.clone(),
            team_name: p.team_name.clone(),
            name: p.name.clone(),
            position: Position::try_from(p.position.as_str())?,
            number: p.number,
            nationality: p.nationality.clone(),
            age: p.age,
            height: p.height,
            weight: p.weight,
            photo: p.photo.clone(),
            stats: decode_column(p.stats.as_deref(), "players.stats"),
            created_at: p.created_at,
            updated_at: p.updated_at,
        })
    }
}
