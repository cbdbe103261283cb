use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{clean, missing_fields, non_negative};
use crate::{error::AppError, model::CoachModel};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CoachPayload {
    pub name: Option<String>,
    pub team_id: Option<String>,
    pub photo: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    /// Years of coaching experience.
    pub experience: Option<i64>,
    pub achievements: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CoachInput {
    pub name: String,
    pub team_id: Option<String>,
    pub photo: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    pub experience: Option<i64>,
    pub achievements: Option<String>,
}

impl CoachPayload {
    pub fn validate(self) -> Result<CoachInput, AppError> {
        let Some(name) = clean(self.name) else {
            return Err(missing_fields(&[("name", true)]));
        };

        Ok(CoachInput {
            name,
            team_id: clean(self.team_id),
            photo: clean(self.photo),
            nationality: clean(self.nationality),
            age: non_negative("age", self.age)?,
            experience: non_negative("experience", self.experience)?,
            achievements: clean(self.achievements),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoachSchema {
    pub id: String,
    pub name: String,
    pub team_id: Option<String>,
    pub photo: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    pub experience: Option<i64>,
    pub achievements: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&CoachModel> for CoachSchema {
    fn from(c: &CoachModel) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            team_id: c.team_id.clone(),
            photo: c.photo.clone(),
            nationality: c.nationality.clone(),
            age: c.age,
            experience: c.experience,
            achievements: c.achievements.clone(),
            created_at: c.created_at,
        }
    }
}
