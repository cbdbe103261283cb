use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{clean, decode_column, missing_fields};
use crate::{error::AppError, model::TeamModel};

pub const DEFAULT_PRIMARY_COLOR: &str = "#000000";
pub const DEFAULT_SECONDARY_COLOR: &str = "#ffffff";

/// Platform name to profile URL.
pub type SocialLinks = BTreeMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    pub matches: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
}

/// Body of `POST /api/teams` and `PUT /api/teams/:id`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayload {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub logo: Option<String>,
    pub background_image: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub description: Option<String>,
    pub coach: Option<String>,
    #[serde(alias = "founded")]
    pub founded_year: Option<i64>,
    pub stadium: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub social_links: Option<SocialLinks>,
    pub stats: Option<TeamStats>,
}

/// A team payload that passed validation, with defaults applied.
#[derive(Clone, Debug)]
pub struct TeamInput {
    pub name: String,
    pub short_name: String,
    pub logo: Option<String>,
    pub background_image: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub description: Option<String>,
    pub coach: Option<String>,
    pub founded_year: Option<i64>,
    pub stadium: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub achievements: Vec<String>,
    pub social_links: SocialLinks,
    pub stats: TeamStats,
}

impl TeamPayload {
    pub fn validate(self) -> Result<TeamInput, AppError> {
        let (name, short_name) = match (clean(self.name), clean(self.short_name)) {
            (Some(name), Some(short_name)) => (name, short_name),
            (name, short_name) => {
                return Err(missing_fields(&[
                    ("name", name.is_none()),
                    ("shortName", short_name.is_none()),
                ]))
            }
        };

        if let Some(year) = self.founded_year {
            if !(1800..=2200).contains(&year) {
                return Err(AppError::Validation(format!(
                    "foundedYear {year} is out of range"
                )));
            }
        }

        Ok(TeamInput {
            name,
            short_name,
            logo: clean(self.logo),
            background_image: clean(self.background_image),
            primary_color: clean(self.primary_color)
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: clean(self.secondary_color)
                .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
            description: clean(self.description),
            coach: clean(self.coach),
            founded_year: self.founded_year,
            stadium: clean(self.stadium),
            address: clean(self.address),
            city: clean(self.city),
            country: clean(self.country),
            website: clean(self.website),
            achievements: self.achievements.unwrap_or_default(),
            social_links: self.social_links.unwrap_or_default(),
            stats: self.stats.unwrap_or_default(),
        })
    }
}

// For json response
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSchema {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub logo: Option<String>,
    pub background_image: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub description: Option<String>,
    pub coach: Option<String>,
    pub founded_year: Option<i64>,
    pub stadium: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub stats: TeamStats,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl From<&TeamModel> for TeamSchema {
    fn from(t: &TeamModel) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            short_name: t.short_name.clone(),
            logo: t.logo.clone(),
            background_image: t.background_image.clone(),
            primary_color: t.primary_color.clone(),
            secondary_color: t.secondary_color.clone(),
            description: t.description.clone(),
            coach: t.coach.clone(),
            founded_year: t.founded_year,
            stadium: t.stadium.clone(),
            address: t.address.clone(),
            city: t.city.clone(),
            country: t.country.clone(),
            website: t.website.clone(),
            achievements: decode_column(t.achievements.as_deref(), "teams.achievements"),
            social_links: decode_column(t.social_links.as_deref(), "teams.social_links"),
            stats: decode_column(t.stats.as_deref(), "teams.stats"),
            created_at: t.created_at,
        }
    }
}
