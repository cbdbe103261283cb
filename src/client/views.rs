//! UI-facing shapes. Optional text becomes `""`, optional numbers become `0`
//! and every key is camelCase, so a front-end never has to null-check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{
    CoachSchema, MatchSchema, MatchStats, MatchStatus, MediaSchema, MediaType, NewsSchema,
    PlayerSchema, PlayerStats, Position, Score, SocialLinks, TeamSchema, TeamStats,
    DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamView {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub logo: String,
    pub background_image: String,
    pub primary_color: String,
    pub secondary_color: String,
    /// Founding year as display text, `""` when unknown.
    pub founded: String,
    pub coach: String,
    pub venue: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub website: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub social_links: SocialLinks,
    pub stats: TeamStats,
    pub created_at: DateTime<Utc>,
}

impl From<TeamSchema> for TeamView {
    fn from(t: TeamSchema) -> Self {
        Self {
            id: t.id,
            name: t.name,
            short_name: t.short_name,
            logo: t.logo.unwrap_or_default(),
            background_image: t.background_image.unwrap_or_default(),
            primary_color: t
                .primary_color
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: t
                .secondary_color
                .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
            founded: t.founded_year.map(|y| y.to_string()).unwrap_or_default(),
            coach: t.coach.unwrap_or_default(),
            venue: t.stadium.unwrap_or_default(),
            address: t.address.unwrap_or_default(),
            city: t.city.unwrap_or_default(),
            country: t.country.unwrap_or_default(),
            website: t.website.unwrap_or_default(),
            description: t.description.unwrap_or_default(),
            achievements: t.achievements,
            social_links: t.social_links,
            stats: t.stats,
            created_at: t.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: String,
    pub team_id: String,
    pub team_name: String,
    pub name: String,
    pub position: Position,
    pub number: i64,
    pub nationality: String,
    pub age: i64,
    pub height: i64,
    pub weight: i64,
    pub photo: String,
    pub stats: PlayerStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlayerSchema> for PlayerView {
    fn from(p: PlayerSchema) -> Self {
        Self {
            id: p.id,
            team_id: p.team_id.unwrap_or_default(),
            team_name: p.team_name.unwrap_or_default(),
            name: p.name,
            position: p.position,
            number: p.number.unwrap_or_default(),
            nationality: p.nationality.unwrap_or_default(),
            age: p.age.unwrap_or_default(),
            height: p.height.unwrap_or_default(),
            weight: p.weight.unwrap_or_default(),
            photo: p.photo.unwrap_or_default(),
            stats: p.stats,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachView {
    pub id: String,
    pub name: String,
    pub team_id: String,
    pub photo: String,
    pub nationality: String,
    pub age: i64,
    pub experience: i64,
    pub achievements: String,
    pub created_at: DateTime<Utc>,
}

impl From<CoachSchema> for CoachView {
    fn from(c: CoachSchema) -> Self {
        Self {
            id: c.id,
            name: c.name,
            team_id: c.team_id.unwrap_or_default(),
            photo: c.photo.unwrap_or_default(),
            nationality: c.nationality.unwrap_or_default(),
            age: c.age.unwrap_or_default(),
            experience: c.experience.unwrap_or_default(),
            achievements: c.achievements.unwrap_or_default(),
            created_at: c.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub id: String,
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub venue: String,
    pub competition: String,
    pub status: MatchStatus,
    pub score: Option<Score>,
    pub stats: MatchStats,
    pub highlights: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MatchSchema> for MatchView {
    fn from(m: MatchSchema) -> Self {
        Self {
            id: m.id,
            date: m.date,
            time: m.time.unwrap_or_default(),
            opponent: m.opponent,
            venue: m.venue.unwrap_or_default(),
            competition: m.competition.unwrap_or_default(),
            status: m.status,
            score: m.score,
            stats: m.stats,
            highlights: m.highlights,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<NewsSchema> for NewsView {
    fn from(n: NewsSchema) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            image: n.image.unwrap_or_default(),
            date: n.date,
            author: n.author.unwrap_or_default(),
            category: n.category,
            tags: n.tags,
            created_at: n.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub file_url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub created_at: DateTime<Utc>,
}

impl From<MediaSchema> for MediaView {
    fn from(m: MediaSchema) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description.unwrap_or_default(),
            file_url: m.file_url,
            media_type: m.media_type,
            created_at: m.created_at,
        }
    }
}
