use chrono::{DateTime, Utc};

// Row shapes as stored. Composite fields stay as raw JSON text here and are
// decoded by the conversions in `schema`.

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamModel {
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
    pub achievements: Option<String>,
    pub social_links: Option<String>,
    pub stats: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerModel {
    pub id: String,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub name: String,
    pub position: String,
    pub number: Option<i64>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub photo: Option<String>,
    pub stats: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CoachModel {
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

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MatchModel {
    pub id: String,
    pub date: String,
    pub time: Option<String>,
    pub opponent: String,
    pub venue: Option<String>,
    pub competition: Option<String>,
    pub status: String,
    pub score: Option<String>,
    pub stats: Option<String>,
    pub highlights: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NewsModel {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub date: String,
    pub author: Option<String>,
    pub category: String,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MediaModel {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    #[sqlx(rename = "type")]
    pub media_type: String,
    pub created_at: DateTime<Utc>,
}
