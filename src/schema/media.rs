use anyhow::{anyhow, Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{clean, missing_fields};
use crate::{error::AppError, model::MediaModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl TryFrom<&str> for MediaType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            _ => Err(anyhow!("Invalid media type: {}", s)),
        }
    }
}

impl TryFrom<String> for MediaType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        MediaType::try_from(s.as_str())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MediaPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
}

#[derive(Clone, Debug)]
pub struct MediaInput {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub media_type: MediaType,
}

impl MediaPayload {
    pub fn validate(self) -> Result<MediaInput, AppError> {
        match (clean(self.title), clean(self.file_url), self.media_type) {
            (Some(title), Some(file_url), Some(media_type)) => Ok(MediaInput {
                title,
                description: clean(self.description),
                file_url,
                media_type,
            }),
            (title, file_url, media_type) => Err(missing_fields(&[
                ("title", title.is_none()),
                ("file_url", file_url.is_none()),
                ("type", media_type.is_none()),
            ])),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MediaSchema {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<&MediaModel> for MediaSchema {
    type Error = Error;

    fn try_from(m: &MediaModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id.clone(),
            title: m.title.clone(),
            description: m.description.clone(),
            file_url: m.file_url.clone(),
            media_type: MediaType::try_from(m.media_type.as_str())?,
            created_at: m.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_url_alias_and_type_are_read() {
        let payload: MediaPayload = serde_json::from_value(json!({
            "title": "Training day",
            "fileUrl": "https://cdn.example/clip.mp4",
            "type": "Video"
        }))
        .unwrap();
        let input = payload.validate().unwrap();
        assert_eq!(input.file_url, "https://cdn.example/clip.mp4");
        assert_eq!(input.media_type, MediaType::Video);
    }

    #[test]
    fn all_three_required_fields_are_reported() {
        let err = MediaPayload::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: title, file_url, type"
        );
    }
}
