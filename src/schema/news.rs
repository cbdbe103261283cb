use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{clean, decode_column, missing_fields};
use crate::{error::AppError, model::NewsModel};

pub const DEFAULT_CATEGORY: &str = "general";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewsPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    /// Publish date; assigned at creation when absent.
    pub date: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug)]
pub struct NewsInput {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
}

impl NewsPayload {
    pub fn validate(self) -> Result<NewsInput, AppError> {
        let (title, content) = match (clean(self.title), clean(self.content)) {
            (Some(title), Some(content)) => (title, content),
            (title, content) => {
                return Err(missing_fields(&[
                    ("title", title.is_none()),
                    ("content", content.is_none()),
                ]))
            }
        };

        Ok(NewsInput {
            title,
            content,
            image: clean(self.image),
            date: clean(self.date),
            author: clean(self.author),
            category: clean(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tags: dedup_tags(self.tags.unwrap_or_default()),
        })
    }
}

/// Tags form a set: blanks and repeats are dropped, first occurrence wins.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsSchema {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub date: String,
    pub author: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&NewsModel> for NewsSchema {
    fn from(n: &NewsModel) -> Self {
        Self {
            id: n.id.clone(),
            title: n.title.clone(),
            content: n.content.clone(),
            image: n.image.clone(),
            date: n.date.clone(),
            author: n.author.clone(),
            category: n.category.clone(),
            tags: decode_column(n.tags.as_deref(), "news.tags"),
            created_at: n.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_are_deduplicated_in_order() {
        let tags = dedup_tags(vec![
            "cup".into(),
            "youth".into(),
            " cup ".into(),
            "".into(),
            "derby".into(),
        ]);
        assert_eq!(tags, vec!["cup", "youth", "derby"]);
    }

    #[test]
    fn category_defaults_to_general() {
        let payload: NewsPayload =
            serde_json::from_value(json!({ "title": "Win", "content": "3-0" })).unwrap();
        let input = payload.validate().unwrap();
        assert_eq!(input.category, DEFAULT_CATEGORY);
        assert!(input.tags.is_empty());
        assert_eq!(input.date, None);
    }

    #[test]
    fn content_is_required() {
        let payload: NewsPayload = serde_json::from_value(json!({ "title": "Win" })).unwrap();
        assert!(payload.validate().is_err());
    }
}
