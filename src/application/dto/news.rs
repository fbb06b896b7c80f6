use crate::domain::news::{News, NewsWithCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{categories::CategorySummaryDto, serde_time};

const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub published: bool,
    pub category_id: i64,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<News> for NewsDto {
    fn from(news: News) -> Self {
        Self {
            id: news.id.into(),
            title: news.title.into(),
            slug: news.slug.into_inner(),
            content: news.content.into(),
            cover_image: news.cover_image.map(Into::into),
            published: news.published,
            category_id: news.category_id.into(),
            author_id: news.author_id.map(Into::into),
            created_at: news.created_at,
            updated_at: news.updated_at,
        }
    }
}

/// Card-sized view used by feeds, category pages and search results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub published: bool,
    pub category: CategorySummaryDto,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<NewsWithCategory> for NewsSummaryDto {
    fn from(value: NewsWithCategory) -> Self {
        let NewsWithCategory {
            news,
            category,
            author_name,
        } = value;
        Self {
            id: news.id.into(),
            excerpt: excerpt(news.content.as_str()),
            title: news.title.into(),
            slug: news.slug.into_inner(),
            cover_image: news.cover_image.map(Into::into),
            published: news.published,
            category: category.into(),
            author_name,
            created_at: news.created_at,
        }
    }
}

fn excerpt(content: &str) -> String {
    let trimmed = content.trim();
    match trimmed.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", trimmed[..cut].trim_end()),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn excerpt_cuts_on_char_boundary() {
        let long = "ж".repeat(250);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), 201);
        assert!(cut.ends_with('…'));
        assert_eq!(excerpt(" богино "), "богино");
    }
}
