// src/domain/news/entity.rs
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::news::value_objects::{CoverImage, NewsContent, NewsId, NewsTitle};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct News {
    pub id: NewsId,
    pub title: NewsTitle,
    pub slug: Slug,
    pub content: NewsContent,
    pub cover_image: Option<CoverImage>,
    pub published: bool,
    pub category_id: CategoryId,
    pub author_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
}

/// A news row joined with its category and the author's display name.
#[derive(Debug, Clone)]
pub struct NewsWithCategory {
    pub news: News,
    pub category: CategoryRef,
    pub author_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: NewsTitle,
    pub slug: Slug,
    pub content: NewsContent,
    pub cover_image: Option<CoverImage>,
    pub published: bool,
    pub category_id: CategoryId,
    pub author_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the editable fields.
#[derive(Debug, Clone)]
pub struct NewsUpdate {
    pub id: NewsId,
    pub title: NewsTitle,
    pub slug: Slug,
    pub content: NewsContent,
    pub cover_image: Option<CoverImage>,
    pub published: bool,
    pub category_id: CategoryId,
    pub updated_at: DateTime<Utc>,
}
