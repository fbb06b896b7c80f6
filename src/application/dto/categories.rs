use crate::domain::category::{Category, CategoryWithCount};
use crate::domain::news::CategoryRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryWithCountDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub news_count: u64,
}

impl From<CategoryWithCount> for CategoryWithCountDto {
    fn from(value: CategoryWithCount) -> Self {
        Self {
            id: value.category.id.into(),
            name: value.category.name.into_inner(),
            slug: value.category.slug.into_inner(),
            news_count: value.news_count,
        }
    }
}

/// Category as embedded in a news listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<CategoryRef> for CategorySummaryDto {
    fn from(value: CategoryRef) -> Self {
        Self {
            id: value.id.into(),
            name: value.name.into_inner(),
            slug: value.slug.into_inner(),
        }
    }
}
