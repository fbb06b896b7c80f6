use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{categories::CategoryDto, news::NewsSummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeFeedDto {
    #[serde(default)]
    pub featured: Option<NewsSummaryDto>,
    pub latest: Vec<NewsSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryPageDto {
    pub category: CategoryDto,
    pub news: Vec<NewsSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub article: NewsSummaryDto,
    pub content: String,
    pub related: Vec<NewsSummaryDto>,
}
