use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub news_count: u64,
    pub published_count: u64,
    pub category_count: u64,
    pub user_count: u64,
}
