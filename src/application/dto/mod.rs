pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod feed;
pub mod news;
pub mod serde_time;

pub use auth::{LoginResponse, PrincipalDto};
pub use categories::{CategoryDto, CategorySummaryDto, CategoryWithCountDto};
pub use dashboard::DashboardStatsDto;
pub use feed::{ArticleDetailDto, CategoryPageDto, HomeFeedDto};
pub use news::{NewsDto, NewsSummaryDto};
