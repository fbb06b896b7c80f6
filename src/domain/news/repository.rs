use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{NewNews, News, NewsUpdate, NewsWithCategory};
use crate::domain::news::filter::{NewsFilter, Visibility};
use crate::domain::news::value_objects::NewsId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    async fn insert(&self, news: NewNews) -> DomainResult<News>;
    async fn update(&self, update: NewsUpdate) -> DomainResult<News>;
    async fn delete(&self, id: NewsId) -> DomainResult<()>;
}

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsWithCategory>>;
    /// Returns drafts too; callers decide visibility.
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<NewsWithCategory>>;
    async fn list(&self, filter: &NewsFilter) -> DomainResult<Vec<NewsWithCategory>>;
    async fn count(&self, visibility: Visibility) -> DomainResult<u64>;
}
