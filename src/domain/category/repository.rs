use crate::domain::category::entity::{Category, CategoryUpdate, CategoryWithCount, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Fails with `Conflict` while news still reference the category.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// Ordered by name; counts include unpublished news.
    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>>;
    async fn count(&self) -> DomainResult<u64>;
}
