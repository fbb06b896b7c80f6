// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{EntityId, Slug, SlugKind};
use async_trait::async_trait;

/// The label and slug currently stored for one sluggable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SluggableRecord {
    pub id: EntityId,
    pub label: String,
    pub slug: Slug,
}

/// The two lookups slug assignment needs from storage.
#[async_trait]
pub trait SluggableRepository: Send + Sync {
    /// True when a row of `kind`, other than `exclude`, already holds `slug`.
    async fn exists_by_slug(
        &self,
        kind: SlugKind,
        slug: &Slug,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool>;

    async fn find_by_identifier(
        &self,
        kind: SlugKind,
        id: EntityId,
    ) -> DomainResult<Option<SluggableRecord>>;
}
