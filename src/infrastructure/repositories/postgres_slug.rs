// src/infrastructure/repositories/postgres_slug.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{EntityId, Slug, SlugKind, SluggableRecord, SluggableRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Slug lookups over both sluggable tables. The table and label column are
/// chosen from a closed enum, never from input.
#[derive(Clone)]
pub struct PostgresSluggableRepository {
    pool: PgPool,
}

impl PostgresSluggableRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn table(kind: SlugKind) -> (&'static str, &'static str) {
    match kind {
        SlugKind::Category => ("categories", "name"),
        SlugKind::News => ("news", "title"),
    }
}

#[derive(Debug, FromRow)]
struct SlugRow {
    id: i64,
    label: String,
    slug: String,
}

#[async_trait]
impl SluggableRepository for PostgresSluggableRepository {
    async fn exists_by_slug(
        &self,
        kind: SlugKind,
        slug: &Slug,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool> {
        let (table, _) = table(kind);
        sqlx::query_scalar::<_, bool>(&format!(
            "SELECT EXISTS (SELECT 1 FROM {table} WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))"
        ))
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn find_by_identifier(
        &self,
        kind: SlugKind,
        id: EntityId,
    ) -> DomainResult<Option<SluggableRecord>> {
        let (table, label) = table(kind);
        let row = sqlx::query_as::<_, SlugRow>(&format!(
            "SELECT id, {label} AS label, slug FROM {table} WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| {
            Ok(SluggableRecord {
                id: EntityId::new(row.id)?,
                label: row.label,
                slug: Slug::new(row.slug)?,
            })
        })
        .transpose()
    }
}
