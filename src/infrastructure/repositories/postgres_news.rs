// src/infrastructure/repositories/postgres_news.rs
use super::map_sqlx;
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{
    CategoryRef, CoverImage, NewNews, News, NewsContent, NewsFilter, NewsId, NewsReadRepository,
    NewsTitle, NewsUpdate, NewsWithCategory, NewsWriteRepository, Visibility,
};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresNewsRepository {
    pool: PgPool,
}

impl PostgresNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const NEWS_COLUMNS: &str = "id, title, slug, content, cover_image, published, category_id, \
                            author_id, created_at, updated_at";

const LISTING_SELECT: &str = "SELECT n.id, n.title, n.slug, n.content, n.cover_image, \
     n.published, n.category_id, n.author_id, n.created_at, n.updated_at, \
     c.name AS category_name, c.slug AS category_slug, u.name AS author_name \
     FROM news n \
     JOIN categories c ON c.id = n.category_id \
     LEFT JOIN users u ON u.id = n.author_id";

#[derive(Debug, FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    cover_image: Option<String>,
    published: bool,
    category_id: i64,
    author_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NewsRow> for News {
    type Error = DomainError;

    fn try_from(row: NewsRow) -> Result<Self, Self::Error> {
        Ok(News {
            id: NewsId::new(row.id)?,
            title: NewsTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: NewsContent::new(row.content)?,
            cover_image: CoverImage::parse_optional(row.cover_image)?,
            published: row.published,
            category_id: CategoryId::new(row.category_id)?,
            author_id: row.author_id.map(UserId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ListingRow {
    #[sqlx(flatten)]
    news: NewsRow,
    category_name: String,
    category_slug: String,
    author_name: Option<String>,
}

impl TryFrom<ListingRow> for NewsWithCategory {
    type Error = DomainError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let news = News::try_from(row.news)?;
        Ok(NewsWithCategory {
            category: CategoryRef {
                id: news.category_id,
                name: CategoryName::new(row.category_name)?,
                slug: Slug::new(row.category_slug)?,
            },
            news,
            author_name: row.author_name,
        })
    }
}

/// `%` and `_` in user input match literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn push_visibility(builder: &mut QueryBuilder<'_, Postgres>, visibility: Visibility) {
    match visibility {
        Visibility::PublishedOnly => {
            builder.push(" AND n.published = TRUE");
        }
        Visibility::Drafts => {
            builder.push(" AND n.published = FALSE");
        }
        Visibility::All => {}
    }
}

#[async_trait]
impl NewsWriteRepository for PostgresNewsRepository {
    async fn insert(&self, news: NewNews) -> DomainResult<News> {
        let NewNews {
            title,
            slug,
            content,
            cover_image,
            published,
            category_id,
            author_id,
            created_at,
        } = news;

        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "INSERT INTO news (title, slug, content, cover_image, published, category_id, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {NEWS_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(cover_image.map(String::from))
        .bind(published)
        .bind(i64::from(category_id))
        .bind(author_id.map(i64::from))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        News::try_from(row)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<News> {
        let NewsUpdate {
            id,
            title,
            slug,
            content,
            cover_image,
            published,
            category_id,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "UPDATE news
             SET title = $2, slug = $3, content = $4, cover_image = $5,
                 published = $6, category_id = $7, updated_at = $8
             WHERE id = $1
             RETURNING {NEWS_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(cover_image.map(String::from))
        .bind(published)
        .bind(i64::from(category_id))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("news not found".into()))?;

        News::try_from(row)
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("news not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsReadRepository for PostgresNewsRepository {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsWithCategory>> {
        let row = sqlx::query_as::<_, ListingRow>(&format!("{LISTING_SELECT} WHERE n.id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(NewsWithCategory::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<NewsWithCategory>> {
        let row = sqlx::query_as::<_, ListingRow>(&format!("{LISTING_SELECT} WHERE n.slug = $1"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(NewsWithCategory::try_from).transpose()
    }

    async fn list(&self, filter: &NewsFilter) -> DomainResult<Vec<NewsWithCategory>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(LISTING_SELECT);
        builder.push(" WHERE TRUE");
        push_visibility(&mut builder, filter.visibility);

        if let Some(category_id) = filter.category_id {
            builder.push(" AND n.category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(exclude) = filter.exclude_id {
            builder.push(" AND n.id <> ");
            builder.push_bind(i64::from(exclude));
        }

        if filter.require_cover {
            builder.push(" AND n.cover_image IS NOT NULL");
        }

        if let Some(term) = filter.search.as_deref() {
            let pattern = like_pattern(term);
            builder.push(" AND (n.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR n.content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY n.created_at DESC, n.id DESC");

        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<ListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(NewsWithCategory::try_from).collect()
    }

    async fn count(&self, visibility: Visibility) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM news n WHERE TRUE");
        push_visibility(&mut builder, visibility);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }
}
