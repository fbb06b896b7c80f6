// tests/support/mocks/memory_db.rs
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use medee::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryUpdate, CategoryWithCount,
    CategoryWriteRepository, NewCategory,
};
use medee::domain::errors::{DomainError, DomainResult};
use medee::domain::news::{
    CategoryRef, NewNews, News, NewsFilter, NewsId, NewsReadRepository, NewsUpdate,
    NewsWithCategory, NewsWriteRepository, NewsTitle, Visibility,
};
use medee::domain::slug::{EntityId, Slug, SlugKind, SluggableRecord, SluggableRepository};
use medee::domain::user::{Email, NewUser, User, UserId, UserRepository};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    categories: Vec<Category>,
    news: Vec<News>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn joined(&self, news: &News) -> DomainResult<NewsWithCategory> {
        let category = self
            .categories
            .iter()
            .find(|c| c.id == news.category_id)
            .ok_or_else(|| DomainError::Persistence("dangling category".into()))?;
        let author_name = news.author_id.and_then(|author| {
            self.users
                .iter()
                .find(|u| u.id == author)
                .and_then(|u| u.name.clone())
        });
        Ok(NewsWithCategory {
            news: news.clone(),
            category: CategoryRef {
                id: category.id,
                name: category.name.clone(),
                slug: category.slug.clone(),
            },
            author_name,
        })
    }

    fn category_slug_taken(&self, slug: &Slug, except: Option<CategoryId>) -> bool {
        self.categories
            .iter()
            .any(|c| c.slug == *slug && Some(c.id) != except)
    }

    fn news_slug_taken(&self, slug: &Slug, except: Option<NewsId>) -> bool {
        self.news
            .iter()
            .any(|n| n.slug == *slug && Some(n.id) != except)
    }

    fn has_category(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }
}

/// One in-process store behind every repository port, with the same
/// uniqueness and reference rules as the Postgres schema.
#[derive(Default)]
pub struct MemoryDb {
    tables: Mutex<Tables>,
    racing_inserts: AtomicU32,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `n` inserts lose a race: a concurrent writer grabs the same
    /// slug first and the insert reports `DuplicateSlug`.
    pub fn lose_next_inserts(&self, n: u32) {
        self.racing_inserts.store(n, Ordering::SeqCst);
    }

    fn lose_race(&self) -> bool {
        self.racing_inserts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn news_slugs(&self) -> Vec<String> {
        self.lock()
            .news
            .iter()
            .map(|n| n.slug.as_str().to_string())
            .collect()
    }

    pub fn category_slugs(&self) -> Vec<String> {
        self.lock()
            .categories
            .iter()
            .map(|c| c.slug.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.lock().users.len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.lock();
        if tables.users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let user = User {
            id: UserId(tables.next_id()),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: new_user.created_at,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.email == *email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl CategoryWriteRepository for MemoryDb {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let lost = self.lose_race();
        let mut tables = self.lock();
        if lost && !tables.category_slug_taken(&category.slug, None) {
            let id = CategoryId(tables.next_id());
            tables.categories.push(Category {
                id,
                name: category.name.clone(),
                slug: category.slug.clone(),
                created_at: category.created_at,
                updated_at: category.created_at,
            });
        }
        if tables.category_slug_taken(&category.slug, None) {
            return Err(DomainError::DuplicateSlug(category.slug.into_inner()));
        }
        let row = Category {
            id: CategoryId(tables.next_id()),
            name: category.name,
            slug: category.slug,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        tables.categories.push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut tables = self.lock();
        if tables.category_slug_taken(&update.slug, Some(update.id)) {
            return Err(DomainError::DuplicateSlug(update.slug.into_inner()));
        }
        let row = tables
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        row.name = update.name;
        row.slug = update.slug;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.lock();
        if tables.news.iter().any(|n| n.category_id == id) {
            return Err(DomainError::Conflict("category still has news".into()));
        }
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for MemoryDb {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.lock().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .find(|c| c.slug == *slug)
            .cloned())
    }

    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let tables = self.lock();
        let mut rows: Vec<CategoryWithCount> = tables
            .categories
            .iter()
            .map(|category| CategoryWithCount {
                category: category.clone(),
                news_count: tables
                    .news
                    .iter()
                    .filter(|n| n.category_id == category.id)
                    .count() as u64,
            })
            .collect();
        rows.sort_by(|a, b| a.category.name.as_str().cmp(b.category.name.as_str()));
        Ok(rows)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.lock().categories.len() as u64)
    }
}

#[async_trait]
impl NewsWriteRepository for MemoryDb {
    async fn insert(&self, news: NewNews) -> DomainResult<News> {
        let lost = self.lose_race();
        let mut tables = self.lock();
        if !tables.has_category(news.category_id) {
            return Err(DomainError::Validation("category does not exist".into()));
        }
        if lost && !tables.news_slug_taken(&news.slug, None) {
            let id = NewsId(tables.next_id());
            tables.news.push(News {
                id,
                title: NewsTitle::new("concurrent writer")?,
                slug: news.slug.clone(),
                content: news.content.clone(),
                cover_image: None,
                published: false,
                category_id: news.category_id,
                author_id: None,
                created_at: news.created_at,
                updated_at: news.created_at,
            });
        }
        if tables.news_slug_taken(&news.slug, None) {
            return Err(DomainError::DuplicateSlug(news.slug.into_inner()));
        }
        let row = News {
            id: NewsId(tables.next_id()),
            title: news.title,
            slug: news.slug,
            content: news.content,
            cover_image: news.cover_image,
            published: news.published,
            category_id: news.category_id,
            author_id: news.author_id,
            created_at: news.created_at,
            updated_at: news.created_at,
        };
        tables.news.push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<News> {
        let mut tables = self.lock();
        if !tables.has_category(update.category_id) {
            return Err(DomainError::Validation("category does not exist".into()));
        }
        if tables.news_slug_taken(&update.slug, Some(update.id)) {
            return Err(DomainError::DuplicateSlug(update.slug.into_inner()));
        }
        let row = tables
            .news
            .iter_mut()
            .find(|n| n.id == update.id)
            .ok_or_else(|| DomainError::NotFound("news not found".into()))?;
        row.title = update.title;
        row.slug = update.slug;
        row.content = update.content;
        row.cover_image = update.cover_image;
        row.published = update.published;
        row.category_id = update.category_id;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let mut tables = self.lock();
        let before = tables.news.len();
        tables.news.retain(|n| n.id != id);
        if tables.news.len() == before {
            return Err(DomainError::NotFound("news not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsReadRepository for MemoryDb {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsWithCategory>> {
        let tables = self.lock();
        tables
            .news
            .iter()
            .find(|n| n.id == id)
            .map(|n| tables.joined(n))
            .transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<NewsWithCategory>> {
        let tables = self.lock();
        tables
            .news
            .iter()
            .find(|n| n.slug == *slug)
            .map(|n| tables.joined(n))
            .transpose()
    }

    async fn list(&self, filter: &NewsFilter) -> DomainResult<Vec<NewsWithCategory>> {
        let tables = self.lock();
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut rows: Vec<&News> = tables
            .news
            .iter()
            .filter(|n| filter.admits_published(n.published))
            .filter(|n| filter.category_id.is_none_or(|id| n.category_id == id))
            .filter(|n| filter.exclude_id != Some(n.id))
            .filter(|n| !filter.require_cover || n.cover_image.is_some())
            .filter(|n| match &needle {
                Some(term) => {
                    n.title.as_str().to_lowercase().contains(term)
                        || n.content.as_str().to_lowercase().contains(term)
                }
                None => true,
            })
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        if let Some(limit) = filter.limit {
            rows.truncate(limit as usize);
        }
        rows.into_iter().map(|n| tables.joined(n)).collect()
    }

    async fn count(&self, visibility: Visibility) -> DomainResult<u64> {
        let filter = NewsFilter::with_visibility(visibility);
        Ok(self
            .lock()
            .news
            .iter()
            .filter(|n| filter.admits_published(n.published))
            .count() as u64)
    }
}

#[async_trait]
impl SluggableRepository for MemoryDb {
    async fn exists_by_slug(
        &self,
        kind: SlugKind,
        slug: &Slug,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool> {
        let tables = self.lock();
        Ok(match kind {
            SlugKind::Category => tables
                .categories
                .iter()
                .any(|c| c.slug == *slug && Some(EntityId::from(c.id)) != exclude),
            SlugKind::News => tables
                .news
                .iter()
                .any(|n| n.slug == *slug && Some(EntityId::from(n.id)) != exclude),
        })
    }

    async fn find_by_identifier(
        &self,
        kind: SlugKind,
        id: EntityId,
    ) -> DomainResult<Option<SluggableRecord>> {
        let tables = self.lock();
        Ok(match kind {
            SlugKind::Category => tables
                .categories
                .iter()
                .find(|c| c.id.0 == id.0)
                .map(|c| SluggableRecord {
                    id,
                    label: c.name.to_string(),
                    slug: c.slug.clone(),
                }),
            SlugKind::News => tables
                .news
                .iter()
                .find(|n| n.id.0 == id.0)
                .map(|n| SluggableRecord {
                    id,
                    label: n.title.to_string(),
                    slug: n.slug.clone(),
                }),
        })
    }
}
