// src/application/commands/seed.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::slug_retry::persist_with_unique_slug,
        error::ApplicationResult,
        ports::{security::PasswordHasher, time::Clock},
    },
    domain::{
        category::{CategoryName, CategoryReadRepository, CategoryWriteRepository, NewCategory},
        slug::{SlugKind, SlugService},
        user::{Email, NewUser, PasswordHash, Role, UserRepository},
    },
};

pub const DEFAULT_CATEGORIES: [&str; 5] = ["Улс төр", "Нийгэм", "Эдийн засаг", "Спорт", "Дэлхий"];

pub struct SeedCommand {
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub categories_created: Vec<String>,
}

/// Bootstraps an empty database: one admin account and the starter categories.
/// Running it again only fills in what is missing.
pub struct SeedService {
    user_repo: Arc<dyn UserRepository>,
    category_read: Arc<dyn CategoryReadRepository>,
    category_write: Arc<dyn CategoryWriteRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    slug_service: Arc<SlugService>,
    clock: Arc<dyn Clock>,
    slug_max_attempts: u32,
}

impl SeedService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        category_read: Arc<dyn CategoryReadRepository>,
        category_write: Arc<dyn CategoryWriteRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
        slug_max_attempts: u32,
    ) -> Self {
        Self {
            user_repo,
            category_read,
            category_write,
            password_hasher,
            slug_service,
            clock,
            slug_max_attempts,
        }
    }

    pub async fn seed(&self, command: SeedCommand) -> ApplicationResult<SeedReport> {
        let mut report = SeedReport {
            admin_created: self.ensure_admin(command).await?,
            ..SeedReport::default()
        };

        let existing: Vec<String> = self
            .category_read
            .list_with_counts()
            .await?
            .into_iter()
            .map(|row| row.category.name.into_inner())
            .collect();

        for raw in DEFAULT_CATEGORIES {
            if existing.iter().any(|name| name == raw) {
                continue;
            }
            let name = CategoryName::new(raw)?;
            let now = self.clock.now();
            let created = persist_with_unique_slug(
                &self.slug_service,
                name.as_str(),
                SlugKind::Category,
                None,
                self.slug_max_attempts,
                |slug| {
                    let repo = Arc::clone(&self.category_write);
                    let category = NewCategory {
                        name: name.clone(),
                        slug,
                        created_at: now,
                    };
                    async move { repo.insert(category).await }
                },
            )
            .await?;
            tracing::info!(name = raw, slug = %created.slug, "seeded category");
            report.categories_created.push(raw.to_string());
        }

        Ok(report)
    }

    async fn ensure_admin(&self, command: SeedCommand) -> ApplicationResult<bool> {
        let email = Email::new(command.admin_email)?;
        if self.user_repo.find_by_email(&email).await?.is_some() {
            tracing::info!(email = %email, "admin user already present");
            return Ok(false);
        }

        let hash = self.password_hasher.hash(&command.admin_password).await?;
        let user = self
            .user_repo
            .insert(NewUser {
                email,
                name: command.admin_name.or_else(|| Some("Admin".to_string())),
                password_hash: PasswordHash::new(hash)?,
                role: Role::Admin,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(user_id = i64::from(user.id), "seeded admin user");
        Ok(true)
    }
}
