// src/application/commands/news/create.rs
use std::sync::Arc;

use super::NewsCommandService;
use crate::{
    application::{
        authorization::require_role,
        commands::slug_retry::persist_with_unique_slug,
        dto::NewsDto,
        error::ApplicationResult,
    },
    domain::{
        news::{CoverImage, NewNews, NewsContent, NewsTitle},
        session::Session,
        slug::SlugKind,
        user::Role,
    },
};

pub struct CreateNewsCommand {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    pub cover_image: Option<String>,
    pub published: bool,
}

impl CreateNewsCommand {
    pub fn builder() -> CreateNewsCommandBuilder {
        CreateNewsCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateNewsCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    category_id: Option<i64>,
    cover_image: Option<String>,
    published: bool,
}

impl CreateNewsCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn build(self) -> Result<CreateNewsCommand, &'static str> {
        Ok(CreateNewsCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            category_id: self.category_id.ok_or("category_id is required")?,
            cover_image: self.cover_image,
            published: self.published,
        })
    }
}

impl NewsCommandService {
    pub async fn create_news(
        &self,
        session: Option<&Session>,
        command: CreateNewsCommand,
    ) -> ApplicationResult<NewsDto> {
        let now = self.clock.now();
        let actor = require_role(session, Role::Admin, now)?;

        let title = NewsTitle::new(command.title)?;
        let content = NewsContent::new(command.content)?;
        let cover_image = CoverImage::parse_optional(command.cover_image)?;
        let category_id = self.existing_category(command.category_id).await?;
        let author_id = actor.user_id;

        let created = persist_with_unique_slug(
            &self.slug_service,
            title.as_str(),
            SlugKind::News,
            None,
            self.slug_max_attempts,
            |slug| {
                let repo = Arc::clone(&self.write_repo);
                let news = NewNews {
                    title: title.clone(),
                    slug,
                    content: content.clone(),
                    cover_image: cover_image.clone(),
                    published: command.published,
                    category_id,
                    author_id: Some(author_id),
                    created_at: now,
                };
                async move { repo.insert(news).await }
            },
        )
        .await?;

        tracing::info!(
            news_id = i64::from(created.id),
            slug = %created.slug,
            published = created.published,
            "news created"
        );
        Ok(created.into())
    }
}
