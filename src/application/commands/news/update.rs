// src/application/commands/news/update.rs
use std::sync::Arc;

use super::NewsCommandService;
use crate::{
    application::{
        authorization::require_role,
        commands::slug_retry::persist_with_unique_slug,
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        news::{CoverImage, NewsContent, NewsId, NewsTitle, NewsUpdate},
        session::Session,
        slug::SlugKind,
        user::Role,
    },
};

/// Replaces every editable field of a news item.
pub struct UpdateNewsCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category_id: i64,
    pub cover_image: Option<String>,
    pub published: bool,
}

impl NewsCommandService {
    pub async fn update_news(
        &self,
        session: Option<&Session>,
        command: UpdateNewsCommand,
    ) -> ApplicationResult<NewsDto> {
        let now = self.clock.now();
        require_role(session, Role::Admin, now)?;

        let id = NewsId::new(command.id)?;
        let title = NewsTitle::new(command.title)?;
        let kept = match self
            .slug_service
            .kept_slug(SlugKind::News, id.into(), title.as_str())
            .await
        {
            Err(DomainError::NotFound(_)) => {
                return Err(ApplicationError::not_found("news not found"));
            }
            other => other?,
        };

        let content = NewsContent::new(command.content)?;
        let cover_image = CoverImage::parse_optional(command.cover_image)?;
        let category_id = self.existing_category(command.category_id).await?;

        let build = |slug| NewsUpdate {
            id,
            title: title.clone(),
            slug,
            content: content.clone(),
            cover_image: cover_image.clone(),
            published: command.published,
            category_id,
            updated_at: now,
        };

        let updated = if let Some(slug) = kept {
            self.write_repo.update(build(slug)).await?
        } else {
            persist_with_unique_slug(
                &self.slug_service,
                title.as_str(),
                SlugKind::News,
                Some(id.into()),
                self.slug_max_attempts,
                |slug| {
                    let repo = Arc::clone(&self.write_repo);
                    let update = build(slug);
                    async move { repo.update(update).await }
                },
            )
            .await?
        };

        tracing::info!(news_id = command.id, slug = %updated.slug, "news updated");
        Ok(updated.into())
    }
}
