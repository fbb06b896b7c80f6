// src/application/commands/categories/update.rs
use std::sync::Arc;

use super::CategoryCommandService;
use crate::{
    application::{
        authorization::require_role,
        commands::slug_retry::persist_with_unique_slug,
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryName, CategoryUpdate},
        errors::DomainError,
        session::Session,
        slug::SlugKind,
        user::Role,
    },
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
}

impl CategoryCommandService {
    /// Renames a category. The slug only moves when the name actually changes.
    pub async fn update_category(
        &self,
        session: Option<&Session>,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let now = self.clock.now();
        require_role(session, Role::Admin, now)?;

        let id = CategoryId::new(command.id)?;
        let name = CategoryName::new(command.name)?;
        let kept = match self
            .slug_service
            .kept_slug(SlugKind::Category, id.into(), name.as_str())
            .await
        {
            Err(DomainError::NotFound(_)) => {
                return Err(ApplicationError::not_found("category not found"));
            }
            other => other?,
        };

        let build = |slug| CategoryUpdate {
            id,
            name: name.clone(),
            slug,
            updated_at: now,
        };

        let updated = if let Some(slug) = kept {
            self.write_repo.update(build(slug)).await?
        } else {
            persist_with_unique_slug(
                &self.slug_service,
                name.as_str(),
                SlugKind::Category,
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

        Ok(updated.into())
    }
}
