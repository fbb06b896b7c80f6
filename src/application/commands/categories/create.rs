// src/application/commands/categories/create.rs
use std::sync::Arc;

use super::CategoryCommandService;
use crate::{
    application::{
        authorization::require_role,
        commands::slug_retry::persist_with_unique_slug,
        dto::CategoryDto,
        error::ApplicationResult,
    },
    domain::{
        category::{CategoryName, NewCategory},
        session::Session,
        slug::SlugKind,
        user::Role,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        session: Option<&Session>,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let now = self.clock.now();
        let actor = require_role(session, Role::Admin, now)?;

        let name = CategoryName::new(command.name)?;
        let created = persist_with_unique_slug(
            &self.slug_service,
            name.as_str(),
            SlugKind::Category,
            None,
            self.slug_max_attempts,
            |slug| {
                let repo = Arc::clone(&self.write_repo);
                let category = NewCategory {
                    name: name.clone(),
                    slug,
                    created_at: now,
                };
                async move { repo.insert(category).await }
            },
        )
        .await?;

        tracing::info!(
            category_id = i64::from(created.id),
            slug = %created.slug,
            actor = i64::from(actor.user_id),
            "category created"
        );
        Ok(created.into())
    }
}
