// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{CategoryId, CategoryReadRepository},
        news::{NewsReadRepository, NewsWriteRepository},
        slug::SlugService,
    },
};

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) slug_max_attempts: u32,
}

impl NewsCommandService {
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
        slug_max_attempts: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            clock,
            slug_max_attempts,
        }
    }

    /// Unknown categories are a client mistake, not a missing resource.
    pub(super) async fn existing_category(&self, raw: i64) -> ApplicationResult<CategoryId> {
        let id = CategoryId::new(raw)?;
        match self.category_repo.find_by_id(id).await? {
            Some(category) => Ok(category.id),
            None => Err(ApplicationError::validation(format!(
                "category {raw} does not exist"
            ))),
        }
    }
}
