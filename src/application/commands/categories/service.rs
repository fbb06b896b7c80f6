// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        slug::SlugService,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) slug_max_attempts: u32,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
        slug_max_attempts: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            slug_max_attempts,
        }
    }
}
