use std::sync::Arc;

use crate::domain::{category::CategoryReadRepository, news::NewsReadRepository};

pub const RELATED_LIMIT: u32 = 3;

pub struct PublicQueryService {
    pub(super) news_repo: Arc<dyn NewsReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) home_feed_limit: u32,
}

impl PublicQueryService {
    pub fn new(
        news_repo: Arc<dyn NewsReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        home_feed_limit: u32,
    ) -> Self {
        Self {
            news_repo,
            category_repo,
            home_feed_limit,
        }
    }
}
