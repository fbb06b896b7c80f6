use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{category::CategoryReadRepository, news::NewsReadRepository, user::UserRepository},
};

/// Back-office reads. Every method requires an `ADMIN` session.
pub struct AdminQueryService {
    pub(super) news_repo: Arc<dyn NewsReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AdminQueryService {
    pub fn new(
        news_repo: Arc<dyn NewsReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            news_repo,
            category_repo,
            user_repo,
            clock,
        }
    }
}
