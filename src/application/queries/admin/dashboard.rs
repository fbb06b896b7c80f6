use super::AdminQueryService;
use crate::{
    application::{authorization::require_role, dto::DashboardStatsDto, error::ApplicationResult},
    domain::{news::Visibility, session::Session, user::Role},
};

impl AdminQueryService {
    pub async fn dashboard(&self, session: Option<&Session>) -> ApplicationResult<DashboardStatsDto> {
        require_role(session, Role::Admin, self.clock.now())?;

        let (news_count, published_count, category_count, user_count) = tokio::try_join!(
            self.news_repo.count(Visibility::All),
            self.news_repo.count(Visibility::PublishedOnly),
            self.category_repo.count(),
            self.user_repo.count(),
        )?;

        Ok(DashboardStatsDto {
            news_count,
            published_count,
            category_count,
            user_count,
        })
    }
}
