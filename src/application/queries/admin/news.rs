use super::AdminQueryService;
use crate::{
    application::{
        authorization::require_role,
        dto::{CategoryWithCountDto, NewsDto, NewsSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        news::{NewsFilter, NewsId, Visibility},
        session::Session,
        user::Role,
    },
};

#[derive(Debug, Default, Clone)]
pub struct ListNewsQuery {
    pub category_id: Option<i64>,
    /// `Some(true)` for published only, `Some(false)` for drafts only.
    pub published: Option<bool>,
}

impl AdminQueryService {
    pub async fn list_news(
        &self,
        session: Option<&Session>,
        query: ListNewsQuery,
    ) -> ApplicationResult<Vec<NewsSummaryDto>> {
        require_role(session, Role::Admin, self.clock.now())?;

        let visibility = match query.published {
            Some(true) => Visibility::PublishedOnly,
            Some(false) => Visibility::Drafts,
            None => Visibility::All,
        };
        let mut filter = NewsFilter::with_visibility(visibility);
        if let Some(raw) = query.category_id {
            filter = filter.in_category(CategoryId::new(raw)?);
        }

        let rows = self.news_repo.list(&filter).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_news(&self, session: Option<&Session>, id: i64) -> ApplicationResult<NewsDto> {
        require_role(session, Role::Admin, self.clock.now())?;

        let id = NewsId::new(id)?;
        let found = self
            .news_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;
        Ok(found.news.into())
    }

    /// Same rows as the public navigation; both count every news item, drafts included.
    pub async fn list_categories(
        &self,
        session: Option<&Session>,
    ) -> ApplicationResult<Vec<CategoryWithCountDto>> {
        require_role(session, Role::Admin, self.clock.now())?;
        let rows = self.category_repo.list_with_counts().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
