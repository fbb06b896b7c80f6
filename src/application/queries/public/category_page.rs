use super::PublicQueryService;
use crate::{
    application::{
        dto::CategoryPageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{news::NewsFilter, slug::Slug},
};

pub struct CategoryPageQuery {
    pub slug: String,
}

impl PublicQueryService {
    pub async fn category_page(&self, query: CategoryPageQuery) -> ApplicationResult<CategoryPageDto> {
        let not_found = || ApplicationError::not_found("category not found");

        let slug = Slug::new(query.slug).map_err(|_| not_found())?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        let news = self
            .news_repo
            .list(&NewsFilter::published().in_category(category.id))
            .await?;

        Ok(CategoryPageDto {
            category: category.into(),
            news: news.into_iter().map(Into::into).collect(),
        })
    }
}
