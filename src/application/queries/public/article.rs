use super::{PublicQueryService, RELATED_LIMIT};
use crate::{
    application::{
        dto::{ArticleDetailDto, NewsSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{news::NewsFilter, slug::Slug},
};

pub struct ArticleDetailQuery {
    pub slug: String,
}

impl PublicQueryService {
    /// Drafts are indistinguishable from missing articles here.
    pub async fn article_detail(
        &self,
        query: ArticleDetailQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let not_found = || ApplicationError::not_found("article not found");

        let slug = Slug::new(query.slug).map_err(|_| not_found())?;
        let found = self
            .news_repo
            .find_by_slug(&slug)
            .await?
            .filter(|row| row.news.published)
            .ok_or_else(not_found)?;

        let related = self
            .news_repo
            .list(
                &NewsFilter::published()
                    .in_category(found.category.id)
                    .excluding(found.news.id)
                    .limit(RELATED_LIMIT),
            )
            .await?;

        let content = found.news.content.as_str().to_string();
        Ok(ArticleDetailDto {
            article: NewsSummaryDto::from(found),
            content,
            related: related.into_iter().map(Into::into).collect(),
        })
    }
}
