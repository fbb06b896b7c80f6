use super::PublicQueryService;
use crate::{
    application::{dto::NewsSummaryDto, error::ApplicationResult},
    domain::news::NewsFilter,
};

pub const SEARCH_LIMIT: u32 = 50;

pub struct SearchQuery {
    pub q: String,
}

impl PublicQueryService {
    /// Case-insensitive substring match on title or content. A blank query
    /// matches nothing.
    pub async fn search(&self, query: SearchQuery) -> ApplicationResult<Vec<NewsSummaryDto>> {
        let filter = NewsFilter::published().matching(&query.q).limit(SEARCH_LIMIT);
        if filter.search.is_none() {
            return Ok(Vec::new());
        }

        let found = self.news_repo.list(&filter).await?;
        Ok(found.into_iter().map(Into::into).collect())
    }
}
