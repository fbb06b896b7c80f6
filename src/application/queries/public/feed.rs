use super::PublicQueryService;
use crate::{
    application::{
        dto::{HomeFeedDto, NewsSummaryDto},
        error::ApplicationResult,
    },
    domain::news::NewsFilter,
};

impl PublicQueryService {
    /// Newest published story with a cover as the lead, then the latest
    /// published stories without repeating it.
    pub async fn home_feed(&self) -> ApplicationResult<HomeFeedDto> {
        let featured = self
            .news_repo
            .list(&NewsFilter::published().with_cover().limit(1))
            .await?
            .into_iter()
            .next();

        let mut latest = NewsFilter::published().limit(self.home_feed_limit);
        if let Some(lead) = &featured {
            latest = latest.excluding(lead.news.id);
        }
        let latest = self.news_repo.list(&latest).await?;

        Ok(HomeFeedDto {
            featured: featured.map(NewsSummaryDto::from),
            latest: latest.into_iter().map(Into::into).collect(),
        })
    }
}
