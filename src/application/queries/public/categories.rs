use super::PublicQueryService;
use crate::application::{dto::CategoryWithCountDto, error::ApplicationResult};

impl PublicQueryService {
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryWithCountDto>> {
        let rows = self.category_repo.list_with_counts().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
