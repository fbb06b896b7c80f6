use crate::domain::category::CategoryId;
use crate::domain::news::value_objects::NewsId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    PublishedOnly,
    Drafts,
    All,
}

/// Listing criteria. Results are always ordered newest first (`created_at DESC, id DESC`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFilter {
    pub visibility: Visibility,
    pub category_id: Option<CategoryId>,
    pub search: Option<String>,
    pub exclude_id: Option<NewsId>,
    pub require_cover: bool,
    pub limit: Option<u32>,
}

impl NewsFilter {
    pub fn published() -> Self {
        Self::with_visibility(Visibility::PublishedOnly)
    }

    pub fn all() -> Self {
        Self::with_visibility(Visibility::All)
    }

    pub fn with_visibility(visibility: Visibility) -> Self {
        Self {
            visibility,
            category_id: None,
            search: None,
            exclude_id: None,
            require_cover: false,
            limit: None,
        }
    }

    pub fn in_category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    /// Blank terms are ignored.
    pub fn matching(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    pub fn excluding(mut self, id: NewsId) -> Self {
        self.exclude_id = Some(id);
        self
    }

    pub fn with_cover(mut self) -> Self {
        self.require_cover = true;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn admits_published(&self, published: bool) -> bool {
        match self.visibility {
            Visibility::PublishedOnly => published,
            Visibility::Drafts => !published,
            Visibility::All => true,
        }
    }
}
