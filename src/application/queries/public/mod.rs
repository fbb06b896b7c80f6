// src/application/queries/public/mod.rs
//! Reader-facing queries. Nothing here takes a session and every listing is
//! built from `NewsFilter::published()`.
mod article;
mod categories;
mod category_page;
mod feed;
mod search;
mod service;

pub use article::ArticleDetailQuery;
pub use category_page::CategoryPageQuery;
pub use search::{SEARCH_LIMIT, SearchQuery};
pub use service::{PublicQueryService, RELATED_LIMIT};
