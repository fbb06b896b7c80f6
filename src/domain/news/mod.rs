pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{CategoryRef, NewNews, News, NewsUpdate, NewsWithCategory};
pub use filter::{NewsFilter, Visibility};
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use value_objects::{CoverImage, NewsContent, NewsId, NewsTitle};
