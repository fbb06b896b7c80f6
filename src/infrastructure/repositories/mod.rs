// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_news;
mod postgres_slug;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_news::PostgresNewsRepository;
pub use postgres_slug::PostgresSluggableRepository;
pub use postgres_user::PostgresUserRepository;
