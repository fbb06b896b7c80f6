pub mod auth;
pub mod categories;
pub mod news;
pub mod seed;
pub mod slug_retry;
