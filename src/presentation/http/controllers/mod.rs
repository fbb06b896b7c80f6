pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod news;
pub mod public;
