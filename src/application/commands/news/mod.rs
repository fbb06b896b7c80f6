// src/application/commands/news/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateNewsCommand, CreateNewsCommandBuilder};
pub use delete::DeleteNewsCommand;
pub use service::NewsCommandService;
pub use update::UpdateNewsCommand;
