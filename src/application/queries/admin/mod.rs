// src/application/queries/admin/mod.rs
mod dashboard;
mod me;
mod news;
mod service;

pub use news::ListNewsQuery;
pub use service::AdminQueryService;
