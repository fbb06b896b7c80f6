// src/domain/slug/mod.rs
pub mod repository;
pub mod service;
pub mod value_objects;

pub use repository::{SluggableRecord, SluggableRepository};
pub use service::{SlugCandidate, SlugService};
pub use value_objects::{EntityId, Slug, SlugKind};
