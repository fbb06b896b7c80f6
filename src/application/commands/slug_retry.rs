// src/application/commands/slug_retry.rs
use std::future::Future;

use tracing::warn;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::{DomainError, DomainResult},
        slug::{EntityId, Slug, SlugKind, SlugService},
    },
};

/// Generate a slug for `label` and hand it to `persist`.
///
/// The existence check and the write are not atomic, so a concurrent writer may
/// commit the same slug first. Storage reports that as [`DomainError::DuplicateSlug`];
/// the search then resumes after the suffix that lost. Any other error is returned
/// as is. Once `max_attempts` writes have lost, the caller gets a retryable
/// `Conflict`.
pub async fn persist_with_unique_slug<T, F, Fut>(
    slug_service: &SlugService,
    label: &str,
    kind: SlugKind,
    exclude_id: Option<EntityId>,
    max_attempts: u32,
    mut persist: F,
) -> ApplicationResult<T>
where
    F: FnMut(Slug) -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let max_attempts = max_attempts.max(1);
    let mut candidate = slug_service
        .generate_candidate(label, kind, exclude_id)
        .await?;

    for attempt in 1..=max_attempts {
        match persist(candidate.slug().clone()).await {
            Ok(saved) => return Ok(saved),
            Err(DomainError::DuplicateSlug(detail)) => {
                warn!(
                    kind = %kind,
                    slug = %candidate.slug(),
                    attempt,
                    max_attempts,
                    detail = %detail,
                    "slug claimed by a concurrent write"
                );
                if attempt == max_attempts {
                    break;
                }
                candidate = slug_service
                    .first_free_from(kind, candidate.base(), exclude_id, candidate.suffix() + 1)
                    .await?;
            }
            Err(other) => return Err(other.into()),
        }
    }

    Err(ApplicationError::conflict(format!(
        "could not reserve a unique {kind} slug, please retry"
    )))
}
