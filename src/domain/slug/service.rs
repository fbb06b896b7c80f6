// src/domain/slug/service.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::util::Slugifier;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::repository::SluggableRepository;
use crate::domain::slug::value_objects::{EntityId, Slug, SlugKind};

/// A free slug together with the base and numeric suffix it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCandidate {
    base: String,
    suffix: u64,
    slug: Slug,
}

impl SlugCandidate {
    pub fn base(&self) -> &str {
        &self.base
    }

    /// 0 for the bare base, `n` for `base-n`.
    pub fn suffix(&self) -> u64 {
        self.suffix
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn into_slug(self) -> Slug {
        self.slug
    }
}

/// Domain service that turns display labels into slugs that are unique within their kind.
pub struct SlugService {
    repo: Arc<dyn SluggableRepository>,
    slugifier: Arc<dyn Slugifier>,
}

impl SlugService {
    pub fn new(repo: Arc<dyn SluggableRepository>, slugifier: Arc<dyn Slugifier>) -> Self {
        Self { repo, slugifier }
    }

    pub async fn generate_unique_slug(
        &self,
        label: &str,
        kind: SlugKind,
        exclude_id: Option<EntityId>,
    ) -> DomainResult<Slug> {
        Ok(self
            .generate_candidate(label, kind, exclude_id)
            .await?
            .into_slug())
    }

    pub async fn generate_candidate(
        &self,
        label: &str,
        kind: SlugKind,
        exclude_id: Option<EntityId>,
    ) -> DomainResult<SlugCandidate> {
        let base = self.base_slug(label, kind)?;
        self.first_free_from(kind, &base, exclude_id, 0).await
    }

    /// The stored slug of row `id` when `new_label` names it the same way (surrounding
    /// whitespace ignored), or `None` when the label changed and a new slug is due.
    pub async fn kept_slug(
        &self,
        kind: SlugKind,
        id: EntityId,
        new_label: &str,
    ) -> DomainResult<Option<Slug>> {
        let current = self
            .repo
            .find_by_identifier(kind, id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("{kind} not found")))?;

        if current.label.trim() == new_label.trim() {
            return Ok(Some(current.slug));
        }
        Ok(None)
    }

    /// Normalised base for `label`, before any collision suffix.
    pub fn base_slug(&self, label: &str, kind: SlugKind) -> DomainResult<String> {
        if label.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "{kind} label cannot be empty"
            )));
        }

        let base = sanitize(&self.slugifier.slugify(label));
        if base.is_empty() {
            return Ok(fallback_base(kind));
        }
        Ok(base)
    }

    /// Walk `base-start`, `base-(start+1)`, ... (suffix 0 means the bare base) and
    /// return the first candidate no other row of `kind` holds.
    pub async fn first_free_from(
        &self,
        kind: SlugKind,
        base: &str,
        exclude_id: Option<EntityId>,
        start: u64,
    ) -> DomainResult<SlugCandidate> {
        let mut suffix = start;

        loop {
            let slug = Slug::new(candidate(base, suffix))?;
            if !self.repo.exists_by_slug(kind, &slug, exclude_id).await? {
                return Ok(SlugCandidate {
                    base: base.to_string(),
                    suffix,
                    slug,
                });
            }
            tracing::debug!(kind = %kind, slug = %slug, "slug taken, trying next suffix");
            suffix += 1;
        }
    }
}

fn candidate(base: &str, suffix: u64) -> String {
    if suffix == 0 {
        base.to_string()
    } else {
        format!("{base}-{suffix}")
    }
}

fn fallback_base(kind: SlugKind) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}-{}", kind.as_str(), &token[..8])
}

/// Lowercase, keep `[a-z0-9]`, fold every other run into a single hyphen.
fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_hyphen = false;

    for c in raw.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out
}
