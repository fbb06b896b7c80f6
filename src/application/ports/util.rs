// src/application/ports/util.rs

/// Turns a display label into a URL-friendly string. Output may still need sanitising.
pub trait Slugifier: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
