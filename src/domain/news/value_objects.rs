use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::EntityId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsId(pub i64);

impl NewsId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("news id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NewsId> for i64 {
    fn from(value: NewsId) -> Self {
        value.0
    }
}

impl From<NewsId> for EntityId {
    fn from(value: NewsId) -> Self {
        EntityId(value.0)
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTitle(String);

impl NewsTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NewsTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NewsTitle> for String {
    fn from(value: NewsTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsContent(String);

impl NewsContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NewsContent> for String {
    fn from(value: NewsContent) -> Self {
        value.0
    }
}

/// Absolute `http(s)` reference to an externally hosted cover picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage(String);

impl CoverImage {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.chars().any(char::is_whitespace) => {
                Ok(Self(value))
            }
            _ => Err(DomainError::Validation(
                "cover image must be an http(s) URL".into(),
            )),
        }
    }

    /// Blank input means "no cover".
    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(v) if !v.trim().is_empty() => Self::new(v).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CoverImage> for String {
    fn from(value: CoverImage) -> Self {
        value.0
    }
}
