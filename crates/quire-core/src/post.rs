//! The post entity.

use std::fmt;

/// Store-assigned post identifier. Increases with insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Store-assigned identifier.
    pub id: PostId,
    /// Display title.
    pub title: String,
    /// Body text.
    pub detail: String,
    /// Unique URL path segment, fixed at creation.
    pub slug: String,
}

/// A post that has not been persisted yet.
///
/// When `slug` is `None` the store derives it from `title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub detail: String,
    pub slug: Option<String>,
}

impl NewPost {
    /// Create a post whose slug will be derived from its title.
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            slug: None,
        }
    }

    /// Use an explicit slug instead of deriving one.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Resolve the slug this post will be stored under.
    ///
    /// Rejects a blank title, a malformed explicit slug, and a title that
    /// derives to nothing.
    pub fn resolve_slug(&self) -> crate::Result<String> {
        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidPost("title is required"));
        }

        match &self.slug {
            Some(explicit) if crate::slug::is_valid(explicit) => Ok(explicit.clone()),
            Some(explicit) => Err(crate::Error::InvalidSlug(explicit.clone())),
            None => {
                let derived = crate::slug::derive(&self.title);
                if derived.is_empty() {
                    Err(crate::Error::EmptySlug)
                } else {
                    Ok(derived)
                }
            }
        }
    }
}
