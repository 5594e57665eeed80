//! Error types for the Quire post store.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by slug handling and post store operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No post exists with the requested slug.
    #[error("post not found: {0}")]
    NotFound(String),

    /// Another post already owns this slug.
    #[error("a post with slug '{0}' already exists")]
    DuplicateSlug(String),

    /// The title normalizes to an empty slug (blank or punctuation-only).
    #[error("title does not produce a usable slug")]
    EmptySlug,

    /// A caller-supplied slug is not lowercase kebab-case.
    #[error("invalid slug '{0}': must be lowercase kebab-case")]
    InvalidSlug(String),

    /// The post itself is malformed (e.g. blank title).
    #[error("invalid post: {0}")]
    InvalidPost(&'static str),

    /// The backing SQLite database failed.
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] rusqlite::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::PersistenceUnavailable(_))
    }
}
