//! Core types and persistence for Quire, a minimal publishing service.
//!
//! This crate provides:
//! - Slug derivation and validation ([`slug`])
//! - The [`Post`] entity and its unpersisted form [`NewPost`]
//! - The [`PostStore`] contract and its SQLite implementation
//! - First-run seeding of an empty store
//! - Prometheus metrics helpers
//! - Shared error types
//!
//! The one invariant this crate owns: a slug identifies at most one post.
//! A colliding insert fails with [`Error::DuplicateSlug`]; slugs are never
//! disambiguated with suffixes.

mod error;
pub mod metrics;
mod post;
pub mod schema;
pub mod seed;
pub mod slug;
mod store;

pub use error::{Error, Result};
// Re-exported so callers can name the source of `Error::PersistenceUnavailable`.
pub use rusqlite;
pub use post::{NewPost, Post, PostId};
pub use seed::{default_seed_posts, seed_if_empty};
pub use store::{PostStore, SqliteStore};
