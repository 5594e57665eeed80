//! Post persistence.
//!
//! [`PostStore`] is the contract the web layer programs against;
//! [`SqliteStore`] implements it on a single SQLite connection. Slug
//! uniqueness is enforced by a `UNIQUE` constraint, so two racing inserts of
//! the same title cannot both succeed: the loser gets
//! [`Error::DuplicateSlug`].

use std::path::Path;

use metrics::counter;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::post::{NewPost, Post, PostId};
use crate::schema::init_schema;

/// Persistence operations for posts.
pub trait PostStore: Send + Sync {
    /// Persist a post, deriving its slug from the title when none is given.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPost`] if the title is blank
    /// - [`Error::InvalidSlug`] if an explicit slug is not kebab-case
    /// - [`Error::EmptySlug`] if the title derives to an empty slug
    /// - [`Error::DuplicateSlug`] if the slug is already taken
    fn insert(&self, post: NewPost) -> Result<PostId>;

    /// Persist several posts atomically. Either all are stored or none are.
    fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<PostId>>;

    /// All posts in insertion order.
    fn find_all(&self) -> Result<Vec<Post>>;

    /// Exact-match lookup by slug.
    fn find_by_slug(&self, slug: &str) -> Result<Option<Post>>;

    /// Number of stored posts.
    fn count(&self) -> Result<u64>;

    /// Whether the store holds no posts.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    /// Like [`find_by_slug`](Self::find_by_slug), but a miss is an
    /// [`Error::NotFound`].
    fn find_by_slug_or_not_found(&self, slug: &str) -> Result<Post> {
        self.find_by_slug(slug)?
            .ok_or_else(|| Error::NotFound(slug.to_string()))
    }
}

/// SQLite-backed post store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialize the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        init_schema(&conn)?;

        tracing::info!(path = %path.display(), "post store opened");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Close the underlying connection, surfacing any error SQLite reports.
    pub fn close(self) -> Result<()> {
        self.conn
            .into_inner()
            .close()
            .map_err(|(_, err)| Error::PersistenceUnavailable(err))?;
        tracing::info!("post store closed");
        Ok(())
    }
}

impl PostStore for SqliteStore {
    fn insert(&self, post: NewPost) -> Result<PostId> {
        let slug = post.resolve_slug().inspect_err(|_| {
            counter!("quire_posts_rejected_total").increment(1);
        })?;

        let conn = self.conn.lock();
        let id = insert_row(&conn, &post, &slug)?;
        counter!("quire_posts_created_total").increment(1);
        Ok(id)
    }

    fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<PostId>> {
        let resolved = posts
            .iter()
            .map(|post| post.resolve_slug().map(|slug| (post, slug)))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|_| {
                counter!("quire_posts_rejected_total").increment(1);
            })?;

        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(resolved.len());
        for (post, slug) in resolved {
            ids.push(insert_row(&tx, post, &slug)?);
        }
        tx.commit()?;

        counter!("quire_posts_created_total").increment(ids.len() as u64);
        Ok(ids)
    }

    fn find_all(&self) -> Result<Vec<Post>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT id, title, detail, slug FROM posts ORDER BY id")?;
        let posts = stmt
            .query_map([], post_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(posts)
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let conn = self.conn.lock();
        let post = conn
            .query_row(
                "SELECT id, title, detail, slug FROM posts WHERE slug = ?",
                [slug],
                post_from_row,
            )
            .optional()?;
        Ok(post)
    }

    fn count(&self) -> Result<u64> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

/// Insert one row, translating a slug collision into [`Error::DuplicateSlug`].
fn insert_row(conn: &Connection, post: &NewPost, slug: &str) -> Result<PostId> {
    let res = conn.execute(
        "INSERT INTO posts (title, detail, slug) VALUES (?1, ?2, ?3)",
        rusqlite::params![post.title, post.detail, slug],
    );

    match res {
        Ok(_) => {
            let id = PostId(conn.last_insert_rowid());
            tracing::debug!(%id, slug, "post inserted");
            Ok(id)
        }
        Err(err) if is_unique_violation(&err) => {
            counter!("quire_post_conflicts_total").increment(1);
            tracing::debug!(slug, "slug already taken");
            Err(Error::DuplicateSlug(slug.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: PostId(row.get(0)?),
        title: row.get(1)?,
        detail: row.get(2)?,
        slug: row.get(3)?,
    })
}
