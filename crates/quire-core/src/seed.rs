//! First-run seeding so the listing page is never empty.

use metrics::counter;

use crate::error::Result;
use crate::post::NewPost;
use crate::store::PostStore;

/// Title of the post inserted into an empty store.
pub const DEFAULT_SEED_TITLE: &str = "blog-1";

const DEFAULT_SEED_DETAIL: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// The posts inserted into a fresh store.
pub fn default_seed_posts() -> Vec<NewPost> {
    vec![NewPost::new(DEFAULT_SEED_TITLE, DEFAULT_SEED_DETAIL)]
}

/// Insert `seeds` if, and only if, the store holds no posts.
///
/// Returns the number of posts inserted.
pub fn seed_if_empty(store: &dyn PostStore, seeds: Vec<NewPost>) -> Result<usize> {
    if !store.is_empty()? {
        tracing::debug!("post store already populated, skipping seed");
        return Ok(0);
    }

    let inserted = store.insert_many(seeds)?.len();
    counter!("quire_posts_seeded_total").increment(inserted as u64);
    tracing::info!(count = inserted, "seeded empty post store");
    Ok(inserted)
}
