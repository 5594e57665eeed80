//! Read paths: the post listing and single post pages.

use axum::extract::{Path, State};
use maud::Markup;

use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// `GET /`
pub async fn list_posts(State(state): State<AppState>) -> Result<Markup, WebError> {
    let posts = state.store.find_all()?;
    tracing::debug!(count = posts.len(), "listing posts");
    Ok(render::home::render(&posts, &state.config.site_name))
}

/// `GET /posts/{slug}`
///
/// An unknown slug is a 404 with a plain "Post not found" page.
pub async fn show_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Markup, WebError> {
    let post = state.store.find_by_slug_or_not_found(&slug)?;
    metrics::counter!("quire_post_views_total").increment(1);
    Ok(render::post::render(&post, &state.config.site_name))
}
