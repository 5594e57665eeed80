//! Fixed informational pages.

use axum::extract::State;
use maud::Markup;

use crate::render;
use crate::state::AppState;

/// `GET /about`
pub async fn about(State(state): State<AppState>) -> Markup {
    render::pages::about(&state.config.site_name)
}

/// `GET /contact`
pub async fn contact(State(state): State<AppState>) -> Markup {
    render::pages::contact(&state.config.site_name)
}
