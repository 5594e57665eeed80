//! Write path: the compose form and its submission.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use maud::Markup;
use serde::Deserialize;

use quire_core::NewPost;

use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// Fields submitted by the compose form.
///
/// Missing fields deserialize as empty strings so that an incomplete
/// submission is reported as an invalid post rather than a form rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeForm {
    /// Post title.
    #[serde(default)]
    pub item: String,
    /// Post body.
    #[serde(default, rename = "postText")]
    pub post_text: String,
}

/// `GET /compose`
pub async fn compose_form(State(state): State<AppState>) -> Markup {
    render::compose::render(&state.config.site_name)
}

/// `POST /compose`
///
/// Creates the post and redirects to the listing (303). Invalid titles and
/// slug collisions are rendered as error pages with 400 and 409.
pub async fn submit_post(
    State(state): State<AppState>,
    Form(form): Form<ComposeForm>,
) -> Result<Redirect, WebError> {
    let post = NewPost::new(form.item, form.post_text);
    match state.store.insert(post) {
        Ok(id) => {
            tracing::info!(%id, "post published");
            Ok(Redirect::to("/"))
        }
        Err(err) => {
            if err.is_client_error() {
                tracing::info!(error = %err, "post rejected");
            }
            Err(err.into())
        }
    }
}
