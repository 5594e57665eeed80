//! Error types for the web front end.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, PreEscaped, html};

/// Web layer error type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// A post store operation failed.
    #[error(transparent)]
    Store(#[from] quire_core::Error),

    /// Internal server error (rendering, runtime, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl WebError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        use quire_core::Error;

        match self {
            Self::Store(Error::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(Error::DuplicateSlug(_)) => StatusCode::CONFLICT,
            Self::Store(Error::EmptySlug | Error::InvalidSlug(_) | Error::InvalidPost(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(Error::PersistenceUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        use quire_core::Error;

        let status = self.status();
        let (title, message) = match &self {
            Self::Store(Error::NotFound(_)) => ("Not Found", "Post not found".to_string()),
            Self::Store(Error::DuplicateSlug(slug)) => (
                "Already Exists",
                format!("A post at /posts/{slug} already exists. Choose a different title."),
            ),
            Self::Store(Error::EmptySlug) => (
                "Invalid Title",
                "The title needs at least one letter or digit.".to_string(),
            ),
            Self::Store(err @ (Error::InvalidSlug(_) | Error::InvalidPost(_))) => {
                ("Invalid Post", err.to_string())
            }
            Self::Store(Error::PersistenceUnavailable(err)) => {
                tracing::error!(error = %err, "post store error");
                (
                    "Service Unavailable",
                    "The post store is temporarily unavailable. Please try again later."
                        .to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to all posts" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
