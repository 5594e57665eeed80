//! Route definitions for the Quire web front end.
//!
//! ## Routes
//!
//! - `GET /` - All posts
//! - `GET /posts/{slug}` - Single post (404 if unknown)
//! - `GET /about`, `GET /contact` - Fixed pages
//! - `GET /compose` - Submission form
//! - `POST /compose` - Create a post, redirect to `/`
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - anything else - Static assets from the configured directory

mod compose;
mod health;
mod pages;
mod posts;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::render::components::CSP_HEADER;
use crate::state::AppState;

/// Browser cache lifetime for static assets (one year).
const STATIC_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    let assets: Router = Router::new()
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(middleware::map_response(add_static_cache_headers));

    Router::new()
        .route("/", get(posts::list_posts))
        .route("/posts/{slug}", get(posts::show_post))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route(
            "/compose",
            get(compose::compose_form).post(compose::submit_post),
        )
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .fallback_service(assets)
        .layer(middleware::map_response(add_security_headers))
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

/// Security headers on every response.
async fn add_security_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );
    response
}

/// Long-lived caching for static assets that were actually found.
async fn add_static_cache_headers(mut response: Response) -> Response {
    if response.status().is_success() {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use quire_core::{NewPost, PostStore, SqliteStore};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn test_config(static_dir: &Path) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            database_path: ":memory:".into(),
            static_dir: static_dir.to_path_buf(),
            site_name: "My Blog".to_string(),
            seed_on_start: false,
            metrics_port: None,
        }
    }

    /// Router over an in-memory store; the temp dir holds static assets.
    fn test_app() -> (Router, Arc<SqliteStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("css")).unwrap();
        std::fs::write(dir.path().join("css/styles.css"), "body{color:red}").unwrap();

        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let state = AppState::new(store.clone(), test_config(dir.path()));
        (router(state), store, dir)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn post_form(app: &Router, body: &'static str) -> Response {
        app.clone()
            .oneshot(
                Request::post("/compose")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn compose_then_list_then_view() {
        let (app, _store, _dir) = test_app();

        let response = post_form(&app, "item=Blog+Two&postText=content").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let (status, _, listing) = get(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(listing.contains(r#"href="/posts/blog-two""#));

        let (status, _, page) = get(&app, "/posts/blog-two").await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("<title>Blog Two | My Blog</title>"));
        assert!(page.contains(r#"name="description" content="content""#));
    }

    #[tokio::test]
    async fn long_body_description_is_capped() {
        let (app, store, _dir) = test_app();
        let body = "a".repeat(400);
        store.insert(NewPost::new("Long One", body)).unwrap();

        let (status, _, page) = get(&app, "/posts/long-one").await;
        assert_eq!(status, StatusCode::OK);
        let expected = format!(r#"name="description" content="{}""#, "a".repeat(150));
        assert!(page.contains(&expected));
    }

    #[tokio::test]
    async fn unknown_slug_is_404() {
        let (app, _store, _dir) = test_app();
        let (status, _, body) = get(&app, "/posts/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Post not found"));
    }

    #[tokio::test]
    async fn duplicate_title_is_conflict() {
        let (app, store, _dir) = test_app();

        let first = post_form(&app, "item=Same+Title&postText=one").await;
        assert_eq!(first.status(), StatusCode::SEE_OTHER);

        let second = post_form(&app, "item=same+title%21&postText=two").await;
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let post = store.find_by_slug("same-title").unwrap().unwrap();
        assert_eq!(post.detail, "one");
        assert_eq!(store.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn blank_or_missing_title_is_bad_request() {
        let (app, store, _dir) = test_app();

        for body in ["item=&postText=text", "postText=text", "item=%3F%21&postText=text"] {
            let response = post_form(&app, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        }
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn static_pages_render() {
        let (app, _store, _dir) = test_app();

        let (status, _, about) = get(&app, "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(about.contains(crate::render::pages::ABOUT_CONTENT));

        let (status, _, contact) = get(&app, "/contact").await;
        assert_eq!(status, StatusCode::OK);
        assert!(contact.contains(crate::render::pages::CONTACT_CONTENT));

        let (status, _, form) = get(&app, "/compose").await;
        assert_eq!(status, StatusCode::OK);
        assert!(form.contains(r#"name="postText""#));
    }

    #[tokio::test]
    async fn security_headers_on_every_response() {
        let (app, _store, _dir) = test_app();

        for uri in ["/", "/posts/missing", "/css/styles.css"] {
            let (_, headers, _) = get(&app, uri).await;
            assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY", "{uri}");
            assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff", "{uri}");
            assert_eq!(headers[header::CONTENT_SECURITY_POLICY], CSP_HEADER, "{uri}");
            assert_eq!(headers[header::REFERRER_POLICY], "no-referrer", "{uri}");
        }
    }

    #[tokio::test]
    async fn html_is_gzipped_when_accepted() {
        let (app, _store, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::get("/")
                    .header(header::ACCEPT_ENCODING, "gzip")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");

        let (_, headers, _) = get(&app, "/").await;
        assert!(headers.get(header::CONTENT_ENCODING).is_none());
    }

    /// A store whose every operation fails as if the database were gone.
    struct UnavailableStore;

    impl PostStore for UnavailableStore {
        fn insert(&self, _post: NewPost) -> quire_core::Result<quire_core::PostId> {
            Err(unavailable())
        }

        fn insert_many(&self, _posts: Vec<NewPost>) -> quire_core::Result<Vec<quire_core::PostId>> {
            Err(unavailable())
        }

        fn find_all(&self) -> quire_core::Result<Vec<quire_core::Post>> {
            Err(unavailable())
        }

        fn find_by_slug(&self, _slug: &str) -> quire_core::Result<Option<quire_core::Post>> {
            Err(unavailable())
        }

        fn count(&self) -> quire_core::Result<u64> {
            Err(unavailable())
        }
    }

    fn unavailable() -> quire_core::Error {
        quire_core::Error::PersistenceUnavailable(quire_core::rusqlite::Error::InvalidQuery)
    }

    #[tokio::test]
    async fn unavailable_store_is_503() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Arc::new(UnavailableStore), test_config(dir.path()));
        let app = router(state);

        for uri in ["/", "/posts/anything", "/health"] {
            let (status, _, _) = get(&app, uri).await;
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{uri}");
        }

        let response = post_form(&app, "item=Title&postText=body").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn static_assets_served_with_long_cache() {
        let (app, _store, _dir) = test_app();

        let (status, headers, body) = get(&app, "/css/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{color:red}");
        assert_eq!(headers[header::CACHE_CONTROL], STATIC_CACHE_CONTROL);

        let (status, headers, _) = get(&app, "/css/missing.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(headers.get(header::CACHE_CONTROL).is_none());
    }

    #[tokio::test]
    async fn health_reports_post_count() {
        let (app, store, _dir) = test_app();
        store.insert(NewPost::new("Counted", "")).unwrap();

        let (status, _, body) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""status":"ok""#));
        assert!(body.contains(r#""posts":1"#));
    }

    #[tokio::test]
    async fn robots_allows_all() {
        let (app, _store, _dir) = test_app();
        let (status, _, body) = get(&app, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Allow: /"));
    }
}
