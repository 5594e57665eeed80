//! Quire Web - server-rendered HTML front end for Quire posts.
//!
//! # Architecture
//!
//! - **State**: the opened [`PostStore`](quire_core::PostStore) plus configuration
//! - **Routes**: thin handlers that call the store and hand results to the renderer
//! - **Render**: HTML pages using maud (compile-time templates)
//!
//! # URL Pattern
//!
//! ```text
//! GET  /                 listing
//! GET  /posts/{slug}     one post
//! GET  /compose          form
//! POST /compose          create, then 303 to /
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Strict Content-Security-Policy: no JavaScript execution, forms post to self
//! - X-Frame-Options: DENY prevents clickjacking

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::WebError;
pub use routes::router;
pub use state::AppState;
