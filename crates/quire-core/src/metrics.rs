//! Prometheus metrics for Quire.
//!
//! Counters are recorded through the `metrics` facade from wherever the
//! event happens (the store, the seed loader, request handlers). Without an
//! installed recorder they are no-ops, so nothing here is required for tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use quire_core::metrics::{init_metrics, start_metrics_server};
//!
//! let handle = init_metrics()?;
//! start_metrics_server(9091, handle).await?;
//! ```
//!
//! # Metric Naming Conventions
//!
//! - Prefix: `quire_`
//! - Suffix: unit or type (`_total` for counters)

use std::net::SocketAddr;

use axum::{Router, routing::get};
use metrics::describe_counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder and describe all Quire metrics.
///
/// Fails if a recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    register_metrics();
    Ok(handle)
}

/// Serve `GET /metrics` on `port` from a background task.
///
/// The listener is bound before returning, so a port conflict is reported
/// to the caller.
pub async fn start_metrics_server(
    port: u16,
    handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = Router::new().route(
        "/metrics",
        get(move || {
            let handle = handle.clone();
            async move { handle.render() }
        }),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Metrics server listening on http://{}/metrics", addr);

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!(error = %err, "metrics server stopped");
        }
    });

    Ok(())
}

fn register_metrics() {
    describe_counter!(
        "quire_posts_created_total",
        "Posts persisted (compose and seed)"
    );
    describe_counter!(
        "quire_post_conflicts_total",
        "Inserts rejected because the slug was already taken"
    );
    describe_counter!(
        "quire_posts_rejected_total",
        "Inserts rejected for a blank title or unusable slug"
    );
    describe_counter!("quire_post_views_total", "Post detail pages served");
    describe_counter!(
        "quire_posts_seeded_total",
        "Posts inserted by the first-run seed"
    );
}
