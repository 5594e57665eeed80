//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3000").
    pub bind_addr: String,

    /// Path to the SQLite post database.
    pub database_path: PathBuf,

    /// Directory served for static assets (stylesheets, images).
    pub static_dir: PathBuf,

    /// Site name appended to page titles ("{title} | {site_name}").
    pub site_name: String,

    /// Insert the default post when the store is empty at startup.
    pub seed_on_start: bool,

    /// Port for the Prometheus `/metrics` endpoint. Disabled when `None`.
    pub metrics_port: Option<u16>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `QUIRE_BIND_ADDR`: Server bind address (default: "0.0.0.0:3000")
    /// - `QUIRE_DATABASE_PATH`: SQLite file (default: "quire.db")
    /// - `QUIRE_STATIC_DIR`: Static asset directory (default: "public")
    /// - `QUIRE_SITE_NAME`: Site name (default: "My Blog")
    /// - `QUIRE_SEED_ON_START`: Seed an empty store (default: true)
    /// - `QUIRE_METRICS_PORT`: Prometheus port (default: disabled)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("QUIRE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        if bind_addr.trim().is_empty() {
            anyhow::bail!("QUIRE_BIND_ADDR must not be empty");
        }

        let database_path = std::env::var("QUIRE_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("quire.db"));

        let static_dir = std::env::var("QUIRE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let site_name =
            std::env::var("QUIRE_SITE_NAME").unwrap_or_else(|_| "My Blog".to_string());

        let seed_on_start = match std::env::var("QUIRE_SEED_ON_START") {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                anyhow::anyhow!("QUIRE_SEED_ON_START must be true or false, got {raw:?}")
            })?,
            Err(_) => true,
        };

        let metrics_port = match std::env::var("QUIRE_METRICS_PORT") {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                anyhow::anyhow!("QUIRE_METRICS_PORT must be a port number, got {raw:?}: {e}")
            })?),
            Err(_) => None,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            database_path = %database_path.display(),
            static_dir = %static_dir.display(),
            site_name = %site_name,
            seed_on_start,
            metrics_port = ?metrics_port,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_path,
            static_dir,
            site_name,
            seed_on_start,
            metrics_port,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
