//! Server configuration for LeadLab.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Maximum number of leads returned by the listing endpoint.
    pub list_limit: usize,
    /// Allowed CORS origins. `["*"]` means any origin.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (hosting convention, binds to `0.0.0.0`)
    /// - `LEADLAB_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `LEADLAB_LOG_LEVEL` — log filter (default: `info`)
    /// - `LEADLAB_LIST_LIMIT` — cap on `GET /api/leads` results (default: `1000`)
    /// - `LEADLAB_CORS_ORIGINS` — comma-separated allowed origins (default: `*`)
    #[must_use]
    pub fn from_env() -> Self {
        // Priority: LEADLAB_BIND_ADDR > PORT > default 127.0.0.1:8080
        let bind_addr = if let Ok(addr) = std::env::var("LEADLAB_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8080);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 8080))
        };

        let log_level =
            std::env::var("LEADLAB_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        let list_limit = std::env::var("LEADLAB_LIST_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let cors_origins = std::env::var("LEADLAB_CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_owned())
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            bind_addr,
            log_level,
            list_limit,
            cors_origins,
        }
    }
}
