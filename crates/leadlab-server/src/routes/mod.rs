//! HTTP routes for the LeadLab API.
//!
//! Everything is served under `/api`; the binary nests [`router`] there and
//! layers tracing and CORS on top.

pub mod leads;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Build the API router (to be nested under `/api`).
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .merge(leads::router())
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

/// Greeting route, kept for uptime probes and the curious.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "LeadLab API - captura de leads para o site",
    })
}
