//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two endpoints carry the whole application: the static host page at `/`
//! (an HTML form plus client-side chart rendering) and `POST /calculate`,
//! which turns a form payload into a figure description. Everything is
//! stateless; there is no shared app state to inject.

pub mod calculate;

use std::path::PathBuf;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Resolve the directory holding the host page and its assets.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

/// Build the application router.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/calculate", post(calculate::calculate))
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(static_dir()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}
