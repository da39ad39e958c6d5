//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the directory API routes with the landing-page redirect and the
/// static asset service rooted at `static_dir`. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/static/index.html")
}

async fn health_check() -> &'static str {
    "OK"
}
