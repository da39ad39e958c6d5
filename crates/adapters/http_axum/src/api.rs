//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod activities;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::state::AppState;

/// Build the activity directory sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(activities::list))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route(
            "/activities/{activity_name}/participants",
            delete(activities::unregister),
        )
}
