//! JSON handlers for the activity directory.
//!
//! The activity name is a literal path segment; axum hands it over
//! percent-decoded, so names with spaces ("Chess Club") match as-is.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use mergington_domain::catalog::Catalog;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters carrying the student identifier.
#[derive(Deserialize)]
pub struct StudentQuery {
    pub email: String,
}

/// Confirmation body returned on successful signup/unregister.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// `GET /activities`
pub async fn list(State(state): State<AppState>) -> Json<Catalog> {
    let catalog = state.directory.list_activities().await;
    Json(catalog)
}

/// `POST /activities/{activity_name}/signup?email={email}`
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<StudentQuery>,
) -> Result<Json<MessageBody>, ApiError> {
    state.directory.enroll(&activity_name, &query.email).await?;
    Ok(Json(MessageBody {
        message: format!("Signed up {} for {activity_name}", query.email),
    }))
}

/// `DELETE /activities/{activity_name}/participants?email={email}`
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<StudentQuery>,
) -> Result<Json<MessageBody>, ApiError> {
    state
        .directory
        .withdraw(&activity_name, &query.email)
        .await?;
    Ok(Json(MessageBody {
        message: format!("Unregistered {} from {activity_name}", query.email),
    }))
}
