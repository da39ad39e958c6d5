//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mergington_domain::error::DirectoryError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps [`DirectoryError`] to an HTTP response with appropriate status code.
pub struct ApiError(DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DirectoryError::Validation(_) | DirectoryError::Conflict(_) => StatusCode::BAD_REQUEST,
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        tracing::debug!(error = %self.0, status = %status, "request rejected");

        (
            status,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use mergington_domain::error::{ConflictError, NotFoundError};

    #[test]
    fn should_map_not_found_to_404() {
        let response =
            ApiError::from(DirectoryError::from(NotFoundError::Activity)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_conflict_to_400() {
        let response =
            ApiError::from(DirectoryError::from(ConflictError::AlreadyEnrolled)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_error_display_string_as_detail_body() {
        let response =
            ApiError::from(DirectoryError::from(NotFoundError::Participant)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body["detail"], "Student is not signed up for this activity");
    }
}
