use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use service::errors::ServiceError;

/// HTTP-facing error. Every variant renders as a structured JSON body so the
/// client never sees a bare framework fault.
#[derive(Debug)]
pub enum ApiError {
    MissingFields { missing: Vec<&'static str> },
    InvalidParameter { message: String },
    PostNotFound { id: u64 },
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingFields { missing } => Self::MissingFields { missing },
            ServiceError::NotFound(id) => Self::PostNotFound { id },
            ServiceError::Model(inner) => Self::InvalidParameter { message: inner.to_string() },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingFields { missing } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing required fields", "missing": missing })),
            )
                .into_response(),
            Self::InvalidParameter { message } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::PostNotFound { id } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Post not found",
                    "message": format!("No post with id {id} was found."),
                })),
            )
                .into_response(),
        }
    }
}
