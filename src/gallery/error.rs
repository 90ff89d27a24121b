use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// User-correctable field errors, shown inline in the admin form.
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    /// The remote gallery store was unreachable or answered with a server
    /// error. Retrying is up to the user.
    #[error("gallery store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store rejected a request for a specific item id.
    #[error("gallery item {0} not found")]
    NotFound(i64),

    #[error("unexpected store response: {0}")]
    BadStoreResponse(String),

    /// Mutation attempted without a valid admin session cookie.
    #[error("admin session required")]
    Unauthorized,
}

impl From<reqwest::Error> for GalleryError {
    fn from(err: reqwest::Error) -> Self {
        GalleryError::StoreUnavailable(err.to_string())
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        let (status, error, errors) = match self {
            GalleryError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Submission failed validation".to_string(),
                errors,
            ),
            GalleryError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Admin session required".to_string(),
                Vec::new(),
            ),
            GalleryError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Gallery item {} not found", id),
                Vec::new(),
            ),
            GalleryError::StoreUnavailable(reason) => {
                tracing::warn!("gallery store unavailable: {}", reason);
                (
                    StatusCode::BAD_GATEWAY,
                    "Gallery store is temporarily unavailable".to_string(),
                    Vec::new(),
                )
            }
            GalleryError::BadStoreResponse(reason) => {
                tracing::error!("bad gallery store response: {}", reason);
                (
                    StatusCode::BAD_GATEWAY,
                    "Gallery store returned an unexpected response".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error, errors })).into_response()
    }
}
