use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sitewatch_retention::RetentionError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Retention(#[from] RetentionError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Retention(RetentionError::CollectionNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Retention(RetentionError::InvalidPolicy(_)) => StatusCode::BAD_REQUEST,
            ApiError::Retention(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Admin request failed: {}", self);
        }

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
