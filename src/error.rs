use crate::validation::ValidationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failure of a single API request.
///
/// Storage failures carry the store's own message. Whether one is the
/// client's fault (`Rejected`) or the server's (`Database`) depends on the
/// endpoint, so handlers pick the variant themselves.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Database(String),
}

impl ApiError {
    pub fn rejected(error: sqlx::Error) -> Self {
        ApiError::Rejected(error.to_string())
    }

    pub fn database(error: sqlx::Error) -> Self {
        ApiError::Database(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(msg) => {
                warn!("rejected input: {msg}");
                StatusCode::BAD_REQUEST
            }
            ApiError::Rejected(msg) => {
                warn!("statement rejected: {msg}");
                StatusCode::BAD_REQUEST
            }
            ApiError::Database(msg) => {
                error!("database error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(error.to_string())
    }
}
