use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::features::reports::store::StorageError;
use crate::features::reports::validator::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data failed a schema constraint. Never reaches the store.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    /// The underlying store is unreachable or an operation against it failed.
    /// `message` is the client-facing text; the cause is only logged.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Error body shape shared by every failing endpoint: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Storage { message, source } => {
                tracing::error!("Storage error: {:?}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
