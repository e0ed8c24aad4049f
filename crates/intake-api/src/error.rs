use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use intake_types::api::{FaultResponse, FieldError, ValidationFailure};

/// Failures surfaced by the submit endpoint. Validation rejections
/// carry their field-level detail; anything unexpected is logged for
/// operators and reported generically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("submission rejected")]
    Rejected(Vec<FieldError>),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationFailure {
                    success: false,
                    errors,
                }),
            )
                .into_response(),
            Self::Internal(err) => {
                error!("POST /submit failed: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FaultResponse {
                        success: false,
                        message: "Internal server error.".to_owned(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
