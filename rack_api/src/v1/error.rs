use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rack_core::{RackId, RackIdParseError, ValidationError};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("rack data is still loading")]
    Loading,
    #[error("rack data could not be loaded: {0}")]
    IngestFailed(String),
    #[error("rack {0} not found")]
    RackNotFound(RackId),
    #[error("rack {0} is not a favorite")]
    FavoriteNotFound(RackId),
    #[error(transparent)]
    InvalidId(#[from] RackIdParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = match &self {
            ApiError::Loading => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::IngestFailed(e) => {
                warn!(error = %e, "request rejected, rack feed ingestion failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::RackNotFound(id) | ApiError::FavoriteNotFound(id) => {
                debug!(rack_id = %id, "not found");
                StatusCode::NOT_FOUND
            }
            ApiError::InvalidId(e) => {
                debug!(error = %e, "invalid rack id in path");
                StatusCode::BAD_REQUEST
            }
            ApiError::Validation(e) => {
                debug!(error = %e, "invalid rack draft");
                StatusCode::BAD_REQUEST
            }
        };
        ErrorMessage::from((status, message)).into_response()
    }
}

fn serialize_status<S>(value: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(value.as_u16())
}

impl From<(StatusCode, String)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, String)) -> Self {
        Self {
            status_code,
            message,
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
