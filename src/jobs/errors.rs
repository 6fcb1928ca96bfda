//! Job collection errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ApiError;

/// Errors surfaced by the job collection controller.
///
/// Backend status codes are folded into the client-side taxonomy; anything
/// without a dedicated meaning passes through as the underlying gateway
/// error.
#[derive(Debug, Error)]
pub enum JobsError {
    /// The referenced job id is unknown to the backend.
    #[error("job not found")]
    NotFound,

    /// The session token is missing, expired, or rejected.
    #[error("not authorized; log in again")]
    Unauthorized,

    /// The backend rejected the submitted job fields.
    #[error("invalid job data: {0}")]
    InvalidData(String),

    /// Any other gateway failure, including connectivity loss.
    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for JobsError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(StatusCode::UNAUTHORIZED) => Self::Unauthorized,
            Some(StatusCode::NOT_FOUND) => Self::NotFound,
            Some(StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY) => {
                Self::InvalidData(error.to_string())
            }
            Some(_) | None => Self::Api(error),
        }
    }
}
