use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::model_service::ModelError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    UpstreamUnavailable(String),

    #[error("{0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Replace a response-shape failure's internal detail with the
    /// endpoint's user-facing phrasing; other kinds pass through untouched.
    pub fn with_generic_failure(self, message: &str) -> Self {
        match self {
            AppError::MalformedResponse(detail) => {
                log::warn!("{message}: {detail}");
                AppError::MalformedResponse(message.to_string())
            }
            other => other,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("[{}] {}", self.error_code(), self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

/// The only place upstream-call failures become user-facing text. Handlers
/// never inspect error messages to pick a category.
impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Network(_) => AppError::UpstreamUnavailable(
                "Unable to connect to AI service. Please check your network connection and try again."
                    .to_string(),
            ),
            ModelError::Auth(_) => AppError::Configuration(
                "API configuration error. Please contact support.".to_string(),
            ),
            ModelError::Service(status, _) => AppError::UpstreamUnavailable(format!(
                "AI service returned an unexpected status ({status}). Please try again."
            )),
            ModelError::EmptyResponse => {
                AppError::MalformedResponse("AI service returned an empty response".to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
