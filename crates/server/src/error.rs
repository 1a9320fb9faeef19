//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server faults to Sentry
//! before responding to the client. Every error is rendered as the lookup
//! error body: `{"status": "error", "errormessage": "..."}`.

use address_book_core::{LookupResponse, NOT_FOUND_MESSAGE, ValidationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::provider::ProviderError;

/// Application-level error type for the lookup server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Query parameters failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The provider had no candidates.
    #[error("No results found!")]
    NotFound,

    /// The provider failed.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Provider(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Validation(err) => err.to_string(),
            Self::NotFound => NOT_FOUND_MESSAGE.to_string(),
            Self::Provider(_) => "Internal server error".to_string(),
        };

        (self.status(), Json(LookupResponse::error(message))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, LookupResponse) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::from(ValidationError::PostcodeTooShort).to_string(),
            "Postcode must be at least 4 digits!"
        );
        assert_eq!(AppError::NotFound.to_string(), NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let (status, body) = render(ValidationError::MissingFields.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            LookupResponse::error("Postcode and street number fields mandatory!")
        );
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (status, body) = render(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, LookupResponse::error("No results found!"));
    }

    #[tokio::test]
    async fn test_provider_error_hides_details() {
        let err = ProviderError::Unavailable("db password rejected".to_string());
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, LookupResponse::error("Internal server error"));
    }
}
