//! Pipeline errors and their HTTP rendering

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::conversations::types::SUPPORTED_TARGET_LANGUAGES;

/// Failures of a single chat request.
/// Upstream variants display the collaborator's own message unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Unsupported target language '{0}'. Choose one of: {}", SUPPORTED_TARGET_LANGUAGES.join(", "))]
    UnsupportedTargetLanguage(String),

    #[error("{0}")]
    Translation(anyhow::Error),

    #[error("{0}")]
    Inference(anyhow::Error),

    #[error("{0}")]
    Transliteration(anyhow::Error),
}

impl ChatError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ChatError::EmptyMessage | ChatError::UnsupportedTargetLanguage(_))
    }
}

/// API error type, rendered as `{"detail": ...}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.message }))).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        if err.is_client_error() {
            ApiError::bad_request(err.to_string())
        } else {
            ApiError::internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected chat body: {}", rejection.body_text());
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err: ApiError = ChatError::UnsupportedTargetLanguage("french".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "Unsupported target language 'french'. Choose one of: english, hindi, hinglish, all"
        );

        let err: ApiError = ChatError::EmptyMessage.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_errors_keep_raw_message() {
        let err: ApiError = ChatError::Inference(anyhow::anyhow!("connection refused")).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "connection refused");
    }
}
