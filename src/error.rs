// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures while relaying a chat message upstream. None of them are retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("token exchange failed with status {status}: {body}")]
    UpstreamAuth { status: u16, body: String },

    #[error("inference request failed with status {status}: {body}")]
    UpstreamInference { status: u16, body: String },

    #[error("unexpected upstream response: {0}")]
    ResponseShape(String),

    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AppError {
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::UpstreamAuth { status, .. } | AppError::UpstreamInference { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Transport(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(error = %self, status = status.as_u16(), "chat relay failed");

        let body = match self.upstream_status() {
            Some(upstream) => json!({ "error": self.to_string(), "upstream_status": upstream }),
            None => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let err = AppError::UpstreamAuth {
            status: 401,
            body: "invalid apikey".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.upstream_status(), Some(401));
        assert!(err.to_string().contains("invalid apikey"));

        let err = AppError::ResponseShape("missing access_token".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.upstream_status(), None);
    }
}
