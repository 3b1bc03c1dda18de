use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error};

/// Failures of a lead submission, one per HTTP outcome.
///
/// The display strings are the exact `error` values returned to the client;
/// details stay in the server log.
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Name and phone are required")]
    MissingFields,

    #[error("Server configuration error")]
    NotConfigured,

    #[error("Failed to send notification")]
    Upstream(#[source] anyhow::Error),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl LeadError {
    pub fn status(&self) -> StatusCode {
        match self {
            LeadError::MissingFields => StatusCode::BAD_REQUEST,
            LeadError::NotConfigured | LeadError::Upstream(_) | LeadError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        match &self {
            LeadError::MissingFields => debug!("Lead rejected: missing name or phone"),
            LeadError::NotConfigured => error!("Telegram credentials not configured"),
            LeadError::Upstream(e) => error!("Telegram API error: {:#}", e),
            LeadError::Internal(e) => error!("Lead API error: {:#}", e),
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: LeadError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_fields_is_400() {
        let (status, body) = body_of(LeadError::MissingFields).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Name and phone are required" }));
    }

    #[tokio::test]
    async fn test_not_configured_is_generic_500() {
        let (status, body) = body_of(LeadError::NotConfigured).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server configuration error");
    }

    #[tokio::test]
    async fn test_upstream_hides_details() {
        let err = LeadError::Upstream(anyhow::anyhow!("Telegram API error (400): chat not found"));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Failed to send notification" }));
    }

    #[tokio::test]
    async fn test_internal_is_generic_500() {
        let (status, body) = body_of(LeadError::Internal(anyhow::anyhow!("bad json"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error;
        let err = LeadError::Upstream(anyhow::anyhow!("boom"));
        assert_eq!(err.source().unwrap().to_string(), "boom");
    }
}
