use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::Resource;
use serde_json::json;
use thiserror::Error;

/// Ошибки шлюза данных
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Record {id} not found in {resource}")]
    NotFound { resource: Resource, id: String },

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// Удалённый API ответил ошибкой; статус передаётся клиенту как есть
    #[error("Upstream responded with {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Upstream request failed: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownResource(_) | ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Network(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::warn!("{}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::UnknownResource("flats".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::NotFound {
                resource: Resource::Buildings,
                id: "b1".into()
            }
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Network("x".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ApiError::Upstream {
                status: StatusCode::UNAUTHORIZED,
                message: "token expired".into()
            }
            .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        let response = ApiError::NotFound {
            resource: Resource::Tools,
            id: "t9".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Record t9 not found in tools");
    }
}
