use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bloom_core::admin::AuthError;
use bloom_core::content::ContentError;
use bloom_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error wrapping `anyhow::Error`.
///
/// The response status is picked by downcasting to the domain error types;
/// anything unrecognised is a 500. The body is always `{"detail": "..."}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.is::<ContentError>()
            || self.0.is::<JsonRejection>()
            || self.0.is::<QueryRejection>()
        {
            StatusCode::BAD_REQUEST
        } else if self.0.is::<AuthError>() {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn detail(&self) -> String {
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            rejection.body_text()
        } else if let Some(rejection) = self.0.downcast_ref::<QueryRejection>() {
            rejection.body_text()
        } else {
            self.0.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %detail, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %detail, "Request rejected");
        }

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(error: impl Into<anyhow::Error>) -> (StatusCode, serde_json::Value) {
        let response = AppError(error.into()).into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_404_with_detail() {
        let (status, body) = render(RepositoryError::NotFound {
            entity_type: "Event",
            id: "abc".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Event not found: abc");
    }

    #[tokio::test]
    async fn test_connection_failure_renders_503() {
        let (status, _) = render(RepositoryError::ConnectionFailed("refused".into())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_content_error_renders_400() {
        let (status, body) = render(ContentError::EmptyUpdate).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "No update data provided");
    }

    #[tokio::test]
    async fn test_auth_error_renders_401() {
        let (status, body) = render(AuthError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_unknown_error_renders_500() {
        let (status, body) = render(anyhow::anyhow!("boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "boom");
    }
}
