//! Application error types with HTTP response conversion.
//!
//! Every handler returns [`AppError`] on failure. It pairs an HTTP status with
//! an [`anyhow::Error`] and renders as a JSON `{"message": ...}` body.
//!
//! Authentication failures are modelled separately as [`AuthError`] so the
//! middleware and the login flow can name the exact rejection. Converting an
//! `AuthError` into an `AppError` (usually through `?`) keeps its 401 status;
//! any other error defaults to 500.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Reasons a request can fail authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No bearer token was supplied.
    #[error("Token not provided")]
    Unauthenticated,
    /// The token failed signature, format or expiry checks.
    #[error("Invalid or expired token")]
    InvalidToken,
    /// The token is valid but its user no longer exists.
    #[error("User not found")]
    UnknownUser,
    /// Login email/password mismatch.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl AuthError {
    /// Short machine-readable label, used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::Unauthenticated => "unauthenticated",
            AuthError::InvalidToken => "invalid_token",
            AuthError::UnknownUser => "unknown_user",
            AuthError::InvalidCredentials => "invalid_credentials",
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn too_many_requests<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::TOO_MANY_REQUESTS, err)
    }

    /// The authentication failure behind this error, if there is one.
    pub fn auth_error(&self) -> Option<&AuthError> {
        self.error.downcast_ref::<AuthError>()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.status.is_server_error() {
            error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        };

        (self.status, Json(json!({ "message": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        let error = err.into();
        let status = error
            .downcast_ref::<AuthError>()
            .map(AuthError::status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Self { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_auth_error_converts_to_unauthorized() {
        for kind in [
            AuthError::Unauthenticated,
            AuthError::InvalidToken,
            AuthError::UnknownUser,
            AuthError::InvalidCredentials,
        ] {
            let err: AppError = kind.into();
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(err.auth_error(), Some(&kind));
        }
    }

    #[test]
    fn test_other_errors_default_to_internal() {
        let err: AppError = std::io::Error::other("disk on fire").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.auth_error().is_none());
    }

    #[test]
    fn test_auth_error_kinds() {
        assert_eq!(AuthError::Unauthenticated.kind(), "unauthenticated");
        assert_eq!(AuthError::InvalidToken.kind(), "invalid_token");
        assert_eq!(AuthError::UnknownUser.kind(), "unknown_user");
        assert_eq!(AuthError::InvalidCredentials.kind(), "invalid_credentials");
    }

    #[tokio::test]
    async fn test_client_error_body_carries_message() {
        let response = AppError::forbidden(anyhow!("Unauthorized access")).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Unauthorized access");
    }

    #[tokio::test]
    async fn test_server_error_body_hides_details() {
        let response = AppError::internal(anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_auth_error_body() {
        let response = AppError::from(AuthError::Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Token not provided");
    }
}
