use anyhow::anyhow;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use tracing::debug;

use tickets_core::AppError;

/// An event id taken from the `{id}` path segment.
///
/// Anything that does not parse as an id (`abc`, out-of-range numbers)
/// cannot name an event, so it is answered like a missing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventId(pub i64);

impl<S> FromRequestParts<S> for EventId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection.body_text(), "Unparsable event id");
                AppError::not_found(anyhow!("Event not found"))
            })?;

        Ok(EventId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/events/{id}",
            get(|EventId(id): EventId| async move { Json(json!({ "id": id })) }),
        )
    }

    async fn get_path(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_numeric_id() {
        let (status, body) = get_path("/events/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 42);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let (status, body) = get_path("/events/abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Event not found");
    }

    #[tokio::test]
    async fn test_out_of_range_id_is_not_found() {
        let (status, body) = get_path("/events/99999999999999999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Event not found");
    }
}
