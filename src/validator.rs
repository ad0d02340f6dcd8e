//! JSON body extraction with validation.
//!
//! [`ValidatedJson`] deserializes the body like [`axum::Json`], then runs the
//! `validator` rules of the target type. Malformed bodies are 400s; bodies
//! that parse but break a rule are 422s. Both render as `{"message": ...}`.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use tickets_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(msg) => msg.to_string(),
                None if error.code == "email" => format!("{} must be a valid email", field),
                None if error.code == "length" => format!("{} must not be empty", field),
                None if error.code == "nul_byte" => format!("{} must not contain NUL bytes", field),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

fn rejection_message(rejection: &JsonRejection) -> String {
    if let JsonRejection::MissingJsonContentType(_) = rejection {
        return "Missing 'Content-Type: application/json' header".to_string();
    }

    let body = rejection.body_text();
    if let Some(field) = body
        .split("missing field `")
        .nth(1)
        .and_then(|rest| rest.split('`').next())
    {
        return format!("{} is required", field);
    }

    if body.contains("invalid type") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(anyhow!(rejection_message(&rejection))))?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!(format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Signup {
        #[validate(email)]
        email: String,
        #[validate(length(min = 1), custom(function = "tickets_models::validation::no_nul_bytes"))]
        name: String,
    }

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let req = json_request(r#"{"email":"ana@x.com","name":"Ana"}"#);
        let ValidatedJson(signup) = ValidatedJson::<Signup>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(signup.name, "Ana");
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let req = json_request(r#"{"email":"ana@x.com"}"#);
        let err = ValidatedJson::<Signup>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "name is required");
    }

    #[tokio::test]
    async fn test_rule_violation_is_unprocessable() {
        let req = json_request(r#"{"email":"nope","name":""}"#);
        let err = ValidatedJson::<Signup>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            err.error.to_string(),
            "email must be a valid email, name must not be empty"
        );
    }

    #[tokio::test]
    async fn test_nul_byte_is_unprocessable() {
        let req = json_request(r#"{"email":"ana@x.com","name":"An\u0000a"}"#);
        let err = ValidatedJson::<Signup>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error.to_string(), "name must not contain NUL bytes");
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let req = HttpRequest::builder()
            .method("POST")
            .body(Body::from("{}"))
            .unwrap();
        let err = ValidatedJson::<Signup>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.error.to_string().contains("Content-Type"));
    }
}
