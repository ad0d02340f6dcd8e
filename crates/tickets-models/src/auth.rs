//! Authentication DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Login request with email and password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email, custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "ana@x.com")]
    pub email: String,
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "pw")]
    pub password: String,
}

/// Successful login: a bearer token valid for one hour.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
