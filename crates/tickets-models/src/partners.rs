//! Partner domain models and DTOs.
//!
//! A partner is a user that organizes events. Registration creates the user
//! row and the partner row together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Partner {
    pub id: i64,
    pub user_id: i64,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /partners/register`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterPartnerDto {
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "Joana")]
    pub name: String,
    #[validate(email, custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "joana@shows.com")]
    pub email: String,
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    pub password: String,
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "Shows & Co")]
    pub company_name: String,
}

/// Response of a successful partner registration.
///
/// `id` is the partner id; `userId` is the id of the login identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnerRegistered {
    pub id: i64,
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub company_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
