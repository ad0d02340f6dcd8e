//! Event domain models and DTOs.
//!
//! Events are created by partners and browsable by anyone. They are never
//! updated or deleted through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// When the event takes place (RFC 3339).
    pub date: DateTime<Utc>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    /// Owning partner.
    pub partner_id: i64,
}

/// Body of `POST /partners/events`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEventDto {
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "Rock in Rua 1")]
    pub name: String,
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    pub description: String,
    #[schema(example = "2026-12-31T20:00:00Z")]
    pub date: DateTime<Utc>,
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    pub location: String,
}
