//! Customer domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i64,
    pub user_id: i64,
    pub address: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /customers/register`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterCustomerDto {
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "Ana")]
    pub name: String,
    #[validate(email, custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "ana@x.com")]
    pub email: String,
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    pub password: String,
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "Rua 1")]
    pub address: String,
    #[validate(length(min = 1), custom(function = "crate::validation::no_nul_bytes"))]
    #[schema(example = "111")]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerRegistered {
    pub id: i64,
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub address: String,
    pub phone: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_is_accepted() {
        let dto = RegisterCustomerDto {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "pw".to_string(),
            address: "Rua 1".to_string(),
            phone: "111".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_empty_phone_rejected() {
        let dto = RegisterCustomerDto {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "pw".to_string(),
            address: "Rua 1".to_string(),
            phone: String::new(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }
}
