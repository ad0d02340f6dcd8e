//! Token issuing and verification.
//!
//! Tokens are signed with HS256 using the secret from [`JwtConfig`].
//! Verification checks the signature and the `exp` claim with zero leeway:
//! a token is dead the second its lifetime ends.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use tickets_config::JwtConfig;
use tickets_core::{AppError, AuthError};

use crate::claims::Claims;

/// Issues a token for `user_id`, valid for `jwt_config.token_expiry` seconds from now.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(user_id: i64, email: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let claims = Claims::new(
        user_id,
        email,
        Utc::now().timestamp(),
        jwt_config.token_expiry,
    );
    encode_claims(&claims, jwt_config)
}

/// Signs an arbitrary claim set.
pub fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// [`AuthError::InvalidToken`] when the token is malformed, carries a bad
/// signature, or has expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(error = %e, "Token rejected");
        AuthError::InvalidToken
    })
}
