//! Password hashing and verification.
//!
//! Passwords are stored as bcrypt digests with a fixed cost of [`BCRYPT_COST`].
//! bcrypt is deliberately slow, so request handlers use the `spawn_*`
//! variants, which run the primitive on tokio's blocking pool.

use std::sync::LazyLock;

use anyhow::anyhow;
use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt work factor used for every stored password.
pub const BCRYPT_COST: u32 = 10;

/// A stored-password stand-in for logins whose email matches no user.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("no-such-user-placeholder").ok());

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}

/// Hashes on the blocking thread pool.
pub async fn spawn_hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(AppError::internal)?
}

/// Verifies on the blocking thread pool.
pub async fn spawn_verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(AppError::internal)?
}

/// Spends one verification at [`BCRYPT_COST`] on a throwaway hash.
///
/// Called on the unknown-email branch of login so that it takes as long as
/// the wrong-password branch.
pub async fn spawn_verify_dummy(password: String) -> Result<(), AppError> {
    tokio::task::spawn_blocking(move || {
        if let Some(dummy) = DUMMY_HASH.as_deref() {
            let _ = verify(&password, dummy);
        }
    })
    .await
    .map_err(AppError::internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_uses_fixed_cost() {
        let hashed = hash_password("secret").unwrap();
        // $2b$10$...
        assert_eq!(&hashed[4..6], "10");
    }

    #[test]
    fn test_verify_round() {
        let hashed = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hashed).unwrap());
        assert!(!verify_password("battery staple", &hashed).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("secret", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn test_dummy_hash_matches_stored_cost() {
        let dummy = DUMMY_HASH.as_deref().unwrap();
        assert_eq!(&dummy[4..6], "10");
        assert!(!verify_password("anything", dummy).unwrap());
    }

    #[tokio::test]
    async fn test_spawn_verify_dummy() {
        assert!(spawn_verify_dummy("whatever".to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn test_spawned_variants_agree() {
        let hashed = spawn_hash_password("pw".to_string()).await.unwrap();
        assert!(spawn_verify_password("pw".to_string(), hashed.clone()).await.unwrap());
        assert!(!spawn_verify_password("wrong".to_string(), hashed).await.unwrap());
    }
}
