//! # Tickets Core
//!
//! Foundational types shared by every Tickets crate:
//!
//! - [`errors`]: [`AppError`] and [`AuthError`] with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use tickets_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Event not found"));
//! ```

pub mod errors;
pub mod password;

pub use errors::{AppError, AuthError};
pub use password::{
    BCRYPT_COST, hash_password, spawn_hash_password, spawn_verify_dummy, spawn_verify_password,
    verify_password,
};
