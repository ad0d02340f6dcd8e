//! # Tickets Auth
//!
//! Bearer token support for the Tickets API.
//!
//! - [`claims`]: the claim set embedded in every token
//! - [`jwt`]: token issuing and verification
//!
//! Tokens are HS256 JWTs carrying the user's id and email, valid for the
//! configured lifetime (one hour by default). They are stateless: nothing is
//! stored server-side and there is no refresh flow.
//!
//! # Example
//!
//! ```ignore
//! use tickets_auth::{issue_token, verify_token};
//! use tickets_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = issue_token(42, "ana@x.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.id, 42);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{encode_claims, issue_token, verify_token};
