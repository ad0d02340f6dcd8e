//! Middleware and extractors for cross-cutting request concerns.
//!
//! - [`auth`]: the authentication layer plus the `AuthUser` and
//!   `CurrentPartner` extractors
//! - [`rate_limit`]: per-client throttling of `POST /auth/login`
//!
//! # Authentication Flow
//!
//! 1. [`auth::authenticate`] runs on every request routed by the API router
//! 2. Requests matching the public allow-list pass straight through
//! 3. Otherwise the bearer token is verified and its user looked up
//! 4. The resolved [`auth::AuthUser`] is stored in the request extensions
//! 5. Handlers take `AuthUser` (or `CurrentPartner`) as a parameter
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::CurrentPartner;
//!
//! async fn list_my_events(
//!     State(state): State<AppState>,
//!     CurrentPartner(partner): CurrentPartner,
//! ) -> Result<Json<Vec<Event>>, AppError> {
//!     // Only reached for authenticated users with a partner profile
//! }
//! ```

pub mod auth;
pub mod rate_limit;
