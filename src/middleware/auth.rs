//! Bearer authentication.
//!
//! [`authenticate`] is layered over the whole API router. For every request
//! that is not on the public allow-list it:
//!
//! 1. takes the token from the second whitespace-separated segment of the
//!    `Authorization` header,
//! 2. verifies its signature and expiry,
//! 3. loads the user named by the token's `id` claim,
//! 4. attaches `{id, email}` of that user as an [`AuthUser`] extension.
//!
//! Any failure short-circuits with a 401 and the handler never runs. A
//! database failure during the lookup is a 500, not a 401.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, Method, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use tickets_auth::verify_token;
use tickets_core::{AppError, AuthError};
use tickets_models::Partner;

use crate::metrics::track_auth_rejection;
use crate::modules::auth::service::AuthService;
use crate::modules::partners::service::PartnerService;
use crate::state::AppState;

/// A `(method, path prefix)` pair that skips authentication.
#[derive(Debug)]
pub struct PublicRoute {
    pub method: Method,
    pub prefix: &'static str,
}

/// Requests matching any entry pass through untouched.
///
/// Matching is by prefix, so `GET /events/42` is covered by `GET /events`.
pub static PUBLIC_ROUTES: [PublicRoute; 7] = [
    PublicRoute {
        method: Method::POST,
        prefix: "/auth/login",
    },
    PublicRoute {
        method: Method::POST,
        prefix: "/partners/register",
    },
    PublicRoute {
        method: Method::POST,
        prefix: "/customers/register",
    },
    PublicRoute {
        method: Method::GET,
        prefix: "/events",
    },
    PublicRoute {
        method: Method::GET,
        prefix: "/swagger-ui",
    },
    PublicRoute {
        method: Method::GET,
        prefix: "/api-docs",
    },
    PublicRoute {
        method: Method::GET,
        prefix: "/scalar",
    },
];

pub fn is_public(method: &Method, path: &str) -> bool {
    PUBLIC_ROUTES
        .iter()
        .any(|route| route.method == *method && path.starts_with(route.prefix))
}

/// The token part of `Authorization: Bearer <token>`.
///
/// The scheme word is not checked; only the second segment matters.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)
}

/// The authenticated caller, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_public(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let identity = resolve_identity(&state, req.headers())
        .await
        .inspect_err(|err| {
            if let Some(kind) = err.auth_error() {
                warn!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    reason = kind.kind(),
                    "Request rejected by authentication"
                );
                track_auth_rejection(kind.kind());
            }
        })?;

    debug!(user.id = identity.id, "Request authenticated");
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

async fn resolve_identity(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers).ok_or(AuthError::Unauthenticated)?;
    let claims = verify_token(token, &state.jwt_config)?;

    let user = AuthService::find_identity(&state.db, claims.id)
        .await?
        .ok_or(AuthError::UnknownUser)?;

    Ok(AuthUser {
        id: user.id,
        email: user.email,
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthError::Unauthenticated.into())
    }
}

/// The partner profile of the authenticated caller.
///
/// Rejects with 403 when the caller has no partner profile.
#[derive(Debug, Clone)]
pub struct CurrentPartner(pub Partner);

impl FromRequestParts<AppState> for CurrentPartner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let partner = PartnerService::find_by_user_id(&state.db, auth_user.id)
            .await?
            .ok_or_else(|| {
                warn!(user.id = auth_user.id, "Partner-only route called by non-partner");
                AppError::forbidden(anyhow!("Unauthorized access"))
            })?;

        Ok(CurrentPartner(partner))
    }
}
