use axum::Json;
use axum::extract::State;
use tracing::instrument;

use tickets_core::AppError;
use tickets_models::{LoginRequest, LoginResponse, MessageResponse};

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Exchange email and password for a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse),
        (status = 422, description = "Validation error", body = MessageResponse),
        (status = 429, description = "Too many login attempts", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(user.email = %dto.email))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}
