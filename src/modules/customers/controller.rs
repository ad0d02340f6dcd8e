use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use tickets_core::AppError;
use tickets_models::{CustomerRegistered, MessageResponse, RegisterCustomerDto};

use super::service::CustomerService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a customer account
#[utoipa::path(
    post,
    path = "/customers/register",
    request_body = RegisterCustomerDto,
    responses(
        (status = 201, description = "Customer registered", body = CustomerRegistered),
        (status = 400, description = "Malformed request body", body = MessageResponse),
        (status = 409, description = "Email already exists", body = MessageResponse),
        (status = 422, description = "Validation error", body = MessageResponse)
    ),
    tag = "Customers"
)]
#[instrument(skip_all, fields(user.email = %dto.email))]
pub async fn register_customer(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterCustomerDto>,
) -> Result<(StatusCode, Json<CustomerRegistered>), AppError> {
    let registered = CustomerService::register(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(registered)))
}
