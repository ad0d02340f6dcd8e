use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use tickets_core::AppError;
use tickets_models::{CreateEventDto, Event, MessageResponse, PartnerRegistered, RegisterPartnerDto};

use super::service::PartnerService;
use crate::middleware::auth::CurrentPartner;
use crate::modules::events::extractor::EventId;
use crate::modules::events::service::EventService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a partner account
#[utoipa::path(
    post,
    path = "/partners/register",
    request_body = RegisterPartnerDto,
    responses(
        (status = 201, description = "Partner registered", body = PartnerRegistered),
        (status = 400, description = "Malformed request body", body = MessageResponse),
        (status = 409, description = "Email already exists", body = MessageResponse),
        (status = 422, description = "Validation error", body = MessageResponse)
    ),
    tag = "Partners"
)]
#[instrument(skip_all, fields(user.email = %dto.email))]
pub async fn register_partner(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterPartnerDto>,
) -> Result<(StatusCode, Json<PartnerRegistered>), AppError> {
    let registered = PartnerService::register(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(registered)))
}

/// Create an event owned by the calling partner
#[utoipa::path(
    post,
    path = "/partners/events",
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 401, description = "Missing, invalid or expired token", body = MessageResponse),
        (status = 403, description = "Caller is not a partner", body = MessageResponse),
        (status = 422, description = "Validation error", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Partners"
)]
#[instrument(skip_all, fields(partner.id = partner.id))]
pub async fn create_event(
    State(state): State<AppState>,
    CurrentPartner(partner): CurrentPartner,
    ValidatedJson(dto): ValidatedJson<CreateEventDto>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let event = EventService::create(&state.db, partner.id, dto).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// List the calling partner's events
#[utoipa::path(
    get,
    path = "/partners/events",
    responses(
        (status = 200, description = "Events owned by the caller", body = Vec<Event>),
        (status = 401, description = "Missing, invalid or expired token", body = MessageResponse),
        (status = 403, description = "Caller is not a partner", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Partners"
)]
#[instrument(skip_all, fields(partner.id = partner.id))]
pub async fn get_my_events(
    State(state): State<AppState>,
    CurrentPartner(partner): CurrentPartner,
) -> Result<Json<Vec<Event>>, AppError> {
    let events = EventService::list_for_partner(&state.db, partner.id).await?;
    Ok(Json(events))
}

/// Get one of the calling partner's events
#[utoipa::path(
    get,
    path = "/partners/events/{id}",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 401, description = "Missing, invalid or expired token", body = MessageResponse),
        (status = 403, description = "Caller is not a partner", body = MessageResponse),
        (status = 404, description = "No such event owned by the caller", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Partners"
)]
#[instrument(skip_all, fields(partner.id = partner.id, event.id = id))]
pub async fn get_my_event(
    State(state): State<AppState>,
    CurrentPartner(partner): CurrentPartner,
    EventId(id): EventId,
) -> Result<Json<Event>, AppError> {
    let event = EventService::find_for_partner(&state.db, partner.id, id).await?;
    Ok(Json(event))
}
