use axum::Json;
use axum::extract::State;
use tracing::instrument;

use tickets_core::AppError;
use tickets_models::{Event, MessageResponse};

use super::extractor::EventId;
use super::service::EventService;
use crate::state::AppState;

/// List every event
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events, ordered by id", body = Vec<Event>)
    ),
    tag = "Events"
)]
#[instrument(skip_all)]
pub async fn get_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = EventService::list_all(&state.db).await?;
    Ok(Json(events))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found", body = MessageResponse)
    ),
    tag = "Events"
)]
#[instrument(skip_all, fields(event.id = id))]
pub async fn get_event(
    State(state): State<AppState>,
    EventId(id): EventId,
) -> Result<Json<Event>, AppError> {
    let event = EventService::find_by_id(&state.db, id).await?;
    Ok(Json(event))
}
