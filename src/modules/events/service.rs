use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use tickets_core::AppError;
use tickets_models::{CreateEventDto, Event};

use crate::metrics;

pub struct EventService;

impl EventService {
    #[instrument(skip(db, dto), fields(db.operation = "INSERT", db.table = "events"))]
    pub async fn create(db: &PgPool, partner_id: i64, dto: CreateEventDto) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (name, description, date, location, partner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, description, date, location, created_at, partner_id",
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.date)
        .bind(&dto.location)
        .bind(partner_id)
        .fetch_one(db)
        .await?;

        metrics::track_event_created();
        info!(event.id = event.id, "Event created");

        Ok(event)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "events"))]
    pub async fn list_all(db: &PgPool) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, name, description, date, location, created_at, partner_id
             FROM events ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "events"))]
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "SELECT id, name, description, date, location, created_at, partner_id
             FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Event not found")))
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "events"))]
    pub async fn list_for_partner(db: &PgPool, partner_id: i64) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, name, description, date, location, created_at, partner_id
             FROM events WHERE partner_id = $1 ORDER BY id",
        )
        .bind(partner_id)
        .fetch_all(db)
        .await?;

        debug!(count = events.len(), "Fetched partner events");
        Ok(events)
    }

    /// An event only if it belongs to `partner_id`; other partners' events are 404s.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "events"))]
    pub async fn find_for_partner(db: &PgPool, partner_id: i64, id: i64) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "SELECT id, name, description, date, location, created_at, partner_id
             FROM events WHERE partner_id = $1 AND id = $2",
        )
        .bind(partner_id)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Event not found")))
    }
}
