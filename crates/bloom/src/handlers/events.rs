//! Event CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use bloom_core::content::{
    validate_event, ContentError, CreateEventRequest, Event, ListEventsQuery, MessageResponse,
    UpdateEventRequest,
};
use bloom_core::storage::{parse_record_id, Collection, RepositoryError};

use crate::{handlers::AppError, state::AppState};

const EVENT: &str = Collection::Events.entity_type();

fn not_found(id: uuid::Uuid) -> AppError {
    RepositoryError::NotFound {
        entity_type: EVENT,
        id: id.to_string(),
    }
    .into()
}

/// List events by date (GET /api/events).
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<ListEventsQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, AppError> {
    let Query(query) = query?;
    let filter = query.into_filter();
    let events = state.event_repo.list_events(&filter).await?;
    Ok(Json(events))
}

/// Get a single event (GET /api/events/{id}).
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let id = parse_record_id(EVENT, &id)?;

    match state.event_repo.get_event(id).await? {
        Some(event) => Ok(Json(event)),
        None => Err(not_found(id)),
    }
}

/// Create an event (POST /api/events).
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<Event>, AppError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create event request");

    let event = payload.into_event();
    validate_event(&event)?;

    state.event_repo.create_event(&event).await?;

    tracing::info!(
        event_id = %event.id,
        title = %event.title,
        date = %event.date,
        "Created event"
    );

    Ok(Json(event))
}

/// Partially update an event (PUT /api/events/{id}).
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<Json<Event>, AppError> {
    let Json(payload) = payload?;
    if payload.is_empty() {
        return Err(ContentError::EmptyUpdate.into());
    }

    let id = parse_record_id(EVENT, &id)?;

    let mut event = state
        .event_repo
        .get_event(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    payload.apply_to(&mut event);
    validate_event(&event)?;

    state.event_repo.update_event(&event).await?;

    tracing::info!(event_id = %id, "Updated event");

    Ok(Json(event))
}

/// Delete an event (DELETE /api/events/{id}).
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_record_id(EVENT, &id)?;

    state.event_repo.delete_event(id).await?;

    tracing::info!(event_id = %id, "Deleted event");

    Ok(Json(MessageResponse::new("Event deleted successfully")))
}
