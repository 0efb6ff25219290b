//! Contact form handlers.
//!
//! Messages are created by the public form and managed from the admin
//! dashboard (listing, marking read, deleting).

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use bloom_core::content::{
    validate_contact_message, ContactMessage, CreateContactMessageRequest, ListContactQuery,
    MessageResponse,
};
use bloom_core::storage::{parse_record_id, Collection};

use crate::{handlers::AppError, state::AppState};

const CONTACT_MESSAGE: &str = Collection::ContactMessages.entity_type();

/// Submit a contact message (POST /api/contact).
pub async fn create_contact_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactMessageRequest>, JsonRejection>,
) -> Result<Json<ContactMessage>, AppError> {
    let Json(payload) = payload?;

    let message = payload.into_contact_message();
    validate_contact_message(&message)?;

    state.contact_repo.create_contact_message(&message).await?;

    tracing::info!(contact_message_id = %message.id, "Received contact message");

    Ok(Json(message))
}

/// List contact messages, newest first (GET /api/contact).
pub async fn list_contact_messages(
    State(state): State<AppState>,
    query: Result<Query<ListContactQuery>, QueryRejection>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let Query(query) = query?;
    let messages = state
        .contact_repo
        .list_contact_messages(query.into_filter())
        .await?;
    Ok(Json(messages))
}

/// Mark a contact message as read (PUT /api/contact/{id}/read).
pub async fn mark_contact_message_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_record_id(CONTACT_MESSAGE, &id)?;

    state.contact_repo.mark_contact_message_read(id).await?;

    tracing::info!(contact_message_id = %id, "Marked contact message as read");

    Ok(Json(MessageResponse::new("Message marked as read")))
}

/// Delete a contact message (DELETE /api/contact/{id}).
pub async fn delete_contact_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_record_id(CONTACT_MESSAGE, &id)?;

    state.contact_repo.delete_contact_message(id).await?;

    tracing::info!(contact_message_id = %id, "Deleted contact message");

    Ok(Json(MessageResponse::new("Message deleted successfully")))
}
