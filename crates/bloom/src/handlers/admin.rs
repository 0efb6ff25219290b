//! Admin dashboard handlers.
//!
//! Login checks the single configured principal and hands back an opaque
//! token. Nothing verifies the token afterwards.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use bloom_core::admin::{login, LoginRequest, LoginResponse};
use bloom_core::content::{AdminStats, ContactFilter, EventFilter, GalleryFilter};
use bloom_core::storage::Result as RepositoryResult;

use crate::{handlers::AppError, state::AppState};

/// Admin login (POST /api/admin/login).
pub async fn admin_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(request) = payload?;

    match login(&state.admin, &request, chrono::Utc::now()) {
        Ok(response) => {
            tracing::info!(username = %request.username, "Admin logged in");
            Ok(Json(response))
        }
        Err(e) => {
            tracing::warn!(username = %request.username, "Rejected admin login");
            Err(e.into())
        }
    }
}

/// Collapses a failed count to zero, logging the failure.
fn count_or_zero(counter: &'static str, result: RepositoryResult<usize>) -> u64 {
    match result {
        Ok(count) => count as u64,
        Err(e) => {
            tracing::warn!(counter, error = %e, "Failed to compute admin stat");
            0
        }
    }
}

/// Dashboard counters (GET /api/admin/stats).
pub async fn admin_stats(State(state): State<AppState>) -> Json<AdminStats> {
    let gallery = state
        .gallery_repo
        .list_gallery_items(&GalleryFilter::active())
        .await
        .map(|items| items.len());
    let events = state
        .event_repo
        .list_events(&EventFilter::active())
        .await
        .map(|events| events.len());
    let messages = state
        .contact_repo
        .list_contact_messages(ContactFilter::all())
        .await
        .map(|messages| messages.len());
    let unread = state
        .contact_repo
        .list_contact_messages(ContactFilter::unread())
        .await
        .map(|messages| messages.len());

    Json(AdminStats {
        gallery_count: count_or_zero("gallery_count", gallery),
        events_count: count_or_zero("events_count", events),
        messages_count: count_or_zero("messages_count", messages),
        unread_messages: count_or_zero("unread_messages", unread),
    })
}
