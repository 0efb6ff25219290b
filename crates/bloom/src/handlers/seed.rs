//! Data bootstrap handlers.

use axum::{extract::State, Json};

use bloom_core::content::{
    seed_events, seed_gallery_items, GalleryFilter, SeedReport, TableDefinitions,
};
use bloom_core::storage::TABLE_DEFINITIONS;

use crate::{handlers::AppError, state::AppState};

/// Populate an empty datastore with fixture content (POST /api/seed).
///
/// A non-empty gallery (active or not) means the store was seeded already.
/// Individual insert failures are logged and skipped.
pub async fn seed_database(State(state): State<AppState>) -> Result<Json<SeedReport>, AppError> {
    let existing = state
        .gallery_repo
        .list_gallery_items(&GalleryFilter::all())
        .await?;
    if !existing.is_empty() {
        tracing::debug!(count = existing.len(), "Skipping seed, gallery not empty");
        return Ok(Json(SeedReport::already_seeded()));
    }

    let mut gallery_items = 0;
    for item in seed_gallery_items() {
        match state.gallery_repo.create_gallery_item(&item).await {
            Ok(()) => gallery_items += 1,
            Err(e) => {
                tracing::warn!(title = %item.title, error = %e, "Failed to seed gallery item")
            }
        }
    }

    let mut events = 0;
    for event in seed_events() {
        match state.event_repo.create_event(&event).await {
            Ok(()) => events += 1,
            Err(e) => tracing::warn!(title = %event.title, error = %e, "Failed to seed event"),
        }
    }

    tracing::info!(gallery_items, events, "Seeded database");

    Ok(Json(SeedReport::seeded(gallery_items, events)))
}

/// SQL for creating the tables a relational backend expects (POST /api/init-tables).
pub async fn init_tables() -> Json<TableDefinitions> {
    Json(TableDefinitions {
        message: "Run these SQL statements in the Supabase SQL editor".to_string(),
        sql: TABLE_DEFINITIONS.to_string(),
    })
}
