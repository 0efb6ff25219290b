//! Gallery CRUD handlers.
//!
//! These handlers use the gallery repository trait object for storage access.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use bloom_core::content::{
    validate_gallery_item, ContentError, CreateGalleryItemRequest, GalleryItem, ListGalleryQuery,
    MessageResponse, UpdateGalleryItemRequest,
};
use bloom_core::storage::{parse_record_id, Collection, RepositoryError};

use crate::{handlers::AppError, state::AppState};

const GALLERY_ITEM: &str = Collection::Gallery.entity_type();

fn not_found(id: uuid::Uuid) -> AppError {
    RepositoryError::NotFound {
        entity_type: GALLERY_ITEM,
        id: id.to_string(),
    }
    .into()
}

/// List gallery items, newest first (GET /api/gallery).
pub async fn list_gallery_items(
    State(state): State<AppState>,
    query: Result<Query<ListGalleryQuery>, QueryRejection>,
) -> Result<Json<Vec<GalleryItem>>, AppError> {
    let Query(query) = query?;
    let filter = query.into_filter();
    let items = state.gallery_repo.list_gallery_items(&filter).await?;
    Ok(Json(items))
}

/// Get a single gallery item (GET /api/gallery/{id}).
pub async fn get_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GalleryItem>, AppError> {
    let id = parse_record_id(GALLERY_ITEM, &id)?;

    match state.gallery_repo.get_gallery_item(id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(not_found(id)),
    }
}

/// Create a gallery item (POST /api/gallery).
pub async fn create_gallery_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateGalleryItemRequest>, JsonRejection>,
) -> Result<Json<GalleryItem>, AppError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create gallery item request");

    let item = payload.into_gallery_item();
    validate_gallery_item(&item)?;

    state.gallery_repo.create_gallery_item(&item).await?;

    tracing::info!(gallery_item_id = %item.id, title = %item.title, "Created gallery item");

    Ok(Json(item))
}

/// Partially update a gallery item (PUT /api/gallery/{id}).
///
/// Only fields present and non-null in the body are changed.
pub async fn update_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateGalleryItemRequest>, JsonRejection>,
) -> Result<Json<GalleryItem>, AppError> {
    let Json(payload) = payload?;
    if payload.is_empty() {
        return Err(ContentError::EmptyUpdate.into());
    }

    let id = parse_record_id(GALLERY_ITEM, &id)?;

    let mut item = state
        .gallery_repo
        .get_gallery_item(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    payload.apply_to(&mut item);
    validate_gallery_item(&item)?;

    state.gallery_repo.update_gallery_item(&item).await?;

    tracing::info!(gallery_item_id = %id, "Updated gallery item");

    Ok(Json(item))
}

/// Delete a gallery item (DELETE /api/gallery/{id}).
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_record_id(GALLERY_ITEM, &id)?;

    state.gallery_repo.delete_gallery_item(id).await?;

    tracing::info!(gallery_item_id = %id, "Deleted gallery item");

    Ok(Json(MessageResponse::new("Gallery item deleted successfully")))
}
