use async_trait::async_trait;
use uuid::Uuid;

use crate::content::{
    ContactFilter, ContactMessage, Event, EventFilter, GalleryFilter, GalleryItem, StatusCheck,
};

use super::Result;

/// Repository for gallery item operations.
#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Lists gallery items matching the filter, newest first.
    async fn list_gallery_items(&self, filter: &GalleryFilter) -> Result<Vec<GalleryItem>>;

    /// Gets a gallery item by its ID.
    async fn get_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>>;

    /// Creates a new gallery item.
    async fn create_gallery_item(&self, item: &GalleryItem) -> Result<()>;

    /// Replaces an existing gallery item. Fails with `NotFound` if absent.
    async fn update_gallery_item(&self, item: &GalleryItem) -> Result<()>;

    /// Deletes a gallery item by its ID. Fails with `NotFound` if absent.
    async fn delete_gallery_item(&self, id: Uuid) -> Result<()>;
}

/// Repository for event operations.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Lists events matching the filter, by date ascending.
    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>>;

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>>;

    async fn create_event(&self, event: &Event) -> Result<()>;

    /// Replaces an existing event. Fails with `NotFound` if absent.
    async fn update_event(&self, event: &Event) -> Result<()>;

    async fn delete_event(&self, id: Uuid) -> Result<()>;
}

/// Repository for contact form submissions.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Lists messages matching the filter, newest first.
    async fn list_contact_messages(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>>;

    async fn get_contact_message(&self, id: Uuid) -> Result<Option<ContactMessage>>;

    async fn create_contact_message(&self, message: &ContactMessage) -> Result<()>;

    /// Sets `is_read` on a message. Fails with `NotFound` if absent.
    async fn mark_contact_message_read(&self, id: Uuid) -> Result<()>;

    async fn delete_contact_message(&self, id: Uuid) -> Result<()>;
}

/// Append-only store of status checks.
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Lists every status check, oldest first.
    async fn list_status_checks(&self) -> Result<Vec<StatusCheck>>;

    async fn create_status_check(&self, check: &StatusCheck) -> Result<()>;
}
