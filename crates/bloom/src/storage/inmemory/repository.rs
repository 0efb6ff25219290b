//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloom_core::content::{
    sort_contact_messages, sort_events, sort_gallery_items, sort_status_checks, ContactFilter,
    ContactMessage, Event, EventFilter, GalleryFilter, GalleryItem, StatusCheck,
};
use bloom_core::storage::{
    Collection, ContactRepository, EventRepository, GalleryRepository, RepositoryError, Result,
    StatusRepository,
};

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    gallery: Arc<RwLock<HashMap<Uuid, GalleryItem>>>,
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
    messages: Arc<RwLock<HashMap<Uuid, ContactMessage>>>,
    status_checks: Arc<RwLock<HashMap<Uuid, StatusCheck>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            gallery: Arc::new(RwLock::new(HashMap::new())),
            events: Arc::new(RwLock::new(HashMap::new())),
            messages: Arc::new(RwLock::new(HashMap::new())),
            status_checks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn not_found(collection: Collection, id: Uuid) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: collection.entity_type(),
        id: id.to_string(),
    }
}

fn already_exists(collection: Collection, id: Uuid) -> RepositoryError {
    RepositoryError::AlreadyExists {
        entity_type: collection.entity_type(),
        id: id.to_string(),
    }
}

#[async_trait]
impl GalleryRepository for InMemoryRepository {
    async fn list_gallery_items(&self, filter: &GalleryFilter) -> Result<Vec<GalleryItem>> {
        let gallery = self.gallery.read().await;
        let mut items: Vec<GalleryItem> = gallery
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        sort_gallery_items(&mut items);
        Ok(items)
    }

    async fn get_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>> {
        let gallery = self.gallery.read().await;
        Ok(gallery.get(&id).cloned())
    }

    async fn create_gallery_item(&self, item: &GalleryItem) -> Result<()> {
        let mut gallery = self.gallery.write().await;
        if gallery.contains_key(&item.id) {
            return Err(already_exists(Collection::Gallery, item.id));
        }
        gallery.insert(item.id, item.clone());
        Ok(())
    }

    async fn update_gallery_item(&self, item: &GalleryItem) -> Result<()> {
        let mut gallery = self.gallery.write().await;
        match gallery.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(())
            }
            None => Err(not_found(Collection::Gallery, item.id)),
        }
    }

    async fn delete_gallery_item(&self, id: Uuid) -> Result<()> {
        let mut gallery = self.gallery.write().await;
        gallery
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(Collection::Gallery, id))
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let mut matching: Vec<Event> = events
            .values()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect();
        sort_events(&mut matching);
        Ok(matching)
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.id) {
            return Err(already_exists(Collection::Events, event.id));
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        match events.get_mut(&event.id) {
            Some(existing) => {
                *existing = event.clone();
                Ok(())
            }
            None => Err(not_found(Collection::Events, event.id)),
        }
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let mut events = self.events.write().await;
        events
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(Collection::Events, id))
    }
}

#[async_trait]
impl ContactRepository for InMemoryRepository {
    async fn list_contact_messages(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>> {
        let messages = self.messages.read().await;
        let mut matching: Vec<ContactMessage> = messages
            .values()
            .filter(|message| filter.matches(message))
            .cloned()
            .collect();
        sort_contact_messages(&mut matching);
        Ok(matching)
    }

    async fn get_contact_message(&self, id: Uuid) -> Result<Option<ContactMessage>> {
        let messages = self.messages.read().await;
        Ok(messages.get(&id).cloned())
    }

    async fn create_contact_message(&self, message: &ContactMessage) -> Result<()> {
        let mut messages = self.messages.write().await;
        if messages.contains_key(&message.id) {
            return Err(already_exists(Collection::ContactMessages, message.id));
        }
        messages.insert(message.id, message.clone());
        Ok(())
    }

    async fn mark_contact_message_read(&self, id: Uuid) -> Result<()> {
        let mut messages = self.messages.write().await;
        let message = messages
            .get_mut(&id)
            .ok_or_else(|| not_found(Collection::ContactMessages, id))?;
        message.is_read = true;
        Ok(())
    }

    async fn delete_contact_message(&self, id: Uuid) -> Result<()> {
        let mut messages = self.messages.write().await;
        messages
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(Collection::ContactMessages, id))
    }
}

#[async_trait]
impl StatusRepository for InMemoryRepository {
    async fn list_status_checks(&self) -> Result<Vec<StatusCheck>> {
        let status_checks = self.status_checks.read().await;
        let mut checks: Vec<StatusCheck> = status_checks.values().cloned().collect();
        sort_status_checks(&mut checks);
        Ok(checks)
    }

    async fn create_status_check(&self, check: &StatusCheck) -> Result<()> {
        let mut status_checks = self.status_checks.write().await;
        if status_checks.contains_key(&check.id) {
            return Err(already_exists(Collection::StatusChecks, check.id));
        }
        status_checks.insert(check.id, check.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    // ==================== Gallery Tests ====================

    #[tokio::test]
    async fn test_gallery_create_and_get() {
        let repo = InMemoryRepository::new();
        let item = GalleryItem::new("Harvest", "https://img.example/harvest.jpg");

        repo.create_gallery_item(&item).await.unwrap();

        let retrieved = repo.get_gallery_item(item.id).await.unwrap();
        assert_eq!(retrieved, Some(item));
    }

    #[tokio::test]
    async fn test_gallery_create_duplicate_id() {
        let repo = InMemoryRepository::new();
        let item = GalleryItem::new("Harvest", "https://img.example/harvest.jpg");

        repo.create_gallery_item(&item).await.unwrap();
        let result = repo.create_gallery_item(&item).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_gallery_list_filters_and_sorts() {
        let repo = InMemoryRepository::new();
        let now = Utc::now();
        let older = GalleryItem::new("Older", "a.jpg")
            .with_category("farms")
            .with_created_at(now - Duration::hours(1));
        let newer = GalleryItem::new("Newer", "b.jpg")
            .with_category("farms")
            .with_created_at(now);
        let hidden = GalleryItem::new("Hidden", "c.jpg")
            .with_category("farms")
            .with_active(false);
        let other = GalleryItem::new("Other", "d.jpg").with_category("projects");
        for item in [&older, &newer, &hidden, &other] {
            repo.create_gallery_item(item).await.unwrap();
        }

        let items = repo
            .list_gallery_items(&GalleryFilter::active().with_category("farms"))
            .await
            .unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);

        let everything = repo.list_gallery_items(&GalleryFilter::all()).await.unwrap();
        assert_eq!(everything.len(), 4);
    }

    #[tokio::test]
    async fn test_gallery_update() {
        let repo = InMemoryRepository::new();
        let mut item = GalleryItem::new("Original", "a.jpg");
        repo.create_gallery_item(&item).await.unwrap();

        item.title = "Updated".to_string();
        repo.update_gallery_item(&item).await.unwrap();

        let retrieved = repo.get_gallery_item(item.id).await.unwrap().unwrap();
        assert_eq!(retrieved.title, "Updated");
    }

    #[tokio::test]
    async fn test_gallery_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let item = GalleryItem::new("Ghost", "a.jpg");

        let result = repo.update_gallery_item(&item).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_gallery_delete() {
        let repo = InMemoryRepository::new();
        let item = GalleryItem::new("Harvest", "a.jpg");
        repo.create_gallery_item(&item).await.unwrap();

        repo.delete_gallery_item(item.id).await.unwrap();

        assert!(repo.get_gallery_item(item.id).await.unwrap().is_none());
        let again = repo.delete_gallery_item(item.id).await;
        assert!(matches!(again, Err(RepositoryError::NotFound { .. })));
    }

    // ==================== Event Tests ====================

    #[tokio::test]
    async fn test_events_list_sorted_by_date() {
        let repo = InMemoryRepository::new();
        let late = Event::new("Late", "d", "2025-11-20", "t", "l");
        let early = Event::new("Early", "d", "2025-08-28", "t", "l").with_featured(true);
        repo.create_event(&late).await.unwrap();
        repo.create_event(&early).await.unwrap();

        let events = repo.list_events(&EventFilter::active()).await.unwrap();
        assert_eq!(events[0].title, "Early");
        assert_eq!(events[1].title, "Late");

        let featured = repo
            .list_events(&EventFilter::active().featured())
            .await
            .unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, early.id);
    }

    #[tokio::test]
    async fn test_event_update_and_delete() {
        let repo = InMemoryRepository::new();
        let mut event = Event::new("Seminar", "d", "2025-10-05", "t", "l");
        repo.create_event(&event).await.unwrap();

        event.is_featured = true;
        repo.update_event(&event).await.unwrap();
        assert!(repo.get_event(event.id).await.unwrap().unwrap().is_featured);

        repo.delete_event(event.id).await.unwrap();
        let missing = repo.delete_event(event.id).await;
        assert!(matches!(missing, Err(RepositoryError::NotFound { .. })));
    }

    // ==================== Contact Tests ====================

    #[tokio::test]
    async fn test_contact_mark_read() {
        let repo = InMemoryRepository::new();
        let message = ContactMessage::new("A", "a@x.com", "hi");
        repo.create_contact_message(&message).await.unwrap();

        repo.mark_contact_message_read(message.id).await.unwrap();

        let stored = repo.get_contact_message(message.id).await.unwrap().unwrap();
        assert!(stored.is_read);
        let unread = repo
            .list_contact_messages(ContactFilter::unread())
            .await
            .unwrap();
        assert!(unread.is_empty());
    }

    #[tokio::test]
    async fn test_contact_mark_read_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.mark_contact_message_read(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_contact_list_newest_first() {
        let repo = InMemoryRepository::new();
        let now = Utc::now();
        let first = ContactMessage::new("First", "a@x.com", "hi").with_created_at(now);
        let second = ContactMessage::new("Second", "b@x.com", "hi")
            .with_created_at(now + Duration::seconds(1));
        repo.create_contact_message(&first).await.unwrap();
        repo.create_contact_message(&second).await.unwrap();

        let messages = repo
            .list_contact_messages(ContactFilter::all())
            .await
            .unwrap();
        assert_eq!(messages[0].name, "Second");

        repo.delete_contact_message(first.id).await.unwrap();
        assert_eq!(
            repo.list_contact_messages(ContactFilter::all())
                .await
                .unwrap()
                .len(),
            1
        );
    }

    // ==================== Status Tests ====================

    #[tokio::test]
    async fn test_status_checks_oldest_first() {
        let repo = InMemoryRepository::new();
        let now = Utc::now();
        let second = StatusCheck::new("second").with_timestamp(now + Duration::seconds(1));
        let first = StatusCheck::new("first").with_timestamp(now);
        repo.create_status_check(&second).await.unwrap();
        repo.create_status_check(&first).await.unwrap();

        let checks = repo.list_status_checks().await.unwrap();
        let names: Vec<&str> = checks.iter().map(|c| c.client_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
