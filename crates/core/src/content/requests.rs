//! API request types for content operations.
//!
//! Create payloads carry only the user-supplied subset of fields; ids and
//! timestamps are assigned here, never taken from the client. Update payloads
//! are partial: `None` (absent or JSON null) leaves the stored value as is.

use serde::{Deserialize, Serialize};

use super::filters::{ContactFilter, EventFilter, GalleryFilter};
use super::types::{ContactMessage, Event, GalleryItem, StatusCheck};
use crate::serde::{deserialize_optional_bool, deserialize_optional_string};

/// Request payload for creating a gallery item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGalleryItemRequest {
    pub title: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CreateGalleryItemRequest {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            description: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Convert into a new GalleryItem, applying defaults for omitted fields.
    pub fn into_gallery_item(self) -> GalleryItem {
        let mut item = GalleryItem::new(self.title, self.image_url);
        if let Some(description) = self.description {
            item = item.with_description(description);
        }
        if let Some(category) = self.category {
            item = item.with_category(category);
        }
        item
    }
}

/// Request payload for partially updating a gallery item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGalleryItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateGalleryItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.is_active.is_none()
    }

    /// Apply updates to an existing gallery item.
    pub fn apply_to(self, item: &mut GalleryItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(image_url) = self.image_url {
            item.image_url = image_url;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(is_active) = self.is_active {
            item.is_active = is_active;
        }
    }
}

/// Request payload for creating an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl CreateEventRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            time: time.into(),
            location: location.into(),
            image_url: None,
            category: None,
            is_featured: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }

    /// Convert into a new Event, applying defaults for omitted fields.
    pub fn into_event(self) -> Event {
        let mut event = Event::new(
            self.title,
            self.description,
            self.date,
            self.time,
            self.location,
        );
        if let Some(image_url) = self.image_url {
            event = event.with_image_url(image_url);
        }
        if let Some(category) = self.category {
            event = event.with_category(category);
        }
        if let Some(is_featured) = self.is_featured {
            event = event.with_featured(is_featured);
        }
        event
    }
}

/// Request payload for partially updating an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateEventRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.location.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.is_featured.is_none()
            && self.is_active.is_none()
    }

    /// Apply updates to an existing event.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(image_url) = self.image_url {
            event.image_url = image_url;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(is_featured) = self.is_featured {
            event.is_featured = is_featured;
        }
        if let Some(is_active) = self.is_active {
            event.is_active = is_active;
        }
    }
}

/// Request payload for submitting a contact message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContactMessageRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CreateContactMessageRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn into_contact_message(self) -> ContactMessage {
        let message = ContactMessage::new(self.name, self.email, self.message);
        match self.phone {
            Some(phone) => message.with_phone(phone),
            None => message,
        }
    }
}

/// Request payload for recording a status check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

impl CreateStatusCheckRequest {
    pub fn into_status_check(self) -> StatusCheck {
        StatusCheck::new(self.client_name)
    }
}

/// Query parameters for listing gallery items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListGalleryQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
    /// Defaults to true.
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub active_only: Option<bool>,
}

impl ListGalleryQuery {
    pub fn into_filter(self) -> GalleryFilter {
        GalleryFilter {
            category: self.category,
            active_only: self.active_only.unwrap_or(true),
        }
    }
}

/// Query parameters for listing events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEventsQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
    /// Defaults to false.
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub featured_only: Option<bool>,
    /// Defaults to true.
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub active_only: Option<bool>,
}

impl ListEventsQuery {
    pub fn into_filter(self) -> EventFilter {
        EventFilter {
            category: self.category,
            featured_only: self.featured_only.unwrap_or(false),
            active_only: self.active_only.unwrap_or(true),
        }
    }
}

/// Query parameters for listing contact messages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListContactQuery {
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub unread_only: Option<bool>,
}

impl ListContactQuery {
    pub fn into_filter(self) -> ContactFilter {
        ContactFilter {
            unread_only: self.unread_only.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_gallery_item_applies_defaults() {
        let item = CreateGalleryItemRequest::new("Harvest", "https://img.example/a.jpg")
            .into_gallery_item();
        assert_eq!(item.category, "general");
        assert_eq!(item.description, "");
        assert!(item.is_active);
    }

    #[test]
    fn test_create_gallery_item_keeps_supplied_fields() {
        let item = CreateGalleryItemRequest::new("Harvest", "https://img.example/a.jpg")
            .with_description("Corn")
            .with_category("success-stories")
            .into_gallery_item();
        assert_eq!(item.description, "Corn");
        assert_eq!(item.category, "success-stories");
    }

    #[test]
    fn test_create_payload_ignores_client_id() {
        let json = r#"{"id": "client-chosen", "title": "T", "image_url": "u"}"#;
        let request: CreateGalleryItemRequest = serde_json::from_str(json).unwrap();
        let item = request.into_gallery_item();
        assert_ne!(item.id.to_string(), "client-chosen");
    }

    #[test]
    fn test_update_gallery_item_empty() {
        assert!(UpdateGalleryItemRequest::new().is_empty());
        let from_nulls: UpdateGalleryItemRequest =
            serde_json::from_str(r#"{"title": null, "is_active": null}"#).unwrap();
        assert!(from_nulls.is_empty());
    }

    #[test]
    fn test_update_gallery_item_applies_only_supplied_fields() {
        let mut item = GalleryItem::new("Original", "https://img.example/a.jpg")
            .with_description("Keep me");
        let original_id = item.id;
        let original_created = item.created_at;

        UpdateGalleryItemRequest::new()
            .with_title("Renamed")
            .with_active(false)
            .apply_to(&mut item);

        assert_eq!(item.title, "Renamed");
        assert!(!item.is_active);
        assert_eq!(item.description, "Keep me");
        assert_eq!(item.image_url, "https://img.example/a.jpg");
        assert_eq!(item.id, original_id);
        assert_eq!(item.created_at, original_created);
    }

    #[test]
    fn test_create_event_applies_defaults() {
        let event = CreateEventRequest::new("W", "D", "2025-09-15", "09:00", "Windhoek").into_event();
        assert_eq!(event.category, "workshop");
        assert!(!event.is_featured);
        assert_eq!(event.image_url, "");
    }

    #[test]
    fn test_update_event_applies_only_supplied_fields() {
        let mut event = Event::new("W", "D", "2025-09-15", "09:00", "Windhoek");
        let request = UpdateEventRequest::new()
            .with_date("2025-10-01")
            .with_featured(true);
        assert!(!request.is_empty());
        request.apply_to(&mut event);
        assert_eq!(event.date, "2025-10-01");
        assert!(event.is_featured);
        assert_eq!(event.title, "W");
    }

    #[test]
    fn test_update_event_empty() {
        let request: UpdateEventRequest = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_create_contact_message() {
        let message = CreateContactMessageRequest::new("A", "a@x.com", "hi")
            .with_phone("+264 61 000 000")
            .into_contact_message();
        assert_eq!(message.phone, "+264 61 000 000");
        assert!(!message.is_read);
    }

    #[test]
    fn test_list_gallery_query_defaults() {
        let filter = ListGalleryQuery::default().into_filter();
        assert_eq!(filter, GalleryFilter::active());
    }

    #[test]
    fn test_list_gallery_query_empty_category_is_no_filter() {
        let query: ListGalleryQuery = serde_json::from_str(r#"{"category": ""}"#).unwrap();
        assert_eq!(query.into_filter(), GalleryFilter::active());
    }

    #[test]
    fn test_list_events_query_defaults() {
        let filter = ListEventsQuery::default().into_filter();
        assert_eq!(filter, EventFilter::active());
    }

    #[test]
    fn test_list_events_query_flags() {
        let query: ListEventsQuery = serde_json::from_str(
            r#"{"category": "seminar", "featured_only": "true", "active_only": "false"}"#,
        )
        .unwrap();
        let filter = query.into_filter();
        assert_eq!(filter.category.as_deref(), Some("seminar"));
        assert!(filter.featured_only);
        assert!(!filter.active_only);
    }

    #[test]
    fn test_list_contact_query_defaults_to_all() {
        assert_eq!(ListContactQuery::default().into_filter(), ContactFilter::all());
    }
}
